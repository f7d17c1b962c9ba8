//! Section 4.15: Memoization
//!
//! Tree-recursive Fibonacci repeats an enormous amount of work; a memo
//! table indexed by the argument removes all of it. The section ends
//! with the book's generalization: `memoizer(seed, formula)` builds a
//! memoized recursive function from its seed values and one recurrence
//! step, and derives both Fibonacci and factorial from it. That
//! generalization is this section's exhibit, not a caching library.

/// Fibonacci by tree recursion, exactly as the book first writes it.
///
/// Exponential time; fine for the small arguments the book uses.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_15::fib_naive;
/// assert_eq!(fib_naive(10), 55);
/// ```
pub fn fib_naive(n: u64) -> u64 {
    if n < 2 {
        n
    } else {
        fib_naive(n - 1) + fib_naive(n - 2)
    }
}

/// Fibonacci with an explicit memo table seeded `[0, 1]`.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_15::fib_memo;
/// assert_eq!(fib_memo(10), 55);
/// ```
pub fn fib_memo(n: usize) -> u64 {
    fn fib(memo: &mut Vec<Option<u64>>, n: usize) -> u64 {
        if let Some(Some(value)) = memo.get(n) {
            return *value;
        }
        let value = fib(memo, n - 1) + fib(memo, n - 2);
        if memo.len() <= n {
            memo.resize(n + 1, None);
        }
        memo[n] = Some(value);
        value
    }
    let mut memo = vec![Some(0), Some(1)];
    fib(&mut memo, n)
}

/// Builds a memoized recursive function from seed values and a
/// recurrence step.
///
/// `formula` receives a `recur` callback for its recursive calls;
/// every computed result lands in the memo table, so `formula` runs at
/// most once per argument. Seeded arguments never reach `formula` at
/// all, which is how the base cases are supplied.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_15::memoizer;
///
/// let mut fibonacci = memoizer(&[0, 1], |recur, n| recur(n - 1) + recur(n - 2));
/// assert_eq!(fibonacci(10), 55);
/// ```
pub fn memoizer<F>(seed: &[u64], formula: F) -> impl FnMut(usize) -> u64
where
    F: Fn(&mut dyn FnMut(usize) -> u64, usize) -> u64,
{
    let mut memo: Vec<Option<u64>> = seed.iter().copied().map(Some).collect();
    move |n| recur(&mut memo, &formula, n)
}

fn recur<F>(memo: &mut Vec<Option<u64>>, formula: &F, n: usize) -> u64
where
    F: Fn(&mut dyn FnMut(usize) -> u64, usize) -> u64,
{
    if let Some(Some(value)) = memo.get(n) {
        return *value;
    }
    let value = {
        let mut callback = |k: usize| recur(&mut *memo, formula, k);
        formula(&mut callback, n)
    };
    if memo.len() <= n {
        memo.resize(n + 1, None);
    }
    memo[n] = Some(value);
    value
}

/// Memoized Fibonacci derived from [`memoizer`].
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_15::fibonacci;
///
/// let mut fibonacci = fibonacci();
/// assert_eq!(fibonacci(10), 55);
/// ```
pub fn fibonacci() -> impl FnMut(usize) -> u64 {
    memoizer(&[0, 1], |recur: &mut dyn FnMut(usize) -> u64, n: usize| {
        recur(n - 1) + recur(n - 2)
    })
}

/// Memoized factorial derived from [`memoizer`], the book's proof that
/// only the seed and the recurrence change.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_15::factorial;
///
/// let mut factorial = factorial();
/// assert_eq!(factorial(5), 120);
/// ```
pub fn factorial() -> impl FnMut(usize) -> u64 {
    memoizer(&[1, 1], |recur: &mut dyn FnMut(usize) -> u64, n: usize| {
        n as u64 * recur(n - 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_naive_and_memoized_agree() {
        let mut memoized = fibonacci();
        for n in 0..=10 {
            assert_eq!(fib_naive(n as u64), fib_memo(n));
            assert_eq!(fib_naive(n as u64), memoized(n));
        }
    }

    #[test]
    fn test_memoization_reduces_evaluations() {
        // Tree recursion evaluates fib 2*fib(n+1) - 1 times per call;
        // over the book's 0..=10 loop that is 453 evaluations.
        fn counted(n: u64, calls: &mut u64) -> u64 {
            *calls += 1;
            if n < 2 {
                n
            } else {
                counted(n - 1, calls) + counted(n - 2, calls)
            }
        }
        let mut naive_calls = 0;
        for n in 0..=10 {
            counted(n, &mut naive_calls);
        }
        assert_eq!(naive_calls, 453);

        // The memoized formula runs once per unseeded argument: 2..=10.
        let formula_calls = Cell::new(0_u64);
        let mut fibonacci = memoizer(&[0, 1], |recur: &mut dyn FnMut(usize) -> u64, n: usize| {
            formula_calls.set(formula_calls.get() + 1);
            recur(n - 1) + recur(n - 2)
        });
        for n in 0..=10 {
            fibonacci(n);
        }
        assert_eq!(formula_calls.get(), 9);
    }

    #[test]
    fn test_memoizer_factorial() {
        let mut factorial = factorial();
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(10), 3_628_800);
    }

    #[test]
    fn test_memoizer_results_stable_across_calls() {
        let mut fibonacci = fibonacci();
        assert_eq!(fibonacci(10), 55);
        assert_eq!(fibonacci(10), 55);
        assert_eq!(fibonacci(3), 2);
    }
}
