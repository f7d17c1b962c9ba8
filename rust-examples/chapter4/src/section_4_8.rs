//! Section 4.8: Recursion
//!
//! The book's recursion example is the Towers of Hanoi solver, which
//! the JavaScript logs move by move. Returning the moves as data keeps
//! the function pure and lets the caller print, count, or assert on
//! them; the `Display` impl reproduces the book's log lines.

use std::fmt;

/// One move of the Towers of Hanoi solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move<'a> {
    pub disc: u32,
    pub from: &'a str,
    pub to: &'a str,
}

impl fmt::Display for Move<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move disc {} from {} to {}", self.disc, self.from, self.to)
    }
}

/// Solves the Towers of Hanoi for `disc` discs.
///
/// Moves `disc` discs from `src` to `dst`, using `aux` as the spare
/// peg. The solution for n discs always takes `2^n - 1` moves.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_8::hanoi;
///
/// let moves = hanoi(3, "Src", "Aux", "Dst");
/// assert_eq!(moves.len(), 7);
/// assert_eq!(moves[0].to_string(), "Move disc 1 from Src to Dst");
/// ```
#[must_use]
pub fn hanoi<'a>(disc: u32, src: &'a str, aux: &'a str, dst: &'a str) -> Vec<Move<'a>> {
    let mut moves = Vec::new();
    solve(disc, src, aux, dst, &mut moves);
    moves
}

fn solve<'a>(disc: u32, src: &'a str, aux: &'a str, dst: &'a str, moves: &mut Vec<Move<'a>>) {
    if disc > 0 {
        solve(disc - 1, src, dst, aux, moves);
        moves.push(Move {
            disc,
            from: src,
            to: dst,
        });
        solve(disc - 1, aux, src, dst, moves);
    }
}

/// Factorial using a linear recursive process.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_8::factorial_recursive;
/// assert_eq!(factorial_recursive(4), 24);
/// ```
pub fn factorial_recursive(n: u64) -> u64 {
    if n == 0 {
        1
    } else {
        n * factorial_recursive(n - 1)
    }
}

/// Idiomatic factorial using iterators.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_8::factorial;
/// assert_eq!(factorial(4), 24);
/// ```
pub fn factorial(n: u64) -> u64 {
    (1..=n).product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hanoi_three_discs() {
        let moves: Vec<String> = hanoi(3, "Src", "Aux", "Dst")
            .iter()
            .map(Move::to_string)
            .collect();
        assert_eq!(
            moves,
            vec![
                "Move disc 1 from Src to Dst",
                "Move disc 2 from Src to Aux",
                "Move disc 1 from Dst to Aux",
                "Move disc 3 from Src to Dst",
                "Move disc 1 from Aux to Src",
                "Move disc 2 from Aux to Dst",
                "Move disc 1 from Aux to Dst",
            ]
        );
    }

    #[test]
    fn test_hanoi_move_count() {
        for n in 0..8 {
            assert_eq!(hanoi(n, "a", "b", "c").len(), (1_usize << n) - 1);
        }
    }

    #[test]
    fn test_hanoi_zero_discs() {
        assert!(hanoi(0, "Src", "Aux", "Dst").is_empty());
    }

    #[test]
    fn test_factorial_variants() {
        for n in 0..10 {
            assert_eq!(factorial_recursive(n), factorial(n));
        }
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(10), 3_628_800);
    }
}
