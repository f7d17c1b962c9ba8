//! Section 4.14: Curry
//!
//! Currying turns a function and an argument into a function of the
//! remaining argument. The book bolts a `curry` method onto every
//! function via `Function.prototype`; in Rust it is an ordinary
//! higher-order function returning `impl Fn`.

/// Fixes the first argument of a binary function.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_14::curry;
/// use goodparts_chapter4::add;
///
/// let add1 = curry(add, 1);
/// assert_eq!(add1(6), 7);
/// assert_eq!(add1(10), 11);
/// ```
pub fn curry<A, B, C, F>(f: F, a: A) -> impl Fn(B) -> C
where
    F: Fn(A, B) -> C,
    A: Clone,
{
    move |b| f(a.clone(), b)
}

/// A curried adder written directly as nested closures.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_14::adder;
///
/// assert_eq!(adder(3)(4), 7);
/// ```
pub fn adder(a: i64) -> impl Fn(i64) -> i64 {
    move |b| a + b
}
