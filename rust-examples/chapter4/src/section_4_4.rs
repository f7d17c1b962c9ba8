//! Section 4.4: Arguments
//!
//! JavaScript functions receive a bonus `arguments` array holding every
//! value the caller passed, which is how the book writes a variadic
//! `sum`. Rust expresses "any number of arguments" as a slice or any
//! `IntoIterator`, and the compiler checks what JavaScript leaves to
//! convention.

/// Sums any number of values.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_4::sum;
/// assert_eq!(sum(&[4, 8, 15, 16, 23, 42]), 108);
/// assert_eq!(sum(&[]), 0);
/// ```
pub fn sum(values: &[i64]) -> i64 {
    values.iter().sum()
}

/// Sums any iterable of values.
///
/// The same operation over an arbitrary `IntoIterator`, for callers
/// that have a range or an adapter chain rather than a slice.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_4::sum_iter;
/// assert_eq!(sum_iter(1..=4), 10);
/// ```
pub fn sum_iter<I>(values: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    values.into_iter().sum()
}
