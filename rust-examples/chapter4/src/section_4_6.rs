//! Section 4.6: Exceptions
//!
//! The book throws a plain object with `name` and `message` fields and
//! catches it to log a formatted line. The Rust shape of the same idea
//! is a value implementing `std::error::Error`, returned through
//! `Result` and matched at the call site.

use std::fmt;

/// The structured exception value the book throws.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_6::Exception;
///
/// let e = Exception::new("TypeError", "add needs numbers");
/// assert_eq!(e.to_string(), "TypeError: add needs numbers");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exception {
    pub name: &'static str,
    pub message: &'static str,
}

impl Exception {
    #[must_use]
    pub fn new(name: &'static str, message: &'static str) -> Self {
        Self { name, message }
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

impl std::error::Error for Exception {}

/// Adds two numbers, rejecting anything that is not a number.
///
/// JavaScript must check `typeof` at runtime; the type system already
/// rules out non-numbers here, so the remaining runtime degenerates are
/// the non-finite floats (NaN and the infinities).
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_6::add_checked;
///
/// assert_eq!(add_checked(3.0, 4.0), Ok(7.0));
/// assert!(add_checked(f64::NAN, 4.0).is_err());
/// ```
pub fn add_checked(a: f64, b: f64) -> Result<f64, Exception> {
    if a.is_finite() && b.is_finite() {
        Ok(a + b)
    } else {
        Err(Exception::new("TypeError", "add needs numbers"))
    }
}

/// The book's `try_it`: call, catch, and report.
///
/// Returns what the `catch` block would have logged, or the sum when
/// nothing was thrown.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_6::try_it;
///
/// assert_eq!(try_it(3.0, 4.0), "7");
/// assert_eq!(try_it(f64::NAN, 7.0), "TypeError: add needs numbers");
/// ```
#[must_use]
pub fn try_it(a: f64, b: f64) -> String {
    match add_checked(a, b) {
        Ok(sum) => format!("{}", sum),
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_checked_ok() {
        assert_eq!(add_checked(3.0, 4.0), Ok(7.0));
    }

    #[test]
    fn test_add_checked_rejects_non_numbers() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = add_checked(bad, 1.0).unwrap_err();
            assert_eq!(err.name, "TypeError");
            assert_eq!(err.message, "add needs numbers");
            assert_eq!(add_checked(1.0, bad).unwrap_err(), err);
        }
    }

    #[test]
    fn test_catch_formats_name_and_message() {
        assert_eq!(try_it(f64::NAN, 7.0), "TypeError: add needs numbers");
        assert_eq!(try_it(3.0, 4.0), "7");
    }

    #[test]
    fn test_exception_is_an_error() {
        let e: Box<dyn std::error::Error> = Box::new(Exception::new("TypeError", "boom"));
        assert_eq!(e.to_string(), "TypeError: boom");
    }
}
