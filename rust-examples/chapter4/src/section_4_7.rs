//! Section 4.7: Augmenting Types
//!
//! The book adds methods to every number and every string by assigning
//! to `Number.prototype` and `String.prototype`. Rust's seam for the
//! same move is the extension trait: define a trait, implement it for
//! the foreign type, and every value of that type gains the method
//! wherever the trait is in scope. Unlike prototype assignment, the
//! augmentation is lexically visible and cannot collide silently.

/// Extracts the integer part of a number, truncating toward zero.
///
/// The book builds this from `Math.floor` for positives and
/// `Math.ceiling` for negatives; `f64::trunc` is exactly that.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_7::Integer;
///
/// assert_eq!((-10.0 / 3.0).integer(), -3.0);
/// assert_eq!((10.0 / 3.0).integer(), 3.0);
/// ```
pub trait Integer {
    fn integer(self) -> f64;
}

impl Integer for f64 {
    fn integer(self) -> f64 {
        self.trunc()
    }
}

/// Removes leading and trailing whitespace.
///
/// The book's `trim` is the regex substitution `/^\s+|\s+$/g` because
/// early JavaScript had no trim at all. `str::trim` ships with Rust;
/// the trait exists to show the augmentation seam, and delegates.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_7::TrimWhitespace;
///
/// assert_eq!("  neat  ".trimmed(), "neat");
/// ```
pub trait TrimWhitespace {
    fn trimmed(&self) -> &str;
}

impl TrimWhitespace for str {
    fn trimmed(&self) -> &str {
        self.trim()
    }
}
