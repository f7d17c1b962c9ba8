//! Section 4.3: Invocation
//!
//! JavaScript distinguishes four invocation patterns by how `this` is
//! bound. Rust has no `this`-binding to get wrong: free functions are
//! plain values, methods take an explicit receiver, and constructors
//! are associated functions by convention. Each pattern maps as:
//!
//! - Function invocation → free `fn`
//! - Method invocation → `&mut self` method
//! - Constructor invocation → `Type::new`
//! - Apply → passing a function value plus an argument slice

/// Adds two numbers.
///
/// The function invocation pattern: `add` is an ordinary value that
/// happens to be callable.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_3::add;
/// let sum = add(3, 4);
/// assert_eq!(sum, 7);
/// ```
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// An object with a value and an `increment` method.
///
/// The method invocation pattern. The book's `increment` takes an
/// optional parameter and falls back to 1 when the argument is not a
/// number; the typed rendering is `Option<i64>` with a default.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_3::Accumulator;
///
/// let mut my_object = Accumulator::new();
/// my_object.increment(None);
/// assert_eq!(my_object.value(), 1);
/// my_object.increment(Some(2));
/// assert_eq!(my_object.value(), 3);
/// my_object.double();
/// assert_eq!(my_object.value(), 6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulator {
    value: i64,
}

impl Accumulator {
    /// Creates an accumulator holding 0.
    #[must_use]
    pub fn new() -> Self {
        Self { value: 0 }
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Adds `inc` to the value, or 1 when no amount is given.
    pub fn increment(&mut self, inc: Option<i64>) {
        self.value += inc.unwrap_or(1);
    }

    /// Doubles the value by calling [`add`] through an inner helper.
    ///
    /// The book needs a `var that = this;` workaround because an inner
    /// function's `this` is rebound to the global object. The helper
    /// closure here simply borrows what it needs; no workaround exists
    /// because no problem does.
    pub fn double(&mut self) {
        let helper = |value: i64| add(value, value);
        self.value = helper(self.value);
    }
}

/// An object made by the constructor invocation pattern.
///
/// The book defines `Quo` as a constructor function and hangs
/// `get_status` on `Quo.prototype`. In Rust the "prototype method" is
/// just a method on the type; every instance shares it by construction.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_3::Quo;
///
/// let my_quo = Quo::new("confused");
/// assert_eq!(my_quo.get_status(), "confused");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quo {
    status: String,
}

impl Quo {
    /// Makes an instance with the given status.
    #[must_use]
    pub fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }

    /// Returns the status this instance was constructed with.
    #[must_use]
    pub fn get_status(&self) -> &str {
        &self.status
    }
}

/// Invokes a binary function with arguments taken from a slice.
///
/// The apply invocation pattern: `add.apply(null, [3, 4])`. JavaScript
/// silently pads or drops arguments; here a wrong arity is `None`.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_3::{add, apply};
///
/// assert_eq!(apply(add, &[3, 4]), Some(7));
/// assert_eq!(apply(add, &[3]), None);
/// ```
pub fn apply<F>(f: F, args: &[i64]) -> Option<i64>
where
    F: Fn(i64, i64) -> i64,
{
    match args {
        [a, b] => Some(f(*a, *b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_invocation() {
        assert_eq!(add(3, 4), 7);
    }

    #[test]
    fn test_method_invocation_sequence() {
        let mut my_object = Accumulator::new();
        my_object.increment(None);
        assert_eq!(my_object.value(), 1);
        my_object.increment(Some(2));
        assert_eq!(my_object.value(), 3);
        my_object.double();
        assert_eq!(my_object.value(), 6);
    }

    #[test]
    fn test_constructor_invocation() {
        let my_quo = Quo::new("confused");
        assert_eq!(my_quo.get_status(), "confused");
    }

    #[test]
    fn test_apply_arity() {
        assert_eq!(apply(add, &[3, 4]), Some(7));
        assert_eq!(apply(add, &[]), None);
        assert_eq!(apply(add, &[1, 2, 3]), None);
        // Any binary function value works, not just `add`.
        assert_eq!(apply(|a, b| a * b, &[6, 7]), Some(42));
    }
}
