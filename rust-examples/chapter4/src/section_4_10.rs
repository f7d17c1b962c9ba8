//! Section 4.10: Scope & Closure
//!
//! The book uses closures for information hiding: an immediately
//! invoked function returns methods that share a variable no outsider
//! can touch. Rust has two renderings of the idea:
//!
//! - A struct with a private field, when the state outlives one
//!   closure. Field privacy gives the same hiding guarantee the
//!   closure scope did, with named methods instead of object literals.
//! - A `move` closure, when a single callable capturing its
//!   environment is the whole point.

use std::cell::Cell;

/// A counter whose value can only change through its methods.
///
/// The book's version wraps `value` in an immediately invoked function
/// so nothing else can reach it. Here the field is simply private.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_10::Counter;
///
/// let mut counter = Counter::new();
/// counter.increment(1);
/// counter.increment(2);
/// assert_eq!(counter.value(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    #[must_use]
    pub fn new() -> Self {
        Self { value: 0 }
    }

    pub fn increment(&mut self, inc: i64) {
        self.value += inc;
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }
}

/// Returns a closure that remembers the status it was created with.
///
/// The book's `quo(status)` returns an object whose `get_status`
/// closes over the parameter rather than copying it. The `move`
/// closure owns the string outright; there is no object to construct.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_10::make_status_getter;
///
/// let get_status = make_status_getter("amazed");
/// assert_eq!(get_status(), "amazed");
/// assert_eq!(get_status(), "amazed");
/// ```
pub fn make_status_getter(status: &str) -> impl Fn() -> String {
    let status = status.to_string();
    move || status.clone()
}

/// Returns a closure over captured mutable state.
///
/// `Cell` carries the mutation for a `Copy` value, so the closure can
/// be called through a shared reference too. Each call adds the given
/// amount and returns the running total.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_10::make_adder;
///
/// let mut adder = make_adder(100);
/// assert_eq!(adder(20), 120);
/// assert_eq!(adder(3), 123);
/// ```
pub fn make_adder(initial: i64) -> impl FnMut(i64) -> i64 {
    let total = Cell::new(initial);
    move |amount| {
        total.set(total.get() + amount);
        total.get()
    }
}

/// Builds one closure per index, each capturing its own value.
///
/// The book's cautionary tale: closures made in a loop all share the
/// loop variable, so every handler reports the final index. A `move`
/// closure captures the value of `i` at creation, which is the fix the
/// book reaches with a helper function.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_10::make_handlers;
///
/// let handlers = make_handlers(3);
/// let reported: Vec<usize> = handlers.iter().map(|h| h()).collect();
/// assert_eq!(reported, vec![0, 1, 2]);
/// ```
#[must_use]
pub fn make_handlers(count: usize) -> Vec<Box<dyn Fn() -> usize>> {
    (0..count)
        .map(|i| Box::new(move || i) as Box<dyn Fn() -> usize>)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_hides_state() {
        let mut counter = Counter::new();
        counter.increment(1);
        counter.increment(2);
        assert_eq!(counter.value(), 3);
    }

    #[test]
    fn test_status_getter_owns_its_capture() {
        let get_status = {
            let ephemeral = String::from("confused");
            make_status_getter(&ephemeral)
            // `ephemeral` is dropped here; the closure still answers.
        };
        assert_eq!(get_status(), "confused");
    }

    #[test]
    fn test_adder_accumulates() {
        let mut adder = make_adder(0);
        assert_eq!(adder(5), 5);
        assert_eq!(adder(5), 10);
        assert_eq!(adder(-3), 7);
    }

    #[test]
    fn test_handlers_capture_their_own_index() {
        let handlers = make_handlers(5);
        for (i, handler) in handlers.iter().enumerate() {
            assert_eq!(handler(), i);
        }
    }
}
