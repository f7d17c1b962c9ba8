//! The Good Parts, Chapter 4: Functions
//!
//! Each book section that survives outside a browser becomes one module
//! of small, documented, doctested functions:
//!
//! - Invocation patterns (function, method, constructor, apply)
//! - Arguments and variadic sums
//! - Exceptions as structured error values
//! - Augmenting types via extension traits
//! - Recursion (Towers of Hanoi, factorial)
//! - Scope and closure
//! - The module pattern (entity substitution, serial maker)
//! - Curry
//! - Memoization
//!
//! The DOM-bound snippets (walk_the_DOM, fade, cascade) have no meaning
//! outside a browser document and are omitted.

pub mod section_4_10;
pub mod section_4_12;
pub mod section_4_14;
pub mod section_4_15;
pub mod section_4_3;
pub mod section_4_4;
pub mod section_4_6;
pub mod section_4_7;
pub mod section_4_8;

// Re-export the items the other sections build on.
pub use section_4_3::add;
