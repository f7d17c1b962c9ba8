//! Section 4.12: Module
//!
//! The module pattern: a function that uses closure scope to keep its
//! working data private and hands out only the functions that use it.
//! A Rust module with private items is the direct equivalent, so the
//! entity table and the compiled pattern below are module-private and
//! built once.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

fn entity_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        HashMap::from([
            ("quot", "\""),
            ("lt", "<"),
            ("gt", ">"),
            ("amp", "&"),
            ("apos", "'"),
            ("nbsp", "\u{a0}"),
        ])
    })
}

fn entity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Same pattern the book uses: an entity is `&`, a name containing
    // neither `&` nor `;`, then `;`.
    PATTERN.get_or_init(|| Regex::new(r"&([^&;]+);").unwrap())
}

/// Replaces HTML entities with their characters.
///
/// Entities missing from the table are left verbatim, matching the
/// book's fallback of returning the whole match.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_12::deentityify;
///
/// assert_eq!(deentityify("&lt;&quot;&gt;"), "<\">");
/// assert_eq!(deentityify("&unknown; stays"), "&unknown; stays");
/// ```
#[must_use]
pub fn deentityify(text: &str) -> String {
    entity_pattern()
        .replace_all(text, |caps: &Captures<'_>| {
            match entity_table().get(&caps[1]) {
                Some(replacement) => (*replacement).to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Produces unique serial strings from a prefix and a sequence number.
///
/// The book's `serial_maker` returns an object whose methods share two
/// closed-over variables; the struct keeps them as private fields.
///
/// # Examples
/// ```
/// use goodparts_chapter4::section_4_12::SerialMaker;
///
/// let mut seqer = SerialMaker::new();
/// seqer.set_prefix('Q');
/// seqer.set_seq(1000);
/// assert_eq!(seqer.gensym(), "Q1000");
/// assert_eq!(seqer.gensym(), "Q1001");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerialMaker {
    prefix: Option<char>,
    seq: u64,
}

impl SerialMaker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the character that starts every serial string.
    pub fn set_prefix(&mut self, prefix: char) {
        self.prefix = Some(prefix);
    }

    /// Sets the next sequence number.
    pub fn set_seq(&mut self, seq: u64) {
        self.seq = seq;
    }

    /// Returns the next serial string and advances the sequence.
    pub fn gensym(&mut self) -> String {
        let result = match self.prefix {
            Some(prefix) => format!("{}{}", prefix, self.seq),
            None => self.seq.to_string(),
        };
        self.seq += 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deentityify_table_entries() {
        assert_eq!(deentityify("&lt;&quot;&gt;"), "<\">");
        assert_eq!(deentityify("fish &amp; chips"), "fish & chips");
    }

    #[test]
    fn test_deentityify_unknown_entity_kept() {
        assert_eq!(deentityify("&bogus;"), "&bogus;");
    }

    #[test]
    fn test_deentityify_plain_text_untouched() {
        assert_eq!(deentityify("no entities here"), "no entities here");
        assert_eq!(deentityify(""), "");
        // A bare ampersand is not an entity.
        assert_eq!(deentityify("this & that"), "this & that");
    }

    #[test]
    fn test_serial_maker_sequence() {
        let mut seqer = SerialMaker::new();
        seqer.set_prefix('Q');
        seqer.set_seq(1000);
        assert_eq!(seqer.gensym(), "Q1000");
        assert_eq!(seqer.gensym(), "Q1001");
    }

    #[test]
    fn test_serial_maker_without_prefix() {
        let mut seqer = SerialMaker::new();
        assert_eq!(seqer.gensym(), "0");
        assert_eq!(seqer.gensym(), "1");
    }
}
