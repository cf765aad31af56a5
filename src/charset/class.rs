//! Case classification capability.
//!
//! The editor never calls a global classification routine; it is handed a `CharClass`
//! implementation, so fields can use full Unicode tables, ASCII only, or a device's own
//! transliteration service.

/// Character classification and case conversion over single codepoints.
pub trait CharClass {
    /// Whether `c` is alphabetic (has case worth tracking).
    fn is_alpha(&self, c: char) -> bool;

    /// Whether `c` is an uppercase letter.
    fn is_upper(&self, c: char) -> bool;

    /// Uppercase form of `c`, or `c` itself when there is no single-codepoint mapping.
    fn to_upper(&self, c: char) -> char;

    /// Lowercase form of `c`, or `c` itself when there is no single-codepoint mapping.
    fn to_lower(&self, c: char) -> char;
}

/// Classification backed by the Unicode tables in `core`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct UnicodeClass;

impl CharClass for UnicodeClass {
    fn is_alpha(&self, c: char) -> bool {
        c.is_alphabetic()
    }

    fn is_upper(&self, c: char) -> bool {
        c.is_uppercase()
    }

    fn to_upper(&self, c: char) -> char {
        single(c.to_uppercase()).unwrap_or(c)
    }

    fn to_lower(&self, c: char) -> char {
        single(c.to_lowercase()).unwrap_or(c)
    }
}

/// ASCII-only classification; every other codepoint is caseless.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct AsciiClass;

impl CharClass for AsciiClass {
    fn is_alpha(&self, c: char) -> bool {
        c.is_ascii_alphabetic()
    }

    fn is_upper(&self, c: char) -> bool {
        c.is_ascii_uppercase()
    }

    fn to_upper(&self, c: char) -> char {
        c.to_ascii_uppercase()
    }

    fn to_lower(&self, c: char) -> char {
        c.to_ascii_lowercase()
    }
}

// Multi-codepoint mappings ('ß' -> "SS") cannot live in one slot
fn single(mut mapping: impl Iterator<Item = char>) -> Option<char> {
    match (mapping.next(), mapping.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
