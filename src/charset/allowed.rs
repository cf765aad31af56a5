//! Ordered set of codepoints legal in a field.
//!
//! Appearance order in the source alphabet defines the cycling order for Up/Down entry.
//!
//! # Example
//!
//! ```rust,ignore
//! use tapline::charset::AllowedSet;
//!
//! let allowed = AllowedSet::parse("abc");
//! assert_eq!(allowed.cycle('c', true), Some('a'));
//! assert_eq!(allowed.cycle('a', false), Some('c'));
//! ```

use crate::config::MAX_ALLOWED;
use crate::error::LayoutError;

/// Ordered, duplicate-free set of allowed codepoints.
///
/// Used both for membership tests and for cyclic increment/decrement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedSet {
    chars: heapless::Vec<char, MAX_ALLOWED>,
}

impl AllowedSet {
    /// Create an empty set.
    ///
    /// With an empty set every character-entry operation is a no-op.
    pub const fn new() -> Self {
        Self {
            chars: heapless::Vec::new(),
        }
    }

    /// Build a set from an alphabet string, leniently.
    ///
    /// Duplicates are skipped and codepoints beyond `MAX_ALLOWED` are dropped.
    pub fn parse(alphabet: &str) -> Self {
        let mut set = Self::new();
        for c in alphabet.chars() {
            if set.contains(c) {
                continue;
            }
            if set.chars.push(c).is_err() {
                break;
            }
        }
        set
    }

    /// Build a set from an alphabet string, rejecting anything the lenient path would repair.
    pub fn try_parse(alphabet: &str) -> Result<Self, LayoutError> {
        if alphabet.is_empty() {
            return Err(LayoutError::EmptyAllowed);
        }

        let mut set = Self::new();
        for c in alphabet.chars() {
            if set.contains(c) {
                return Err(LayoutError::DuplicateChar(c));
            }
            set.chars
                .push(c)
                .map_err(|_| LayoutError::AllowedTooLong)?;
        }
        Ok(set)
    }

    /// Number of codepoints in the set.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Membership test.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Index of `c` in appearance order.
    pub fn position(&self, c: char) -> Option<usize> {
        self.chars.iter().position(|&a| a == c)
    }

    /// Codepoints in appearance order.
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Step one position forward (`up`) or backward along the set, wrapping at both ends.
    ///
    /// A codepoint not in the set is treated as if it were the first element, so stepping
    /// forward from it yields the second element and stepping backward yields the last.
    /// Returns `None` only for an empty set.
    pub fn cycle(&self, c: char, up: bool) -> Option<char> {
        let len = self.chars.len();
        if len == 0 {
            return None;
        }

        let current = self.position(c).unwrap_or(0);
        let next = if up {
            (current + 1) % len
        } else if current == 0 {
            len - 1
        } else {
            current - 1
        };
        self.chars.get(next).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_order() {
        let set = AllowedSet::parse("cab");
        assert_eq!(set.as_slice(), &['c', 'a', 'b']);
        assert_eq!(set.position('b'), Some(2));
    }

    #[test]
    fn test_parse_skips_duplicates() {
        let set = AllowedSet::parse("abca");
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_try_parse_rejects_duplicates() {
        assert_eq!(
            AllowedSet::try_parse("abca"),
            Err(LayoutError::DuplicateChar('a'))
        );
    }

    #[test]
    fn test_try_parse_rejects_empty() {
        assert_eq!(AllowedSet::try_parse(""), Err(LayoutError::EmptyAllowed));
    }

    #[test]
    fn test_try_parse_rejects_overflow() {
        let mut long: heapless::String<512> = heapless::String::new();
        for c in (0x100u32..0x100 + MAX_ALLOWED as u32 + 1).filter_map(char::from_u32) {
            long.push(c).unwrap();
        }
        assert_eq!(AllowedSet::try_parse(&long), Err(LayoutError::AllowedTooLong));
        assert_eq!(AllowedSet::parse(&long).len(), MAX_ALLOWED);
    }

    #[test]
    fn test_cycle_wraps_forward() {
        let set = AllowedSet::parse("abc");
        assert_eq!(set.cycle('a', true), Some('b'));
        assert_eq!(set.cycle('c', true), Some('a'));
    }

    #[test]
    fn test_cycle_wraps_backward() {
        let set = AllowedSet::parse("abc");
        assert_eq!(set.cycle('b', false), Some('a'));
        assert_eq!(set.cycle('a', false), Some('c'));
    }

    #[test]
    fn test_cycle_unknown_starts_at_first() {
        let set = AllowedSet::parse("abc");
        assert_eq!(set.cycle('x', true), Some('b'));
        assert_eq!(set.cycle('x', false), Some('c'));
    }

    #[test]
    fn test_cycle_full_round_returns_original() {
        let set = AllowedSet::parse(crate::config::FILE_NAME_CHARS);
        for &start in set.as_slice() {
            let mut c = start;
            for _ in 0..set.len() {
                c = set.cycle(c, true).unwrap();
            }
            assert_eq!(c, start);
        }
    }

    #[test]
    fn test_cycle_single_element() {
        let set = AllowedSet::parse("x");
        assert_eq!(set.cycle('x', true), Some('x'));
        assert_eq!(set.cycle('x', false), Some('x'));
    }

    #[test]
    fn test_cycle_empty() {
        assert_eq!(AllowedSet::new().cycle('a', true), None);
    }
}
