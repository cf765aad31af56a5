//! Error types for layout construction.
//!
//! Key processing never fails on its own: capacity limits are normal boundary conditions
//! and unknown keys fall through as [`KeyResult::Unhandled`](crate::KeyResult). Errors only
//! arise on the strict table-building path used to validate layouts ahead of time.

use core::fmt;

/// Layout error type.
///
/// Reported by the `try_parse` constructors of the character tables. The lenient `parse`
/// constructors never return these; they truncate or skip instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Allowed alphabet is empty
    EmptyAllowed,

    /// Allowed alphabet exceeds MAX_ALLOWED codepoints
    AllowedTooLong,

    /// Codepoint appears twice in the allowed alphabet
    DuplicateChar(char),

    /// Character map has more than one group per digit
    TooManyGroups,

    /// Character-map group exceeds MAX_GROUP codepoints
    GroupTooLong {
        /// Digit the offending group belongs to
        digit: u8,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::EmptyAllowed => write!(f, "Allowed alphabet is empty"),
            LayoutError::AllowedTooLong => write!(f, "Allowed alphabet too long"),
            LayoutError::DuplicateChar(c) => write!(f, "Duplicate character {:?}", c),
            LayoutError::TooManyGroups => write!(f, "Too many character map groups"),
            LayoutError::GroupTooLong { digit } => {
                write!(f, "Character map group for key {} too long", digit)
            }
        }
    }
}
