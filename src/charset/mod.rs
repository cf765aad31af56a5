//! Character tables for text entry.
//!
//! Provides the alphabet of codepoints legal in a field, the digit-to-characters map used
//! for multi-tap entry, and the case classification capability the editor consults.
//! All tables are parsed once at construction and never re-parsed per key.

// Sub-modules
pub mod allowed;
pub mod charmap;
pub mod class;

// Re-export key types
pub use allowed::AllowedSet;
pub use charmap::{CharMap, TapCursor};
pub use class::{AsciiClass, CharClass, UnicodeClass};

/// Blank codepoint used for padding and as the trailing sentinel character.
pub const BLANK: char = ' ';
