//! Configuration traits and capacity constants.
//!
//! The `EditorConfig` trait bundles the compile-time tunables of an editor (auto-advance
//! delay, default alphabets, help labels) without runtime overhead. Table capacities are
//! crate-level constants because they size `heapless` storage.

/// Capacity of an [`AllowedSet`](crate::charset::AllowedSet) in codepoints.
pub const MAX_ALLOWED: usize = 128;

/// Capacity of a single character-map group in codepoints.
pub const MAX_GROUP: usize = 32;

/// Number of digit groups in a character map (keys 0-9).
pub const DIGIT_GROUPS: usize = 10;

/// Capacity of the render buffer in bytes.
pub const MAX_RENDER: usize = 256;

/// Separator between character-map groups.
pub const GROUP_SEPARATOR: char = '\t';

/// Editor configuration trait.
///
/// All values are const. Implementations define the auto-advance delay, the alphabet and
/// character map used when an editor is built without explicit tables, and the texts shown
/// on the colour keys while editing.
pub trait EditorConfig {
    /// Milliseconds before a pending multi-tap character is frozen (default: 1500)
    const AUTO_ADVANCE_TIMEOUT_MS: u64;

    /// Alphabet used when no explicit allowed set is given
    const DEFAULT_ALLOWED: &'static str;

    /// Character map used when no explicit map is given (TAB separated groups, digit 0 first)
    const DEFAULT_CHAR_MAP: &'static str;

    /// Red key label (toggle case)
    const LABEL_CASE: &'static str;

    /// Green key label while in overwrite mode
    const LABEL_INSERT: &'static str;

    /// Green key label while in insert mode
    const LABEL_OVERWRITE: &'static str;

    /// Yellow key label (delete)
    const LABEL_DELETE: &'static str;
}

/// Characters allowed in file names.
pub const FILE_NAME_CHARS: &str =
    " abcdefghijklmnopqrstuvwxyz0123456789-.,#~\\^$[]|()*+?{}/:%@&";

/// Classic phone keypad layout, digit 0 first.
pub const KEYPAD_CHAR_MAP: &str =
    " 0\t-.,1#~\\^$[]|()*+?{}/:%@&\tabc2\tdef3\tghi4\tjkl5\tmno6\tpqrs7\ttuv8\twxyz9";

/// Default configuration for typical remote-control menus.
///
/// - AUTO_ADVANCE_TIMEOUT_MS: 1500
/// - DEFAULT_ALLOWED: file name characters
/// - DEFAULT_CHAR_MAP: phone keypad layout
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl EditorConfig for DefaultConfig {
    const AUTO_ADVANCE_TIMEOUT_MS: u64 = 1500;
    const DEFAULT_ALLOWED: &'static str = FILE_NAME_CHARS;
    const DEFAULT_CHAR_MAP: &'static str = KEYPAD_CHAR_MAP;
    const LABEL_CASE: &'static str = "ABC/abc";
    const LABEL_INSERT: &'static str = "Insert";
    const LABEL_OVERWRITE: &'static str = "Overwrite";
    const LABEL_DELETE: &'static str = "Delete";
}

/// Configuration for users who tap slowly.
///
/// Same tables and labels as [`DefaultConfig`], with a 3000 ms auto-advance delay.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RelaxedConfig;

impl EditorConfig for RelaxedConfig {
    const AUTO_ADVANCE_TIMEOUT_MS: u64 = 3000;
    const DEFAULT_ALLOWED: &'static str = FILE_NAME_CHARS;
    const DEFAULT_CHAR_MAP: &'static str = KEYPAD_CHAR_MAP;
    const LABEL_CASE: &'static str = DefaultConfig::LABEL_CASE;
    const LABEL_INSERT: &'static str = DefaultConfig::LABEL_INSERT;
    const LABEL_OVERWRITE: &'static str = DefaultConfig::LABEL_OVERWRITE;
    const LABEL_DELETE: &'static str = DefaultConfig::LABEL_DELETE;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(DefaultConfig::AUTO_ADVANCE_TIMEOUT_MS, 1500);
        assert_eq!(DefaultConfig::LABEL_CASE, "ABC/abc");
        assert_eq!(DefaultConfig::LABEL_INSERT, "Insert");
        assert_eq!(DefaultConfig::LABEL_OVERWRITE, "Overwrite");
        assert_eq!(DefaultConfig::LABEL_DELETE, "Delete");
    }

    #[test]
    fn test_relaxed_config() {
        assert_eq!(RelaxedConfig::AUTO_ADVANCE_TIMEOUT_MS, 3000);
        assert_eq!(RelaxedConfig::DEFAULT_ALLOWED, DefaultConfig::DEFAULT_ALLOWED);
    }

    #[test]
    fn test_keypad_map_has_ten_groups() {
        assert_eq!(
            KEYPAD_CHAR_MAP.split(GROUP_SEPARATOR).count(),
            DIGIT_GROUPS
        );
    }

    #[test]
    fn test_file_name_chars_fit_allowed_capacity() {
        assert!(FILE_NAME_CHARS.chars().count() <= MAX_ALLOWED);
    }
}
