//! Remote-control key events.

/// Symbolic remote-control key.
///
/// Colour keys have fixed roles while a field is being edited: Red toggles case, Green
/// toggles insert/overwrite, Yellow deletes, Blue is swallowed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow
    Up,

    /// Down arrow
    Down,

    /// Left arrow
    Left,

    /// Right arrow
    Right,

    /// OK / confirm
    Ok,

    /// Back / cancel
    Back,

    /// Red colour key
    Red,

    /// Green colour key
    Green,

    /// Yellow colour key
    Yellow,

    /// Blue colour key
    Blue,

    /// Numeric key 0-9
    Digit(u8),

    /// Raw keyboard passthrough code (see [`KbdEvent`](super::kbd::KbdEvent))
    Kbd(u32),
}

impl Key {
    /// Numeric key for `digit`, or `None` above 9.
    pub fn digit(digit: u8) -> Option<Self> {
        (digit <= 9).then_some(Key::Digit(digit))
    }

    /// Raw passthrough key for a typed character.
    pub fn kbd_char(c: char) -> Self {
        Key::Kbd(u32::from(c))
    }

    /// Whether this is a valid numeric key.
    pub fn is_digit(self) -> bool {
        matches!(self, Key::Digit(d) if d <= 9)
    }

    /// Whether the auto-repeat variant of this key means anything to the editor.
    ///
    /// Held-down toggle and commit keys must not fire repeatedly.
    pub fn accepts_repeat(self) -> bool {
        !matches!(self, Key::Red | Key::Green | Key::Ok | Key::Back)
    }
}

/// Key press as delivered by the remote, with its auto-repeat flag.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key pressed
    pub key: Key,

    /// Generated by holding the key down
    pub repeat: bool,
}

impl KeyEvent {
    /// Initial press.
    pub const fn press(key: Key) -> Self {
        Self { key, repeat: false }
    }

    /// Auto-repeat while held.
    pub const fn repeat(key: Key) -> Self {
        Self { key, repeat: true }
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::press(key)
    }
}

/// Result of offering a key to the editor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyResult {
    /// Key consumed; the display has been refreshed
    Continue,

    /// Key not meaningful in the current mode; the caller may handle it
    Unhandled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_constructor() {
        assert_eq!(Key::digit(5), Some(Key::Digit(5)));
        assert_eq!(Key::digit(10), None);
    }

    #[test]
    fn test_is_digit() {
        assert!(Key::Digit(0).is_digit());
        assert!(!Key::Digit(12).is_digit());
        assert!(!Key::Up.is_digit());
    }

    #[test]
    fn test_accepts_repeat() {
        assert!(Key::Yellow.accepts_repeat());
        assert!(Key::Digit(3).accepts_repeat());
        assert!(!Key::Green.accepts_repeat());
        assert!(!Key::Ok.accepts_repeat());
    }

    #[test]
    fn test_event_from_key() {
        let event: KeyEvent = Key::Left.into();
        assert_eq!(event, KeyEvent::press(Key::Left));
        assert!(KeyEvent::repeat(Key::Left).repeat);
    }
}
