//! Raw keyboard passthrough decoding.
//!
//! Some remotes and front panels deliver direct keyboard input next to the symbolic keys.
//! Such input arrives as a numeric code: values up to 0xFF are Latin-1 characters, a block
//! starting at 0x100 carries function keys. This is a pure decoder; it converts codes into
//! logical events and leaves their meaning to the editor.
//!
//! # Examples
//!
//! ```rust,ignore
//! assert_eq!(KbdEvent::decode(0x61), KbdEvent::Char('a'));
//! assert_eq!(KbdEvent::decode(0x7F), KbdEvent::Backspace);
//! assert_eq!(KbdEvent::decode(KbdFunc::Home.code()), KbdEvent::Func(KbdFunc::Home));
//! ```

/// Highest code delivered as a character.
pub const MAX_CHAR_CODE: u32 = 0xFF;

/// Code of the backspace key.
pub const BACKSPACE_CODE: u32 = 0x7F;

/// First function-key code (F1).
pub const FUNC_BASE: u32 = 0x100;

/// Keyboard function keys, in code order starting at [`FUNC_BASE`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KbdFunc {
    /// F1-F12 (1-based)
    F(u8),
    /// Cursor up
    Up,
    /// Cursor down
    Down,
    /// Cursor left
    Left,
    /// Cursor right
    Right,
    /// Home
    Home,
    /// End
    End,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Insert
    Insert,
    /// Delete
    Delete,
}

const NAMED: [KbdFunc; 10] = [
    KbdFunc::Up,
    KbdFunc::Down,
    KbdFunc::Left,
    KbdFunc::Right,
    KbdFunc::Home,
    KbdFunc::End,
    KbdFunc::PageUp,
    KbdFunc::PageDown,
    KbdFunc::Insert,
    KbdFunc::Delete,
];

impl KbdFunc {
    /// Raw passthrough code of this function key.
    pub fn code(self) -> u32 {
        match self {
            KbdFunc::F(n) => FUNC_BASE + u32::from(n.clamp(1, 12)) - 1,
            named => {
                let index = NAMED.iter().position(|&f| f == named).unwrap_or(0);
                FUNC_BASE + 12 + index as u32
            }
        }
    }
}

/// Logical event decoded from a raw passthrough code.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KbdEvent {
    /// Directly typed character
    Char(char),

    /// Backspace key
    Backspace,

    /// Function key
    Func(KbdFunc),

    /// Code outside the supported ranges - ignored
    Unsupported(u32),
}

impl KbdEvent {
    /// Decode a raw passthrough code.
    pub fn decode(code: u32) -> Self {
        match code {
            BACKSPACE_CODE => KbdEvent::Backspace,

            c if c <= MAX_CHAR_CODE => match char::from_u32(c) {
                Some(ch) => KbdEvent::Char(ch),
                None => KbdEvent::Unsupported(c),
            },

            c if (FUNC_BASE..FUNC_BASE + 12).contains(&c) => {
                // range check above keeps this within u8
                KbdEvent::Func(KbdFunc::F((c - FUNC_BASE + 1) as u8))
            }

            c => match c
                .checked_sub(FUNC_BASE + 12)
                .and_then(|i| NAMED.get(i as usize))
            {
                Some(&func) => KbdEvent::Func(func),
                None => KbdEvent::Unsupported(c),
            },
        }
    }
}
