//! Display abstraction for rendering a field.
//!
//! The `EditDisplay` trait is the editor's only output channel: it receives a fresh
//! [`EditView`] after every handled key and the colour-key help labels whenever they change.
//! Implementations decide how to put these on screen (OSD, LCD, terminal, test capture).
//!
//! `EditView` implements `core::fmt::Display` as the reference formatter, using `<`/`>` to
//! mark clipped text on either side and `[`/`]` around the cursor.

use crate::config::MAX_RENDER;
use core::fmt::{self, Write};

/// Output side of an editor.
///
/// `show()` and `set_help()` must not block indefinitely; buffer internally if the device
/// is slow.
pub trait EditDisplay {
    /// Platform-specific error type
    type Error;

    /// Width available for the field's value, in glyph width units.
    fn editable_width(&self) -> usize;

    /// Width of one codepoint in the display font.
    ///
    /// Default implementation treats every glyph as one unit wide.
    fn glyph_width(&self, c: char) -> usize {
        let _ = c;
        1
    }

    /// Width of a string in the display font.
    fn text_width(&self, s: &str) -> usize {
        s.chars().map(|c| self.glyph_width(c)).sum()
    }

    /// Present the current state of the field.
    fn show(&mut self, view: &EditView<'_>) -> Result<(), Self::Error>;

    /// Update the colour-key help labels.
    fn set_help(&mut self, help: &HelpKeys) -> Result<(), Self::Error>;
}

/// What the field looks like right now.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EditView<'a> {
    /// Navigation mode: the committed value
    Committed(&'a str),

    /// Edit mode: the live buffer and its visible window
    Editing(EditWindow<'a>),
}

/// Render input for a field in edit mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EditWindow<'a> {
    /// Whole live value, trailing blanks included
    pub chars: &'a [char],

    /// Cursor index into `chars`
    pub cursor: usize,

    /// First visible index
    pub offset: usize,

    /// One past the last visible index
    pub end: usize,

    /// Insert mode with nothing typed at the cursor yet; the cursor sits before `chars[cursor]`
    pub insert_pending: bool,
}

impl EditView<'_> {
    /// Whether the field is in edit mode.
    pub fn is_editing(&self) -> bool {
        matches!(self, EditView::Editing(_))
    }

    /// Format into a fixed buffer, truncating if the text does not fit.
    pub fn render(&self) -> heapless::String<MAX_RENDER> {
        let mut out = heapless::String::new();
        // fmt::Error here only means the buffer filled up
        let _ = write!(out, "{}", self);
        out
    }
}

impl fmt::Display for EditView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditView::Committed(value) => f.write_str(value),
            EditView::Editing(window) => fmt::Display::fmt(window, f),
        }
    }
}

impl fmt::Display for EditWindow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slice = |from: usize, to: usize| self.chars.get(from..to).unwrap_or(&[]);

        if self.offset > 0 {
            f.write_char('<')?;
        }
        for &c in slice(self.offset, self.cursor) {
            f.write_char(c)?;
        }
        f.write_char('[')?;
        if self.insert_pending {
            f.write_char(']')?;
        }
        for &c in slice(self.cursor, self.cursor + 1) {
            f.write_char(c)?;
        }
        if !self.insert_pending {
            f.write_char(']')?;
        }
        for &c in slice(self.cursor + 1, self.end) {
            f.write_char(c)?;
        }
        if self.end != self.chars.len() {
            f.write_char('>')?;
        }
        Ok(())
    }
}

/// Labels for the four colour keys; `None` hides a label.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct HelpKeys {
    /// Red key label
    pub red: Option<&'static str>,
    /// Green key label
    pub green: Option<&'static str>,
    /// Yellow key label
    pub yellow: Option<&'static str>,
    /// Blue key label
    pub blue: Option<&'static str>,
}

impl HelpKeys {
    /// No labels (navigation mode).
    pub const NONE: Self = Self {
        red: None,
        green: None,
        yellow: None,
        blue: None,
    };

    /// Whether every label is hidden.
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}
