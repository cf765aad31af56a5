//! Capacity-limited codepoint buffer with cursor.
//!
//! `EditBuffer<L>` holds the live value of a field during an edit session. `L` is the field
//! length including the sentinel slot: the value never encodes to more than `L - 1` bytes
//! (so never more than `L - 1` codepoints) and the cursor never moves past `L - 2`. Every
//! growth path checks that ceiling here, so whatever the user sees always fits the field
//! on commit, whatever key sequence they replay.

use crate::charset::BLANK;
use crate::trace::trace_event;

/// Codepoint buffer and cursor for one edit session.
///
/// While a buffer exists it holds at least one codepoint and `cursor < len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer<const L: usize> {
    chars: heapless::Vec<char, L>,
    cursor: usize,
}

impl<const L: usize> EditBuffer<L> {
    /// Maximum encoded length in bytes, and so in codepoints (one slot stays reserved).
    pub const LIMIT: usize = L.saturating_sub(1);

    /// Snapshot a committed value into a new buffer with the cursor on the first codepoint.
    ///
    /// Pads an empty value with one blank. Returns `None` when `L < 2`, since such a field
    /// cannot hold a single codepoint, and when `value` is longer than `LIMIT` bytes, since
    /// editing it would drop part of the committed value.
    pub fn load(value: &str) -> Option<Self> {
        if L < 2 || value.len() > Self::LIMIT {
            return None;
        }

        let mut chars = heapless::Vec::new();
        for c in value.chars() {
            // at most LIMIT bytes, so at most LIMIT codepoints
            let _ = chars.push(c);
        }
        if chars.is_empty() {
            let _ = chars.push(BLANK);
        }
        Some(Self { chars, cursor: 0 })
    }

    /// Logical length in codepoints.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a loaded buffer; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Length of the value once encoded as UTF-8.
    pub fn encoded_len(&self) -> usize {
        self.chars.iter().map(|c| c.len_utf8()).sum()
    }

    /// Whether not even a blank can be added.
    pub fn is_full(&self) -> bool {
        self.encoded_len() >= Self::LIMIT
    }

    /// Cursor index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Codepoints of the value, including trailing blanks.
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Codepoint under the cursor.
    pub fn current(&self) -> char {
        self.chars.get(self.cursor).copied().unwrap_or(BLANK)
    }

    /// Overwrite the codepoint under the cursor.
    ///
    /// Refused when the wider encoding of `c` would overflow the field. Returns whether
    /// the codepoint was written.
    pub fn set_current(&mut self, c: char) -> bool {
        let encoded = self.encoded_len();
        let Some(slot) = self.chars.get_mut(self.cursor) else {
            return false;
        };
        if encoded - slot.len_utf8() + c.len_utf8() > Self::LIMIT {
            trace_event!(cursor = self.cursor, "refused wide codepoint at capacity");
            return false;
        }
        *slot = c;
        true
    }

    /// Write `c` at the cursor, opening a blank slot first when `open` is set.
    ///
    /// When there is no room to open a slot the codepoint under the cursor is replaced
    /// instead. Returns `false`, with the buffer unchanged, if `c` does not fit at all.
    pub fn place(&mut self, c: char, open: bool) -> bool {
        let opened = open && self.insert_blank();
        if self.set_current(c) {
            return true;
        }
        if opened {
            self.chars.remove(self.cursor);
        }
        false
    }

    /// Move the cursor right by one, growing the value with a blank at the end.
    ///
    /// Refuses to move past `L - 2` or to grow past `LIMIT` bytes, and refuses to grow when
    /// the two codepoints before the new position are already blanks (at most two trailing
    /// blanks). Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 2 >= L || self.cursor >= self.chars.len() {
            return false;
        }

        self.cursor += 1;
        if self.cursor >= self.chars.len() {
            if self.cursor >= 2
                && self.chars[self.cursor - 1] == BLANK
                && self.chars[self.cursor - 2] == BLANK
            {
                trace_event!(cursor = self.cursor - 1, "refused third trailing blank");
                self.cursor -= 1;
                return false;
            }
            if !self.push_blank() {
                self.cursor -= 1;
                return false;
            }
        }
        true
    }

    /// Move the cursor left by one. Returns whether it moved.
    pub fn retreat(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Cursor to the first codepoint.
    pub fn home(&mut self) {
        self.cursor = 0;
    }

    /// Cursor to the last codepoint.
    pub fn end(&mut self) {
        self.cursor = self.chars.len().saturating_sub(1);
    }

    /// Open a blank slot at the cursor, shifting the tail right.
    ///
    /// Silently refused when the buffer is full. Returns whether a slot was opened.
    pub fn insert_blank(&mut self) -> bool {
        if self.is_full() {
            trace_event!(len = self.chars.len(), "refused insert at capacity");
            return false;
        }
        self.chars.insert(self.cursor, BLANK).is_ok()
    }

    /// Delete the codepoint at the cursor.
    ///
    /// The last remaining codepoint is blanked rather than removed. In insert mode the final
    /// codepoint is blanked too, keeping the cursor where it is; otherwise the tail shifts
    /// left and the cursor is pulled back if it fell off the end.
    pub fn delete(&mut self, insert: bool) {
        let len = self.chars.len();
        if len > 1 {
            if !insert || self.cursor + 1 < len {
                self.chars.remove(self.cursor);
            } else {
                self.set_current(BLANK);
            }
            if self.cursor >= self.chars.len() {
                self.cursor = self.chars.len() - 1;
            }
        } else {
            self.set_current(BLANK);
        }
    }

    /// Write a directly typed codepoint and step past it.
    ///
    /// Inserts first in insert mode (when there is room), writes at the cursor, moves right
    /// unless already at `L - 2`, and appends a blank when the cursor reached the end and the
    /// blank still fits. A codepoint too wide for the remaining room is dropped.
    pub fn type_char(&mut self, c: char, insert: bool) {
        if !self.place(c, insert) {
            return;
        }
        if self.cursor + 2 < L {
            self.cursor += 1;
        }
        if self.cursor >= self.chars.len() && !self.push_blank() {
            self.cursor -= 1;
        }
    }

    /// Write the value without leading or trailing whitespace into `out`.
    ///
    /// The value always fits a field of `L` bytes; for a smaller `out`, whole codepoints are
    /// copied until its capacity is reached.
    pub fn write_trimmed<const N: usize>(&self, out: &mut heapless::String<N>) {
        out.clear();
        let start = self.chars.iter().position(|c| !c.is_whitespace());
        let end = self.chars.iter().rposition(|c| !c.is_whitespace());
        if let (Some(start), Some(end)) = (start, end) {
            for &c in &self.chars[start..=end] {
                if out.push(c).is_err() {
                    break;
                }
            }
        }
    }

    fn push_blank(&mut self) -> bool {
        if self.is_full() {
            trace_event!(len = self.chars.len(), "refused blank at capacity");
            return false;
        }
        self.chars.push(BLANK).is_ok()
    }
}
