//! Multi-tap string editor.
//!
//! `StrEditor` drives a fixed-length text field from a remote control. In navigation mode
//! it only shows the committed value; Right enters edit mode, where the value is copied into
//! an [`EditBuffer`] and edited with arrows, colour keys, digits (multi-tap) and optional
//! raw keyboard input. OK writes the trimmed result back, Back discards it.
//!
//! The editor is a single-owner, event-driven state machine: each key is processed to
//! completion, and the only time-driven transition (freezing a pending multi-tap character)
//! happens when the caller polls with the current time.

use crate::charset::{AllowedSet, BLANK, CharClass, CharMap, TapCursor, UnicodeClass};
use crate::config::{DefaultConfig, EditorConfig};
use crate::display::{EditDisplay, EditView, EditWindow, HelpKeys};
use crate::trace::{debug_event, trace_event};
use core::fmt;
use core::marker::PhantomData;

// Sub-modules
pub mod buffer;
pub mod kbd;
pub mod key;
pub mod timer;
pub mod window;

// Re-export key types
pub use buffer::EditBuffer;
pub use kbd::{KbdEvent, KbdFunc};
pub use key::{Key, KeyEvent, KeyResult};
pub use timer::{Deadline, Instant};

/// Transient state of one edit session, dropped when edit mode is left.
#[derive(Debug, Clone)]
struct EditSession<const L: usize> {
    buffer: EditBuffer<L>,

    /// First visible index of the display window
    offset: usize,

    insert: bool,
    uppercase: bool,

    /// Next input starts a new character (nothing pending at the cursor)
    new_char: bool,

    tap: Option<TapCursor>,
    deadline: Deadline,
}

impl<const L: usize> EditSession<L> {
    fn new(buffer: EditBuffer<L>, class: &impl CharClass) -> Self {
        let mut session = Self {
            buffer,
            offset: 0,
            insert: false,
            uppercase: false,
            new_char: true,
            tap: None,
            deadline: Deadline::new(),
        };
        session.track_case(class);
        session
    }

    /// Follow the case of the codepoint under the cursor, if it has one.
    fn track_case(&mut self, class: &impl CharClass) {
        let c = self.buffer.current();
        if class.is_alpha(c) {
            self.uppercase = class.is_upper(c);
        }
    }

    fn advance(&mut self, class: &impl CharClass) {
        self.buffer.advance();
        self.new_char = true;
        if !self.insert {
            self.track_case(class);
        }
    }

    fn insert_pending(&self) -> bool {
        self.insert && self.new_char
    }

    fn cased(&self, c: char, class: &impl CharClass) -> char {
        if self.uppercase { class.to_upper(c) } else { c }
    }
}

/// Multi-tap editor for one fixed-length text field.
///
/// Generic over:
/// - `'a`: Lifetime of the borrowed field storage
/// - `L`: Field length including the sentinel slot (value holds at most `L - 1` codepoints)
/// - `D`: EditDisplay implementation
/// - `C`: EditorConfig implementation
/// - `K`: CharClass implementation
///
/// The field is written exactly once per session, on commit.
pub struct StrEditor<'a, const L: usize, D, C = DefaultConfig, K = UnicodeClass>
where
    D: EditDisplay,
    C: EditorConfig,
    K: CharClass,
{
    /// Committed value (externally owned)
    field: &'a mut heapless::String<L>,

    allowed: AllowedSet,
    char_map: CharMap,
    class: K,

    /// Output channel
    display: D,

    /// Live edit state; `None` in navigation mode
    session: Option<EditSession<L>>,

    /// Last key offered, repeat flag stripped
    last_key: Option<Key>,

    /// Config type marker (zero-size)
    _config: PhantomData<C>,
}

/// Editor with the default configuration and Unicode case tables.
pub type DefaultEditor<'a, const L: usize, D> = StrEditor<'a, L, D, DefaultConfig, UnicodeClass>;

// ============================================================================
// Debug implementation
// ============================================================================

impl<const L: usize, D, C, K> fmt::Debug for StrEditor<'_, L, D, C, K>
where
    D: EditDisplay,
    C: EditorConfig,
    K: CharClass,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug_struct = f.debug_struct("StrEditor");
        debug_struct
            .field("value", &self.field.as_str())
            .field("edit_mode", &self.session.is_some())
            .field("last_key", &self.last_key);

        if let Some(session) = &self.session {
            debug_struct.field("session", session);
        }

        debug_struct.finish_non_exhaustive()
    }
}

// ============================================================================
// Constructors
// ============================================================================

impl<'a, const L: usize, D, C, K> StrEditor<'a, L, D, C, K>
where
    D: EditDisplay,
    C: EditorConfig,
    K: CharClass + Default,
{
    /// Create an editor using the configuration's alphabet and character map.
    ///
    /// Starts in navigation mode. Call `refresh()` to show the committed value.
    pub fn new(field: &'a mut heapless::String<L>, display: D) -> Self {
        Self::with_allowed(field, C::DEFAULT_ALLOWED, display)
    }

    /// Create an editor restricted to `allowed`, with the configuration's character map.
    pub fn with_allowed(field: &'a mut heapless::String<L>, allowed: &str, display: D) -> Self {
        let allowed = AllowedSet::parse(allowed);
        let char_map = CharMap::parse(C::DEFAULT_CHAR_MAP, &allowed);
        Self::with_tables(field, allowed, char_map, K::default(), display)
    }
}

impl<'a, const L: usize, D, C, K> StrEditor<'a, L, D, C, K>
where
    D: EditDisplay,
    C: EditorConfig,
    K: CharClass,
{
    /// Create an editor from prebuilt tables and classifier.
    pub fn with_tables(
        field: &'a mut heapless::String<L>,
        allowed: AllowedSet,
        char_map: CharMap,
        class: K,
        display: D,
    ) -> Self {
        Self {
            field,
            allowed,
            char_map,
            class,
            display,
            session: None,
            last_key: None,
            _config: PhantomData,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Committed value of the field.
    pub fn value(&self) -> &str {
        self.field.as_str()
    }

    /// Whether the editor is in edit mode.
    pub fn in_edit_mode(&self) -> bool {
        self.session.is_some()
    }

    /// Cursor index (edit mode only).
    pub fn cursor(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.buffer.cursor())
    }

    /// Live codepoints, trailing blanks included (edit mode only).
    pub fn chars(&self) -> Option<&[char]> {
        self.session.as_ref().map(|s| s.buffer.as_slice())
    }

    /// Whether insert mode is on.
    pub fn is_insert(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.insert)
    }

    /// Whether new characters are entered in uppercase.
    pub fn is_uppercase(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.uppercase)
    }

    /// Whether the next input starts a new character rather than changing a pending one.
    pub fn is_new_char(&self) -> bool {
        self.session.as_ref().is_none_or(|s| s.new_char)
    }

    /// Allowed codepoints.
    pub fn allowed(&self) -> &AllowedSet {
        &self.allowed
    }

    /// Digit character map (already filtered against the allowed set).
    pub fn char_map(&self) -> &CharMap {
        &self.char_map
    }

    /// Last key offered to the editor.
    pub fn last_key(&self) -> Option<Key> {
        self.last_key
    }

    /// Get immutable reference to the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get mutable reference to the display.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Colour-key labels for the current mode.
    pub fn help_keys(&self) -> HelpKeys {
        match &self.session {
            Some(s) => HelpKeys {
                red: Some(C::LABEL_CASE),
                green: Some(if s.insert {
                    C::LABEL_OVERWRITE
                } else {
                    C::LABEL_INSERT
                }),
                yellow: Some(C::LABEL_DELETE),
                blue: None,
            },
            None => HelpKeys::NONE,
        }
    }

    // ========================================================================
    // Mode transitions
    // ========================================================================

    /// Enter edit mode with the cursor on the first codepoint.
    ///
    /// Snapshots the committed value; does nothing if already editing, if the field is too
    /// short to hold a codepoint, or if the value fills all `L` bytes of the field (the last
    /// byte is the sentinel, so editing it would drop committed text).
    pub fn enter_edit_mode(&mut self) -> Result<(), D::Error> {
        if self.session.is_some() {
            return Ok(());
        }

        match EditBuffer::load(self.field.as_str()) {
            Some(buffer) => {
                debug_event!(len = buffer.len(), "entered edit mode");
                self.session = Some(EditSession::new(buffer, &self.class));
                self.update_help()
            }
            None => {
                debug_event!(capacity = L, len = self.field.len(), "field cannot be edited");
                Ok(())
            }
        }
    }

    /// Leave edit mode, writing the trimmed value back if `commit`.
    ///
    /// Cancelling leaves the committed value untouched. Does nothing in navigation mode.
    pub fn leave_edit_mode(&mut self, commit: bool) -> Result<(), D::Error> {
        if let Some(session) = self.session.take() {
            if commit {
                session.buffer.write_trimmed(&mut *self.field);
            }
            debug_event!(commit, value = self.field.as_str(), "left edit mode");
            self.update_help()?;
        }
        Ok(())
    }

    // ========================================================================
    // Event processing
    // ========================================================================

    /// Render the field to the display.
    pub fn refresh(&mut self) -> Result<(), D::Error> {
        let Some(s) = self.session.as_mut() else {
            return self.display.show(&EditView::Committed(self.field.as_str()));
        };

        let width = self
            .display
            .editable_width()
            .saturating_sub(self.display.text_width("[]"))
            .saturating_sub(self.display.text_width("<>"));
        let display = &self.display;
        let end = window::scroll(
            s.buffer.as_slice(),
            s.buffer.cursor(),
            &mut s.offset,
            width,
            |c| display.glyph_width(c),
        );

        let view = EditView::Editing(EditWindow {
            chars: s.buffer.as_slice(),
            cursor: s.buffer.cursor(),
            offset: s.offset,
            end,
            insert_pending: s.insert_pending(),
        });
        self.display.show(&view)
    }

    /// Process one key event.
    ///
    /// `now` arms the auto-advance deadline when a digit writes a character. It is not
    /// checked against a deadline already armed: call [`poll`](Self::poll) with the same
    /// time first, or a slow second tap on the same digit changes the pending character
    /// ("b") instead of starting a new one ("aa").
    ///
    /// Returns `Unhandled` for keys with no meaning in the current mode so an outer menu can
    /// act on them; every handled key ends with a refresh.
    pub fn process_key(
        &mut self,
        event: impl Into<KeyEvent>,
        now: Instant,
    ) -> Result<KeyResult, D::Error> {
        let event = event.into();
        let key = event.key;
        let same_key = self.last_key == Some(key);
        self.last_key = Some(key);

        if event.repeat && !key.accepts_repeat() {
            return Ok(KeyResult::Unhandled);
        }

        let result = match key {
            Key::Red => self.toggle_case(),
            Key::Green => self.toggle_insert()?,
            Key::Yellow => self.delete(),
            Key::Blue => self.swallow(),
            Key::Left => self.move_left(),
            Key::Right => self.move_right()?,
            Key::Up => self.cycle(true),
            Key::Down => self.cycle(false),
            Key::Digit(digit) if digit <= 9 => self.tap_digit(digit, same_key, now),
            Key::Digit(_) => KeyResult::Unhandled,
            Key::Ok => self.leave(true)?,
            Key::Back => self.leave(false)?,
            Key::Kbd(code) => self.kbd(code)?,
        };

        if result == KeyResult::Continue {
            self.refresh()?;
        }
        Ok(result)
    }

    /// Check the auto-advance deadline; call on idle ticks and before every `process_key`.
    ///
    /// When the last key was a digit, its character is still pending and the deadline has
    /// passed, the character is frozen and the cursor advances once.
    pub fn poll(&mut self, now: Instant) -> Result<KeyResult, D::Error> {
        let last_was_digit = self.last_key.is_some_and(Key::is_digit);
        let Some(s) = self.session.as_mut() else {
            return Ok(KeyResult::Unhandled);
        };
        if s.new_char || !last_was_digit || !s.deadline.timed_out(now) {
            return Ok(KeyResult::Unhandled);
        }

        s.advance(&self.class);
        s.tap = None;
        s.deadline.clear();
        trace_event!(cursor = s.buffer.cursor(), "auto-advanced");

        self.refresh()?;
        Ok(KeyResult::Continue)
    }

    // ========================================================================
    // Key handlers (no refresh; process_key does that)
    // ========================================================================

    fn toggle_case(&mut self) -> KeyResult {
        let Some(s) = self.session.as_mut() else {
            return KeyResult::Unhandled;
        };
        if !s.insert_pending() {
            s.uppercase = !s.uppercase;
            let c = s.buffer.current();
            let c = if s.uppercase {
                self.class.to_upper(c)
            } else {
                self.class.to_lower(c)
            };
            s.buffer.set_current(c);
        }
        KeyResult::Continue
    }

    fn toggle_insert(&mut self) -> Result<KeyResult, D::Error> {
        let Some(s) = self.session.as_mut() else {
            return Ok(KeyResult::Unhandled);
        };
        s.insert = !s.insert;
        s.new_char = true;
        debug_event!(insert = s.insert, "toggled insert mode");
        self.update_help()?;
        Ok(KeyResult::Continue)
    }

    fn delete(&mut self) -> KeyResult {
        let Some(s) = self.session.as_mut() else {
            return KeyResult::Unhandled;
        };
        s.buffer.delete(s.insert);
        s.track_case(&self.class);
        s.new_char = true;
        KeyResult::Continue
    }

    fn swallow(&mut self) -> KeyResult {
        if self.session.is_some() {
            KeyResult::Continue
        } else {
            KeyResult::Unhandled
        }
    }

    fn move_left(&mut self) -> KeyResult {
        let Some(s) = self.session.as_mut() else {
            return KeyResult::Unhandled;
        };
        if s.buffer.cursor() > 0 {
            // a pending insert-mode character is frozen in place first
            if !s.insert || s.new_char {
                s.buffer.retreat();
            }
            s.new_char = true;
            if !s.insert {
                s.track_case(&self.class);
            }
        }
        KeyResult::Continue
    }

    fn move_right(&mut self) -> Result<KeyResult, D::Error> {
        if let Some(s) = self.session.as_mut() {
            s.advance(&self.class);
        } else {
            self.enter_edit_mode()?;
        }
        Ok(KeyResult::Continue)
    }

    fn cycle(&mut self, up: bool) -> KeyResult {
        let Some(s) = self.session.as_mut() else {
            return KeyResult::Unhandled;
        };
        if self.allowed.is_empty() {
            return KeyResult::Continue;
        }

        // an insert-mode step starts from the blank about to be opened, unless the field
        // is full and the step falls back to changing the codepoint in place
        let open = s.insert_pending() && !s.buffer.is_full();
        let current = if open { BLANK } else { s.buffer.current() };
        let next = if s.uppercase {
            self.allowed
                .cycle(self.class.to_lower(current), up)
                .map(|c| self.class.to_upper(c))
        } else {
            self.allowed.cycle(current, up)
        };
        if next.is_some_and(|c| s.buffer.place(c, open)) {
            s.new_char = false;
        }
        KeyResult::Continue
    }

    fn tap_digit(&mut self, digit: u8, same_key: bool, now: Instant) -> KeyResult {
        let Some(s) = self.session.as_mut() else {
            return KeyResult::Unhandled;
        };

        if !same_key {
            if !s.new_char {
                s.advance(&self.class);
            }
            s.tap = None;
        }

        if let Some((c, cursor)) = self.char_map.tap(s.tap, digit) {
            let c = s.cased(c, &self.class);
            if !s.buffer.place(c, s.insert_pending()) {
                return KeyResult::Continue;
            }
            s.tap = Some(cursor);
            s.new_char = false;
            s.deadline.set(now, C::AUTO_ADVANCE_TIMEOUT_MS);
        }
        KeyResult::Continue
    }

    fn leave(&mut self, commit: bool) -> Result<KeyResult, D::Error> {
        if self.session.is_none() {
            return Ok(KeyResult::Unhandled);
        }
        self.leave_edit_mode(commit)?;
        Ok(KeyResult::Continue)
    }

    #[cfg(feature = "kbd")]
    fn kbd(&mut self, code: u32) -> Result<KeyResult, D::Error> {
        let Some(s) = self.session.as_mut() else {
            return Ok(KeyResult::Unhandled);
        };

        match KbdEvent::decode(code) {
            KbdEvent::Char(c) => {
                if self.allowed.contains(self.class.to_lower(c)) {
                    s.buffer.type_char(c, s.insert);
                }
            }
            KbdEvent::Backspace => {
                if s.buffer.retreat() {
                    self.last_key = Some(Key::Yellow);
                    return Ok(self.delete());
                }
            }
            KbdEvent::Func(KbdFunc::Home) => s.buffer.home(),
            KbdEvent::Func(KbdFunc::End) => s.buffer.end(),
            KbdEvent::Func(KbdFunc::Insert) => {
                self.last_key = Some(Key::Green);
                return self.toggle_insert();
            }
            KbdEvent::Func(KbdFunc::Delete) => {
                self.last_key = Some(Key::Yellow);
                return Ok(self.delete());
            }
            KbdEvent::Func(_) | KbdEvent::Unsupported(_) => {
                trace_event!(code, "ignored passthrough code");
            }
        }
        Ok(KeyResult::Continue)
    }

    #[cfg(not(feature = "kbd"))]
    fn kbd(&mut self, _code: u32) -> Result<KeyResult, D::Error> {
        Ok(KeyResult::Unhandled)
    }

    fn update_help(&mut self) -> Result<(), D::Error> {
        let help = self.help_keys();
        self.display.set_help(&help)
    }
}
