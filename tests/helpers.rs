//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
mod fixtures;

pub use fixtures::{ABC, DIGITS, DisplayGone, FailingDisplay, LETTERS, MockDisplay};
use tapline::{CharClass, DefaultEditor, EditorConfig, Instant, KeyEvent, KeyResult, StrEditor};

/// Editor type used throughout the integration tests.
pub type TestEditor<'a, const L: usize> = DefaultEditor<'a, L, MockDisplay>;

/// Auto-advance delay of the default configuration.
pub const TIMEOUT: u64 = tapline::DefaultConfig::AUTO_ADVANCE_TIMEOUT_MS;

// ============================================================================
// Field & Editor Creation
// ============================================================================

/// Build a field holding `value`.
pub fn field<const L: usize>(value: &str) -> heapless::String<L> {
    heapless::String::try_from(value).unwrap()
}

/// Create an editor over `field` and put it in edit mode.
pub fn editing<const L: usize>(field: &mut heapless::String<L>) -> TestEditor<'_, L> {
    let mut editor = StrEditor::new(field, MockDisplay::new());
    editor.enter_edit_mode().unwrap();
    editor.refresh().unwrap();
    editor
}

/// Create an editor restricted to `allowed` and put it in edit mode.
pub fn editing_with<'a, const L: usize>(
    field: &'a mut heapless::String<L>,
    allowed: &str,
) -> TestEditor<'a, L> {
    let mut editor = StrEditor::with_allowed(field, allowed, MockDisplay::new());
    editor.enter_edit_mode().unwrap();
    editor.refresh().unwrap();
    editor
}

// ============================================================================
// Input Helpers
// ============================================================================

/// Let the clock reach `ms`, then deliver `key` at that time.
///
/// Polls first, the way a host main loop checks the deadline before dispatching input.
pub fn press<const L: usize, C: EditorConfig, K: CharClass>(
    editor: &mut StrEditor<'_, L, MockDisplay, C, K>,
    key: impl Into<KeyEvent>,
    ms: u64,
) -> KeyResult {
    let now = Instant::from_millis(ms);
    editor.poll(now).unwrap();
    editor.process_key(key, now).unwrap()
}

/// Tap `digits` in quick succession starting at `start`, 100 ms apart.
///
/// Returns the time of the last tap.
pub fn tap<const L: usize>(editor: &mut TestEditor<'_, L>, digits: &str, start: u64) -> u64 {
    let mut ms = start;
    for (i, d) in digits.chars().enumerate() {
        ms = start + 100 * i as u64;
        let digit = d.to_digit(10).unwrap() as u8;
        press(editor, tapline::Key::Digit(digit), ms);
    }
    ms
}

/// Tap groups of digits separated by pauses long enough to freeze each character.
///
/// Returns the time after the final pause, with the last character frozen too.
pub fn tap_word<const L: usize>(editor: &mut TestEditor<'_, L>, groups: &[&str]) -> u64 {
    let mut ms = 0;
    for group in groups {
        let last = tap(editor, group, ms);
        ms = last + TIMEOUT + 1;
        editor.poll(Instant::from_millis(ms)).unwrap();
    }
    ms
}

/// Deliver raw keyboard characters.
#[cfg(feature = "kbd")]
pub fn type_text<const L: usize>(editor: &mut TestEditor<'_, L>, text: &str) {
    for c in text.chars() {
        press(editor, tapline::Key::kbd_char(c), 0);
    }
}

// ============================================================================
// Inspection Helpers
// ============================================================================

/// Live value in edit mode, trailing blanks included.
pub fn live<const L: usize, C: EditorConfig, K: CharClass>(
    editor: &StrEditor<'_, L, MockDisplay, C, K>,
) -> String {
    editor.chars().unwrap_or(&[]).iter().collect()
}

/// Most recent rendered view.
pub fn screen<const L: usize, C: EditorConfig, K: CharClass>(
    editor: &StrEditor<'_, L, MockDisplay, C, K>,
) -> String {
    editor.display().last_line()
}
