//! Test fixtures and utilities for tapline testing.
//!
//! Provides:
//! - `MockDisplay`: Test implementation of the EditDisplay trait
//! - `FailingDisplay`: Display whose output always fails
//! - Small alphabets and keypad layouts for focused tests

#![allow(dead_code)]

use tapline::{EditDisplay, EditView, HelpKeys};

// ============================================================================
// MockDisplay - Test Display Implementation
// ============================================================================

/// Mock display for testing.
///
/// Captures every rendered view and every help-label update. Uses `std` types since tests
/// run with std support.
#[derive(Debug)]
pub struct MockDisplay {
    /// Rendered views, oldest first
    lines: Vec<String>,

    /// Help label updates, oldest first
    help: Vec<HelpKeys>,

    /// Editable width in glyph units
    width: usize,

    /// Codepoints drawn two units wide
    wide: Vec<char>,
}

impl MockDisplay {
    /// Create a display wide enough for any test value.
    pub fn new() -> Self {
        Self::with_width(64)
    }

    /// Create a display with a specific editable width.
    pub fn with_width(width: usize) -> Self {
        Self {
            lines: Vec::new(),
            help: Vec::new(),
            width,
            wide: Vec::new(),
        }
    }

    /// Draw `chars` two units wide.
    pub fn wide(mut self, chars: &str) -> Self {
        self.wide.extend(chars.chars());
        self
    }

    /// Most recent rendered view.
    pub fn last_line(&self) -> String {
        self.lines.last().cloned().unwrap_or_default()
    }

    /// All rendered views.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Most recent help labels.
    pub fn last_help(&self) -> Option<HelpKeys> {
        self.help.last().copied()
    }

    /// Number of help label updates.
    pub fn help_updates(&self) -> usize {
        self.help.len()
    }

    /// Clear captured output.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.help.clear();
    }
}

impl Default for MockDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl EditDisplay for MockDisplay {
    type Error = ();

    fn editable_width(&self) -> usize {
        self.width
    }

    fn glyph_width(&self, c: char) -> usize {
        if self.wide.contains(&c) { 2 } else { 1 }
    }

    fn show(&mut self, view: &EditView<'_>) -> Result<(), Self::Error> {
        self.lines.push(view.to_string());
        Ok(())
    }

    fn set_help(&mut self, help: &HelpKeys) -> Result<(), Self::Error> {
        self.help.push(*help);
        Ok(())
    }
}

// ============================================================================
// FailingDisplay - Error Propagation
// ============================================================================

/// Display error raised by `FailingDisplay`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DisplayGone;

/// Display that rejects every update.
#[derive(Debug, Default)]
pub struct FailingDisplay;

impl EditDisplay for FailingDisplay {
    type Error = DisplayGone;

    fn editable_width(&self) -> usize {
        16
    }

    fn show(&mut self, _view: &EditView<'_>) -> Result<(), Self::Error> {
        Err(DisplayGone)
    }

    fn set_help(&mut self, _help: &HelpKeys) -> Result<(), Self::Error> {
        Err(DisplayGone)
    }
}

// ============================================================================
// Layouts
// ============================================================================

/// Lowercase letters only.
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Tiny alphabet for cycling tests.
pub const ABC: &str = "abc";

/// Digits and a blank.
pub const DIGITS: &str = " 0123456789";
