//! # tapline
//!
//! Multi-tap text entry for devices with only a directional pad and a numeric keypad.
//!
//! **Key features:**
//! - **Fixed capacity** - Field values live in `heapless` buffers, zero heap usage
//! - **Multi-tap** - Digits cycle through per-key character groups with auto-advance
//! - **Alphabet stepping** - Up/Down walk an explicit allowed-character set
//! - **Insert/overwrite and case tracking** - Driven by the colour keys
//! - **Pluggable output** - Platform-agnostic display trait with a reference formatter
//!
//! ## Optional Features
//!
//! - `kbd` - Raw keyboard passthrough (direct character input alongside multi-tap)
//! - `tracing` - Structured trace events on mode transitions
//! - `layoutgen` - `tapline-layoutgen` binary turning layout TOML into Rust tables
//!
//! The `char_map!` macro validates a character map at compile time and is always available.
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;

// Re-export proc macro (always available)
pub use tapline_macros::char_map;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod charset;
pub mod config;
pub mod display;
pub mod editor;
pub mod error;

mod trace;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Character tables
pub use charset::{AllowedSet, AsciiClass, CharClass, CharMap, UnicodeClass};

// Configuration
pub use config::{DefaultConfig, EditorConfig, RelaxedConfig};

// Display output
pub use display::{EditDisplay, EditView, EditWindow, HelpKeys};

// Error types
pub use error::LayoutError;

// Editor types
pub use editor::{DefaultEditor, Instant, Key, KeyEvent, KeyResult, StrEditor};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
