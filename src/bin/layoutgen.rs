//! Keypad layout generator.
//!
//! Reads a layout TOML file, validates it with the strict table constructors and prints
//! Rust source with constant tables. Meant to run from a build script so a bad layout
//! fails the build instead of degrading silently on the device.
//!
//! ```toml
//! name = "KEYPAD"
//! allowed = " abcdefghijklmnopqrstuvwxyz0123456789-.,"
//! auto_advance_ms = 1500
//! groups = [" 0", "-.,1", "abc2", "def3", "ghi4", "jkl5", "mno6", "pqrs7", "tuv8", "wxyz9"]
//! ```
//!
//! Usage: `tapline-layoutgen layout.toml > layout.rs`

use serde::Deserialize;
use std::fmt::Write as _;
use std::process::ExitCode;
use tapline::config::{DefaultConfig, GROUP_SEPARATOR};
use tapline::{AllowedSet, CharMap, EditorConfig, LayoutError};
use tracing::{error, info, warn};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Layout {
    /// Prefix for the generated constant names
    #[serde(default = "default_name")]
    name: String,

    /// Allowed alphabet, in cycling order
    allowed: String,

    /// Digit groups, digit 0 first
    groups: Vec<String>,

    /// Auto-advance delay override
    auto_advance_ms: Option<u64>,
}

fn default_name() -> String {
    "LAYOUT".into()
}

#[derive(Debug)]
enum GenError {
    Read(std::io::Error),
    Parse(toml::de::Error),
    Layout(LayoutError),
    SeparatorInGroup(usize),
    BadName(String),
}

impl std::fmt::Display for GenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenError::Read(e) => write!(f, "cannot read layout: {}", e),
            GenError::Parse(e) => write!(f, "invalid layout TOML: {}", e),
            GenError::Layout(e) => write!(f, "invalid layout: {}", e),
            GenError::SeparatorInGroup(digit) => {
                write!(f, "group for key {} contains a TAB", digit)
            }
            GenError::BadName(name) => write!(f, "{:?} is not a valid constant prefix", name),
        }
    }
}

impl From<LayoutError> for GenError {
    fn from(e: LayoutError) -> Self {
        GenError::Layout(e)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let Some(path) = std::env::args().nth(1) else {
        error!("usage: tapline-layoutgen <layout.toml>");
        return ExitCode::FAILURE;
    };

    match generate(&path) {
        Ok(source) => {
            print!("{}", source);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(path = path.as_str(), "{}", e);
            ExitCode::FAILURE
        }
    }
}

fn generate(path: &str) -> Result<String, GenError> {
    let text = std::fs::read_to_string(path).map_err(GenError::Read)?;
    let layout: Layout = toml::from_str(&text).map_err(GenError::Parse)?;
    info!(path, name = layout.name.as_str(), "loaded layout");
    render(&layout)
}

fn render(layout: &Layout) -> Result<String, GenError> {
    let name = layout.name.as_str();
    let valid_name = name.starts_with(|c: char| c.is_ascii_uppercase())
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
    if !valid_name {
        return Err(GenError::BadName(name.into()));
    }

    if let Some(digit) = layout.groups.iter().position(|g| g.contains(GROUP_SEPARATOR)) {
        return Err(GenError::SeparatorInGroup(digit));
    }

    let allowed = AllowedSet::try_parse(&layout.allowed)?;
    let joined = layout.groups.join(&GROUP_SEPARATOR.to_string());
    let map = CharMap::try_parse(&joined, &allowed)?;

    for (digit, raw) in layout.groups.iter().enumerate() {
        let kept = u8::try_from(digit).map_or(0, |d| map.group(d).len());
        let dropped = raw.chars().count() - kept;
        if dropped > 0 {
            warn!(digit, dropped, "characters outside the allowed set are unreachable");
        }
        if kept == 0 {
            warn!(digit, "key offers no characters");
        }
    }

    let timeout = layout
        .auto_advance_ms
        .unwrap_or(DefaultConfig::AUTO_ADVANCE_TIMEOUT_MS);

    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "// Generated by tapline-layoutgen. Do not edit.");
    let _ = writeln!(out);
    let _ = writeln!(out, "pub const {}_ALLOWED: &str = {:?};", name, layout.allowed);
    let _ = writeln!(out, "pub const {}_AUTO_ADVANCE_MS: u64 = {};", name, timeout);
    let _ = writeln!(out, "pub const {}_GROUPS: &[&[char]] = &[", name);
    for digit in 0..layout.groups.len() {
        let group = u8::try_from(digit).map_or(&[][..], |d| map.group(d));
        let chars: Vec<String> = group.iter().map(|c| format!("{:?}", c)).collect();
        let _ = writeln!(out, "    &[{}],", chars.join(", "));
    }
    let _ = writeln!(out, "];");

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(groups: &[&str]) -> Layout {
        Layout {
            name: "KEYPAD".into(),
            allowed: "abc123".into(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
            auto_advance_ms: None,
        }
    }

    #[test]
    fn test_render_filters_and_formats() {
        let source = render(&layout(&["1", "abc2!"])).unwrap();
        assert!(source.contains("pub const KEYPAD_ALLOWED: &str = \"abc123\";"));
        assert!(source.contains("pub const KEYPAD_AUTO_ADVANCE_MS: u64 = 1500;"));
        assert!(source.contains("    &['a', 'b', 'c', '2'],"));
    }

    #[test]
    fn test_render_rejects_too_many_groups() {
        let groups = ["a"; 11];
        assert!(matches!(
            render(&layout(&groups)),
            Err(GenError::Layout(LayoutError::TooManyGroups))
        ));
    }

    #[test]
    fn test_render_rejects_bad_name() {
        let mut bad = layout(&["1"]);
        bad.name = "lower".into();
        assert!(matches!(render(&bad), Err(GenError::BadName(_))));
    }

    #[test]
    fn test_parse_toml() {
        let layout: Layout = toml::from_str(
            "allowed = \"ab\"\ngroups = [\"\", \"ab\"]\nauto_advance_ms = 900\n",
        )
        .unwrap();
        assert_eq!(layout.name, "LAYOUT");
        assert_eq!(layout.auto_advance_ms, Some(900));
        let source = render(&layout).unwrap();
        assert!(source.contains("LAYOUT_AUTO_ADVANCE_MS: u64 = 900;"));
    }
}
