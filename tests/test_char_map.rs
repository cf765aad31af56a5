//! Compile-time character maps and table validation.

#[allow(clippy::duplicate_mod)]
#[path = "helpers.rs"]
mod helpers;

use helpers::{MockDisplay, live, press};
use tapline::config::{FILE_NAME_CHARS, KEYPAD_CHAR_MAP};
use tapline::{AllowedSet, AsciiClass, CharMap, Key, LayoutError, StrEditor, char_map};

const HEX_PAD: &[&[char]] = char_map!("0\t1\tabc2\tdef3\t4\t5\t6\t7\t8\t9");

#[test]
fn test_macro_expands_to_groups() {
    assert_eq!(HEX_PAD.len(), 10);
    assert_eq!(HEX_PAD[2], &['a', 'b', 'c', '2']);
    assert_eq!(HEX_PAD[9], &['9']);
}

#[test]
fn test_macro_matches_runtime_parse() {
    const KEYPAD: &[&[char]] =
        char_map!(" 0\t-.,1#~\\^$[]|()*+?{}/:%@&\tabc2\tdef3\tghi4\tjkl5\tmno6\tpqrs7\ttuv8\twxyz9");
    let allowed = AllowedSet::parse(FILE_NAME_CHARS);

    assert_eq!(
        CharMap::from_groups(KEYPAD, &allowed),
        CharMap::parse(KEYPAD_CHAR_MAP, &allowed)
    );
}

#[test]
fn test_editor_with_custom_tables() {
    let allowed = AllowedSet::try_parse("0123456789abcdef").unwrap();
    let map = CharMap::from_groups(HEX_PAD, &allowed);
    let mut value = helpers::field::<8>("");
    let mut editor: StrEditor<'_, 8, MockDisplay, tapline::DefaultConfig, AsciiClass> =
        StrEditor::with_tables(&mut value, allowed, map, AsciiClass, MockDisplay::new());
    editor.enter_edit_mode().unwrap();

    press(&mut editor, Key::Digit(3), 0);
    press(&mut editor, Key::Digit(3), 100);
    assert_eq!(live(&editor), "e");

    press(&mut editor, Key::Up, 200);
    assert_eq!(live(&editor), "f");
    press(&mut editor, Key::Up, 300);
    assert_eq!(live(&editor), "0");
}

#[test]
fn test_strict_parsing_reports_layout_errors() {
    assert_eq!(AllowedSet::try_parse(""), Err(LayoutError::EmptyAllowed));
    assert_eq!(AllowedSet::try_parse("aba"), Err(LayoutError::DuplicateChar('a')));

    let allowed = AllowedSet::parse("abc");
    let eleven = "a\tb\tc\ta\tb\tc\ta\tb\tc\ta\tb";
    assert_eq!(
        CharMap::try_parse(eleven, &allowed),
        Err(LayoutError::TooManyGroups)
    );
}
