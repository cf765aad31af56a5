use proc_macro::TokenStream;
use quote::quote;
use syn::{LitStr, parse_macro_input};

// Must match tapline::config::{DIGIT_GROUPS, MAX_GROUP, GROUP_SEPARATOR}
const DIGIT_GROUPS: usize = 10;
const MAX_GROUP: usize = 32;
const GROUP_SEPARATOR: char = '\t';

/// Builds a character map table at compile time.
///
/// Takes a string literal of TAB-separated groups, digit 0 first, and expands to a
/// `&'static [&'static [char]]` suitable for `CharMap::from_groups`.
///
/// # Example
///
/// ```ignore
/// use tapline::char_map;
///
/// const KEYPAD: &[&[char]] = char_map!(" 0\t1\tabc2\tdef3");
/// ```
///
/// This generates:
///
/// ```ignore
/// const KEYPAD: &[&[char]] = {
///     const GROUPS: &[&[char]] = &[&[' ', '0'], &['1'], &['a', 'b', 'c', '2'], &['d', 'e', 'f', '3']];
///     GROUPS
/// };
/// ```
///
/// # Requirements
///
/// - At most ten groups (one per digit key)
/// - At most 32 codepoints per group
/// - No codepoint repeated within a group
#[proc_macro]
pub fn char_map(input: TokenStream) -> TokenStream {
    let literal = parse_macro_input!(input as LitStr);
    let value = literal.value();

    let groups: Vec<Vec<char>> = value
        .split(GROUP_SEPARATOR)
        .map(|group| group.chars().collect())
        .collect();

    if groups.len() > DIGIT_GROUPS {
        return syn::Error::new_spanned(
            &literal,
            format!(
                "character map has {} groups, at most {} allowed",
                groups.len(),
                DIGIT_GROUPS
            ),
        )
        .to_compile_error()
        .into();
    }

    // Validate each group
    for (digit, group) in groups.iter().enumerate() {
        if group.len() > MAX_GROUP {
            return syn::Error::new_spanned(
                &literal,
                format!(
                    "group for key {} has {} characters, at most {} allowed",
                    digit,
                    group.len(),
                    MAX_GROUP
                ),
            )
            .to_compile_error()
            .into();
        }

        for (i, c) in group.iter().enumerate() {
            if group[..i].contains(c) {
                return syn::Error::new_spanned(
                    &literal,
                    format!("character {:?} repeated in group for key {}", c, digit),
                )
                .to_compile_error()
                .into();
            }
        }
    }

    let group_tokens: Vec<proc_macro2::TokenStream> = groups
        .iter()
        .map(|group| quote! { &[#(#group),*] })
        .collect();

    let expanded = quote! {
        {
            const GROUPS: &[&[char]] = &[#(#group_tokens),*];
            GROUPS
        }
    };

    TokenStream::from(expanded)
}
