//! Digit-to-characters map for multi-tap entry.
//!
//! Each digit key 0-9 owns one group of codepoints reachable by pressing it repeatedly.
//! Groups are filtered against the field's [`AllowedSet`] once, at construction, so the
//! multi-tap walk only ever sees legal codepoints.

use super::AllowedSet;
use crate::config::{DIGIT_GROUPS, GROUP_SEPARATOR, MAX_GROUP};
use crate::error::LayoutError;

type Group = heapless::Vec<char, MAX_GROUP>;

/// Position of the multi-tap walk inside a digit group.
///
/// An explicit (digit, offset) pair rather than a reference into the map, so it stays valid
/// whatever happens to the map it was taken from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TapCursor {
    digit: u8,
    offset: usize,
}

impl TapCursor {
    /// Digit key this cursor walks.
    pub fn digit(&self) -> u8 {
        self.digit
    }

    /// Offset of the next codepoint the walk will yield.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Ten ordered digit groups, digit 0 first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharMap {
    groups: heapless::Vec<Group, DIGIT_GROUPS>,
}

impl CharMap {
    /// Create a map with no groups (no digit offers any character).
    pub const fn new() -> Self {
        Self {
            groups: heapless::Vec::new(),
        }
    }

    /// Build from a TAB-separated map string, leniently.
    ///
    /// Groups past digit 9 are ignored, codepoints past `MAX_GROUP` are dropped, and
    /// codepoints outside `allowed` are filtered out.
    pub fn parse(map: &str, allowed: &AllowedSet) -> Self {
        let mut char_map = Self::new();
        for raw in map.split(GROUP_SEPARATOR) {
            let mut group = Group::new();
            for c in raw.chars().filter(|&c| allowed.contains(c)) {
                if group.push(c).is_err() {
                    break;
                }
            }
            if char_map.groups.push(group).is_err() {
                break;
            }
        }
        char_map
    }

    /// Build from a TAB-separated map string, rejecting extra groups and oversized groups.
    ///
    /// Codepoints outside `allowed` are still filtered, not rejected: a map is routinely
    /// shared between fields with different alphabets.
    pub fn try_parse(map: &str, allowed: &AllowedSet) -> Result<Self, LayoutError> {
        let mut char_map = Self::new();
        for (digit, raw) in map.split(GROUP_SEPARATOR).enumerate() {
            let digit = u8::try_from(digit).map_err(|_| LayoutError::TooManyGroups)?;
            if raw.chars().count() > MAX_GROUP {
                return Err(LayoutError::GroupTooLong { digit });
            }
            let group = raw.chars().filter(|&c| allowed.contains(c)).collect();
            char_map
                .groups
                .push(group)
                .map_err(|_| LayoutError::TooManyGroups)?;
        }
        Ok(char_map)
    }

    /// Build from static groups, typically produced by the `char_map!` macro.
    pub fn from_groups(groups: &[&[char]], allowed: &AllowedSet) -> Self {
        let mut char_map = Self::new();
        for raw in groups.iter().take(DIGIT_GROUPS) {
            let group = raw
                .iter()
                .copied()
                .filter(|&c| allowed.contains(c))
                .take(MAX_GROUP)
                .collect();
            // take(DIGIT_GROUPS) keeps this within capacity
            let _ = char_map.groups.push(group);
        }
        char_map
    }

    /// Codepoints reachable from `digit`, empty when the map has no such group.
    pub fn group(&self, digit: u8) -> &[char] {
        self.groups
            .get(usize::from(digit))
            .map(|g| g.as_slice())
            .unwrap_or(&[])
    }

    /// Yield the next codepoint of the multi-tap walk for `digit`.
    ///
    /// Starts at the head of the group when `cursor` is `None`, belongs to another digit, or
    /// has run off the end of the group (wrapping within the group only). Returns the
    /// codepoint and the advanced cursor, or `None` when the group is empty.
    pub fn tap(&self, cursor: Option<TapCursor>, digit: u8) -> Option<(char, TapCursor)> {
        let group = self.group(digit);
        let offset = match cursor {
            Some(c) if c.digit == digit && c.offset < group.len() => c.offset,
            _ => 0,
        };

        group.get(offset).map(|&c| {
            (
                c,
                TapCursor {
                    digit,
                    offset: offset + 1,
                },
            )
        })
    }
}
