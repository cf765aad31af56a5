//! Horizontal scrolling of the visible window.
//!
//! A field may be wider than the display area. The window keeps the cursor visible while
//! moving as little as possible: it is pulled left when the cursor moves in front of it and
//! slid right only as far as needed for the cursor to fit.

/// Recompute the visible window `[offset, end)` for the cursor.
///
/// `width` is the display width available for codepoints (markers already deducted) and
/// `glyph` measures one codepoint. Updates `offset` in place and returns `end`.
pub fn scroll(
    chars: &[char],
    cursor: usize,
    offset: &mut usize,
    width: usize,
    glyph: impl Fn(char) -> usize,
) -> usize {
    if cursor < *offset {
        *offset = cursor;
    }

    let start = *offset;
    let mut used = 0usize;
    let mut end = chars.len();
    for (i, &c) in chars.iter().enumerate().skip(start) {
        used += glyph(c);
        if used <= width {
            continue;
        }
        if cursor >= i {
            // slide right until the cursor fits
            loop {
                let dropped = chars.get(*offset).map_or(0, |&c| glyph(c));
                used = used.saturating_sub(dropped);
                *offset += 1;
                if used <= width || *offset >= cursor {
                    break;
                }
            }
            end = cursor + 1;
        } else {
            end = i;
            break;
        }
    }
    end
}
