//! Width-aware text helpers.
//!
//! Widths are terminal columns, not bytes or chars: ANSI escapes count as
//! zero and wide characters (CJK, most emoji) count as two.

use console::{measure_text_width, pad_str, Alignment};
use unicode_width::UnicodeWidthChar;

/// Display width of `s`, ignoring ANSI escape codes.
///
/// ```
/// use atlas_render::text::display_width;
///
/// assert_eq!(display_width("Chile"), 5);
/// assert_eq!(display_width("\x1b[1mChile\x1b[0m"), 5);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Truncates `s` from the end so it fits in `max_width`, appending
/// `ellipsis` when anything was cut.
///
/// Expects plain text; style tags and ANSI codes are applied after layout.
///
/// ```
/// use atlas_render::text::truncate_end;
///
/// assert_eq!(truncate_end("South Georgia", 8, "…"), "South G…");
/// assert_eq!(truncate_end("Peru", 8, "…"), "Peru");
/// ```
pub fn truncate_end(s: &str, max_width: usize, ellipsis: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let ellipsis_width = display_width(ellipsis);
    if max_width <= ellipsis_width {
        return take_width(ellipsis, max_width).to_string();
    }

    let mut out = take_width(s, max_width - ellipsis_width).to_string();
    out.push_str(ellipsis);
    out
}

/// Longest prefix of `s` that fits in `width` columns.
fn take_width(s: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in s.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            return &s[..idx];
        }
        used += w;
    }
    s
}

/// Pads on the right (left-aligns). Never truncates.
///
/// ```
/// use atlas_render::text::pad_right;
///
/// assert_eq!(pad_right("AD", 4), "AD  ");
/// assert_eq!(pad_right("Andorra", 3), "Andorra");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}
