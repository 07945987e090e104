//! Text helpers shared by the renderers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max_width` columns, ending with `...` when cut.
///
/// Cuts on character boundaries, never inside a UTF-8 code point.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    // Build up string until we hit the width limit (accounting for "..." = 3 width)
    let target_width = max_width.saturating_sub(3);
    let mut current_width = 0;
    let mut last_idx = 0;

    for (idx, ch) in text.char_indices() {
        let char_width = ch.width().unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        current_width += char_width;
        last_idx = idx + ch.len_utf8();
    }

    format!("{}...", &text[..last_idx])
}

/// `"1 file"`, `"3 files"`.
pub fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
