//! Shared rendering utilities.
//!
//! Low-level text helpers used across UI components: centering and
//! character-safe truncation. Everything here operates on character counts,
//! not byte indices, so multi-byte text never splits mid-character.

/// Computes the left padding that centers `text` within `cols` columns.
///
/// When the width cannot divide evenly, the left side gets the smaller half.
#[must_use]
pub fn centered_padding(text: &str, cols: usize) -> usize {
    let text_len = text.chars().count().min(cols);
    cols.saturating_sub(text_len) / 2
}

/// Truncates `text` to at most `max` characters, appending "..." when cut.
///
/// Returns the input unchanged when it already fits.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max {
        return text.to_string();
    }

    let keep = max.saturating_sub(3);
    let mut out: String = chars[..keep].iter().collect();
    out.push_str("...");
    out
}

/// Pads `text` on the right to `width` characters.
///
/// Text longer than `width` is returned as-is; callers truncate first when a
/// hard column boundary matters.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{text}{}", " ".repeat(width - len))
}
