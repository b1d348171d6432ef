//! Terminal display width helpers.
//!
//! Floor-plan legends may carry ANSI color codes; padding has to be computed
//! on the visible text only.

/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    unicode_width::UnicodeWidthStr::width(&*clean_str)
}

/// Right-pad `text` with spaces up to `width` visible columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let visible = display_width(text);
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(visible)));
    padded
}
