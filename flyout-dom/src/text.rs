use unicode_width::UnicodeWidthStr;

/// Width of `s` in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Widest line among `lines`, in terminal columns.
pub fn max_display_width<'a>(lines: impl IntoIterator<Item = &'a str>) -> usize {
    lines.into_iter().map(display_width).max().unwrap_or(0)
}
