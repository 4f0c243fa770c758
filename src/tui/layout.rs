//! Terminal row/column layout helpers for the picker surface.

use std::ops::Range;

use crossterm::terminal;

/// Read terminal width or fallback to 80 columns.
pub(crate) fn terminal_columns() -> usize {
    terminal::size()
        .ok()
        .map(|(cols, _)| cols as usize)
        .filter(|cols| *cols > 0)
        .unwrap_or(80)
}

/// Compute wrapped rows consumed by a one-line string.
pub(crate) fn wrapped_rows(text: &str, cols: usize) -> usize {
    let cols = cols.max(1);
    let width = text.chars().count();
    if width == 0 {
        1
    } else {
        width.div_ceil(cols)
    }
}

/// Visible slice of a list of `len` options that keeps `selected` on screen.
///
/// The window scrolls only as far as needed: it starts at zero until the
/// selection passes the last visible row, then trails the selection.
pub(crate) fn page_window(selected: usize, len: usize, page_size: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    if len <= page_size {
        return 0..len;
    }
    let selected = selected.min(len - 1);
    let start = (selected + 1).saturating_sub(page_size);
    start..start + page_size
}
