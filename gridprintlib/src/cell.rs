//! Single cell formatting: truncate, pad, colorize.

use console::Color;

use crate::measure::{truncate_to_visual_length, visual_length};
use crate::style::Colorize;

const ELLIPSIS: &str = "...";

/// Which side of the cell the content sticks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justification {
    /// Padding after the content (column names).
    Left,
    /// Padding before the content (data rows).
    Right,
}

/// Render `content` into a cell exactly `width` columns wide, plus one space
/// of margin on each side.
///
/// Content wider than `width` is cut to `width - 3` columns and followed by
/// `"..."`. Callers must pass `width >= 3` whenever truncation can happen;
/// table widths guarantee this because limited columns are at least 4 wide
/// and unlimited columns are as wide as their widest cell.
pub fn render_cell(
    content: &str,
    width: usize,
    justification: Justification,
    color: Color,
    colorizer: &dyn Colorize,
) -> String {
    let mut content_len = visual_length(content);

    let truncated = if content_len > width {
        debug_assert!(width >= ELLIPSIS.len(), "cell width {} too narrow", width);
        let kept = truncate_to_visual_length(content, width.saturating_sub(ELLIPSIS.len()));
        let truncated = format!("{}{}", kept, ELLIPSIS);
        content_len = visual_length(&truncated);
        truncated
    } else {
        content.to_string()
    };

    let padding = " ".repeat(width.saturating_sub(content_len));

    let cell = match justification {
        Justification::Left => format!(" {}{} ", truncated, padding),
        Justification::Right => format!(" {}{} ", padding, truncated),
    };
    colorizer.colorize(&cell, color)
}
