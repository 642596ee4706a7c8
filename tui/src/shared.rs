//! Layout helpers shared by the page, shell and overlay renderers.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use hyperlink_engine::truncate_with_ellipsis;
use hyperlink_engine::ui::ScrollState;

fn wrapped_rows_for_line(line: &Line, width: u16) -> usize {
    Paragraph::new(line.clone())
        .wrap(Wrap { trim: false })
        .line_count(width.max(1))
}

/// Rows each line occupies once wrapped to `width`.
pub(crate) fn wrapped_line_rows(lines: &[Line], width: u16) -> Vec<usize> {
    let width = width.max(1);
    lines
        .iter()
        .map(|line| wrapped_rows_for_line(line, width))
        .collect()
}

/// Record the scrollable range of `lines` in `area` and, when `anchor` is
/// given, scroll just far enough that the anchor line is on screen.
pub(crate) fn update_scroll(
    scroll: &mut ScrollState,
    lines: &[Line],
    area: Rect,
    anchor: Option<usize>,
) -> u16 {
    let rows = wrapped_line_rows(lines, area.width);
    let total: usize = rows.iter().sum();
    let visible = usize::from(area.height);
    let max = u16::try_from(total.saturating_sub(visible)).unwrap_or(u16::MAX);
    scroll.set_max(max);

    if let Some(anchor) = anchor {
        let top: usize = rows.iter().take(anchor).sum();
        let height = rows.get(anchor).copied().unwrap_or(1);
        let offset = usize::from(scroll.offset());
        if top < offset {
            scroll.scroll_up(u16::try_from(offset - top).unwrap_or(u16::MAX));
        } else if top + height > offset + visible {
            let down = (top + height).saturating_sub(offset + visible);
            scroll.scroll_down(u16::try_from(down).unwrap_or(u16::MAX));
        }
    }
    scroll.offset()
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// `text` truncated or right-padded to exactly `width` columns.
pub(crate) fn fit_cell(text: &str, width: usize) -> String {
    let mut cell = if text.width() > width {
        truncate_with_ellipsis(text, width)
    } else {
        text.to_string()
    };
    while cell.width() > width {
        cell.pop();
    }
    let pad = width.saturating_sub(cell.width());
    cell.push_str(&" ".repeat(pad));
    cell
}
