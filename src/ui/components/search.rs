//! Search bar component renderer.

use crate::ui::helpers::{position_cursor, print_padded, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Columns left blank on each side of the box.
const SEARCH_BOX_MARGIN: usize = 5;

const LABEL: &str = " Slug: ";

/// Renders the 3-line search box at `row` and returns the next free row.
///
/// ```text
///      ┌──────────────────┐
///      │ Slug: aus_       │
///      └──────────────────┘
/// ```
///
/// The trailing `_` cursor is only drawn while the query has focus. A query
/// wider than the box is cut from the left so the end stays visible.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + 2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    let edge = |row: usize, left: char, right: char| {
        position_cursor(row, SEARCH_BOX_MARGIN + 1);
        print!("{border}{left}{}{right}{}", "─".repeat(inner_width), Theme::reset());
    };

    edge(row, '┌', '┐');

    let cursor = if search.is_typing { "_" } else { "" };
    let room = inner_width.saturating_sub(LABEL.len() + cursor.len());
    let query = visible_tail(&search.query, room);

    position_cursor(row + 1, SEARCH_BOX_MARGIN + 1);
    print!("{border}│{}", Theme::fg(&theme.colors.text_normal));
    print_padded(&truncate(&format!("{LABEL}{query}{cursor}"), inner_width), inner_width);
    print!("{border}│{}", Theme::reset());

    edge(row + 2, '└', '┘');

    row + 3
}

/// The last `max` characters of `text`.
fn visible_tail(text: &str, max: usize) -> String {
    let len = text.chars().count();
    text.chars().skip(len.saturating_sub(max)).collect()
}
