//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at a given row and returns the
//! next free row, so [`render_layout`] can stack them top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title bar with optional subtitle
//! - [`regions`]: Region tab strip and per-country summary table
//! - [`search`]: Search input box
//! - [`table`]: Country list (NAME, SLUG)
//! - [`stats`]: Labelled statistic sections
//! - [`empty`]: Loading, error and no-data messages
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Region tabs]        regional statistics only
//! [Border]
//! [Search bar]         while searching only
//! [Body]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod regions;
mod search;
mod stats;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use regions::{render_summary_headers, render_summary_rows, render_tabs};
use search::render_search_bar;
use stats::render_stat_sections;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row` and returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a complete frame.
///
/// The footer and its border are pinned to the last two rows regardless of
/// how much the body used.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    if let Some(tabs) = &vm.tabs {
        current_row = render_tabs(current_row, tabs, theme, cols);
    }
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    match &vm.body {
        Body::Countries(items) => {
            current_row = render_table_headers(current_row, theme, cols);
            render_table_rows(current_row, items, theme, cols);
        }
        Body::Regions(items) => {
            current_row = render_summary_headers(current_row, theme, cols);
            render_summary_rows(current_row, items, theme, cols);
        }
        Body::Stats(sections) => {
            render_stat_sections(current_row, sections, theme);
        }
        Body::Empty(empty) => {
            render_empty_state(current_row, empty, theme, cols);
        }
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
