//! Country list table renderer.
//!
//! Two columns, NAME and SLUG. The slug column carries the search match
//! highlight because the search filters on slugs.

use crate::ui::helpers::{self, country_name_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CountryRow;

/// Renders the column headers at `row` and returns the next free row.
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    helpers::print_padded("NAME", country_name_width(cols));
    print!("SLUG");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows starting at `row` and returns the next free row.
pub fn render_table_rows(row: usize, items: &[CountryRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one country row.
///
/// The selected row gets the selection colors across the full width; match
/// highlights are suppressed on it.
fn render_table_row(row: usize, item: &CountryRow, theme: &Theme, cols: usize) -> usize {
    let name_width = country_name_width(cols);
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    helpers::print_padded(&item.name, name_width);

    helpers::render_highlighted_text(&item.slug, &item.highlight_ranges, theme, item.is_selected);

    let line_len = name_width + item.slug.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
