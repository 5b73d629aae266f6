//! Region tab renderers: the tab strip and the per-country summary table.

use crate::ui::helpers::{self, position_cursor, summary_name_width, NUMBER_COLUMN_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SummaryRow, TabsInfo};

const COLUMNS: [&str; 6] = [
    "NEW CASES",
    "CONFIRMED",
    "NEW DEATHS",
    "DEATHS",
    "NEW RECOV.",
    "RECOVERED",
];

/// Renders the region tabs on one line; the active tab is inverted.
pub fn render_tabs(row: usize, tabs: &TabsInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let mut used = 0;
    for (idx, label) in tabs.labels.iter().enumerate() {
        let cell = format!(" {label} ");
        if idx == tabs.active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.tab_active_fg));
            print!("{}", Theme::bg(&theme.colors.tab_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{cell}");
        print!("{}", Theme::reset());
        print!(" ");
        used += cell.chars().count() + 1;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}

/// Renders the summary column headers and returns the next free row.
pub fn render_summary_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    helpers::print_padded("COUNTRY", summary_name_width(cols));
    for column in COLUMNS {
        print!("{column:>width$}", width = NUMBER_COLUMN_WIDTH);
    }
    print!("{}", Theme::reset());
    row + 1
}

/// Renders summary rows starting at `row` and returns the next free row.
pub fn render_summary_rows(row: usize, items: &[SummaryRow], theme: &Theme, cols: usize) -> usize {
    let name_width = summary_name_width(cols);
    let mut current_row = row;

    for item in items {
        position_cursor(current_row, 1);
        let value_color = if item.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
            &theme.colors.selection_fg
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            &theme.colors.stat_value_fg
        };

        helpers::print_padded(&item.country, name_width);
        print!("{}", Theme::fg(value_color));
        for value in [
            &item.new_confirmed,
            &item.total_confirmed,
            &item.new_deaths,
            &item.total_deaths,
            &item.new_recovered,
            &item.total_recovered,
        ] {
            print!("{value:>width$}", width = NUMBER_COLUMN_WIDTH);
        }

        let line_len = name_width + 6 * NUMBER_COLUMN_WIDTH;
        print!("{}", " ".repeat(cols.saturating_sub(line_len)));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}
