//! Statistic sections renderer for the global and country detail screens.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatSection;

const INDENT: usize = 4;

/// Renders each section as a bold title followed by aligned `label  value`
/// lines, with a blank row between sections.
pub fn render_stat_sections(row: usize, sections: &[StatSection], theme: &Theme) -> usize {
    let label_width = sections
        .iter()
        .flat_map(|section| &section.lines)
        .map(|line| line.label.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    let mut current_row = row + 1;
    for section in sections {
        position_cursor(current_row, INDENT / 2);
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.header_fg));
        print!("{}", section.title);
        print!("{}", Theme::reset());
        current_row += 1;

        for line in &section.lines {
            position_cursor(current_row, INDENT);
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{:<label_width$}", line.label);
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.stat_value_fg));
            print!("{}", line.value);
            print!("{}", Theme::reset());
            current_row += 1;
        }

        current_row += 1;
    }

    current_row
}
