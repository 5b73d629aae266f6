//! Header component renderer.
//!
//! Renders the centered, bold title bar. An optional subtitle follows the
//! title in dimmed text.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at `row` and returns the next free row.
///
/// # Layout
///
/// ```text
/// [padding] TITLE  subtitle [padding]
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let subtitle = header
        .subtitle
        .as_ref()
        .map(|s| format!(" {s} "))
        .unwrap_or_default();
    let text_len = header.title.chars().count() + subtitle.chars().count();
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", Theme::reset());

    if !subtitle.is_empty() {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{subtitle}");
        print!("{}", Theme::reset());
    }

    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    row + 1
}
