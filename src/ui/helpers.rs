//! Shared rendering utilities.
//!
//! Cursor positioning and match highlighting print ANSI sequences directly;
//! [`format_count`] and [`truncate`] are pure string helpers also used while
//! computing view models.

use crate::ui::theme::Theme;

/// Width of one right-aligned count column, separator included.
pub const NUMBER_COLUMN_WIDTH: usize = 12;

/// Narrowest a name column ever gets.
const MIN_NAME_WIDTH: usize = 12;

/// Width of the name column of the country list; the slug takes the rest.
#[must_use]
pub fn country_name_width(cols: usize) -> usize {
    (cols / 2).max(MIN_NAME_WIDTH)
}

/// Width of the country column of a region tab, next to six count columns.
#[must_use]
pub fn summary_name_width(cols: usize) -> usize {
    cols.saturating_sub(6 * NUMBER_COLUMN_WIDTH).max(MIN_NAME_WIDTH)
}

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Formats a count with thousands separators.
///
/// # Examples
///
/// ```
/// use zcovid::ui::helpers::format_count;
///
/// assert_eq!(format_count(1_234_567), "1,234,567");
/// assert_eq!(format_count(-1200), "-1,200");
/// assert_eq!(format_count(12), "12");
/// ```
#[must_use]
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Shortens `text` to at most `max` characters, ending with `...` when cut.
///
/// # Examples
///
/// ```
/// use zcovid::ui::helpers::truncate;
///
/// assert_eq!(truncate("Saint Vincent and Grenadines", 12), "Saint Vin...");
/// assert_eq!(truncate("Chad", 12), "Chad");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Prints `text` left-aligned in a field of `width` characters.
pub fn print_padded(text: &str, width: usize) {
    let len = text.chars().count();
    print!("{text}{}", " ".repeat(width.saturating_sub(len)));
}

/// Renders text with highlighted character ranges for search matches.
///
/// Ranges are `(start, end)` character indices with an exclusive end. When
/// the row is selected the selection colors win and no highlight is drawn.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
