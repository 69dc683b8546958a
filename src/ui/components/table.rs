//! Table component renderer.
//!
//! Renders the movie list as a four-column table (TITLE, YEAR, RATING, LANG)
//! with selection and fuzzy match highlighting.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders the table column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, title_width: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{:<title_width$}{:<6}{:<8}{:<6}", " TITLE", "YEAR", "RATING", "LANG");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_table_rows(row: usize, items: &[DisplayItem], title_width: usize, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, title_width, theme, cols);
    }
    current_row
}

/// Renders a single table row.
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Fuzzy match highlights (unless selected)
/// 3. Normal text color
///
/// The row is padded to fill the entire terminal width so the selection
/// background spans the line.
fn render_table_row(row: usize, item: &DisplayItem, title_width: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!(" ");
    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);

    let title_len = item.title.chars().count() + 1;
    print!("{}", " ".repeat(title_width.saturating_sub(title_len)));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{:<6}", item.year);
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.accent_fg));
    }
    print!("{:<8}", format!("★ {}", item.rating));
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{:<6}", item.language);

    let line_len = title_width.max(title_len) + 20;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
