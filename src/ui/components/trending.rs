//! Trending strip renderer.

use crate::ui::helpers::{position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TrendingItem;

/// Renders the "Trending movies" title and one line of ranked search terms.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_trending(row: usize, items: &[TrendingItem], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(" Trending movies");
    print!("{}", Theme::reset());

    let mut line = String::new();
    for item in items {
        line.push_str(&format!("  {}. {}", item.rank, item.label));
    }
    let line = truncate_chars(&line, cols);

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{line}");
    print!("{}", " ".repeat(cols.saturating_sub(line.chars().count())));
    print!("{}", Theme::reset());

    row + 2
}
