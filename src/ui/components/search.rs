//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame, the raw
//! search text, a cursor while the box has focus and a pending marker while
//! the debounce timer is running.

use crate::ui::helpers::{position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Placeholder shown in an empty, unfocused box.
const PLACEHOLDER: &str = "Search through thousands of movies";

/// Renders the search input box at the specified row.
///
/// # Returns
///
/// The next available row position (row + 3, since search box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌───────────────────────┐ [margin]
/// [margin] │ Search: batman▏     … │ [margin]
/// [margin] └───────────────────────┘ [margin]
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border_color = if search.is_focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let pending_marker = if search.is_pending { " … " } else { "" };
    let text_room = inner_width.saturating_sub(pending_marker.chars().count() + 1);

    let (search_text, text_color) = if search.query.is_empty() && !search.is_focused {
        (format!(" {PLACEHOLDER}"), &theme.colors.text_dim)
    } else {
        let cursor = if search.is_focused { "▏" } else { "" };
        (format!(" Search: {}{cursor}", search.query), &theme.colors.text_normal)
    };
    let search_text = truncate_chars(&search_text, text_room);
    let padding = inner_width.saturating_sub(search_text.chars().count() + pending_marker.chars().count());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::fg(text_color));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{pending_marker}");
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
