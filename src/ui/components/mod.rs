//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at a given row and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box
//! - [`trending`]: Trending search terms strip
//! - [`table`]: Movie list (TITLE, YEAR, RATING, LANG)
//! - [`details`]: Movie detail view
//! - [`empty`]: Empty state message
//!
//! # Layout Modes
//!
//! - [`render_list_view`]: Header + Search + Trending + Table + Status + Footer
//! - [`render_details_view`]: Header + Details + Footer

mod details;
mod empty;
mod footer;
mod header;
mod search;
mod table;
mod trending;

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailsView, ListStatus, ListView, UIViewModel};

use details::render_details;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};
use trending::render_trending;

/// Message shown when every page has been loaded.
pub const END_OF_LIST: &str = "You have reached the end of the list.";

/// Renders a horizontal border line at the specified row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
    row + 1
}

/// Renders a single centered status line.
fn render_status_line(row: usize, text: &str, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(color), center(text, cols), Theme::reset());
    row + 1
}

/// Renders the list route.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Trending - 2 lines, when non-empty]
/// [Error banner - 1 line, when set]
/// [Table Headers]
/// [Table Rows]
/// [Status line]
/// [Border]
/// [Footer]
/// ```
pub fn render_list_view(vm: &UIViewModel, list: &ListView, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    if !list.trending.is_empty() {
        current_row = render_trending(current_row, &list.trending, theme, cols);
    }
    if let Some(error) = &list.error {
        current_row = render_status_line(current_row, error, &theme.colors.error_fg, cols);
    }

    current_row = render_table_headers(current_row, list.title_width, theme);
    current_row = if let Some(empty) = &list.empty_state {
        render_empty_state(current_row, empty, theme, cols)
    } else {
        render_table_rows(current_row, &list.items, list.title_width, theme, cols)
    };

    match list.status {
        ListStatus::Loading => {
            render_status_line(current_row, "Loading…", &theme.colors.accent_fg, cols);
        }
        ListStatus::LoadingMore => {
            render_status_line(current_row, "Loading more…", &theme.colors.accent_fg, cols);
        }
        ListStatus::EndOfList => {
            render_status_line(current_row, END_OF_LIST, &theme.colors.text_dim, cols);
        }
        ListStatus::Idle => {}
    }

    let footer_row = rows.max(1);
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Renders the details route.
pub fn render_details_view(vm: &UIViewModel, details: &DetailsView, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let footer_row = rows.max(1);
    render_details(current_row, details, theme, cols, footer_row.saturating_sub(2));

    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
