//! Placeholder shown in place of the list rows.
//!
//! Used before web access is granted, after it is denied, and when a search
//! has no results.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message and its dimmed subtitle below one blank line.
///
/// Returns `row + 3`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    position_cursor(row + 1, 1);
    print!(
        "{}{}{}",
        Theme::fg(&theme.colors.empty_state_fg),
        center(&empty.message, cols),
        Theme::reset()
    );

    position_cursor(row + 2, 1);
    print!(
        "{}{}{}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        center(&empty.subtitle, cols),
        Theme::reset()
    );

    row + 3
}
