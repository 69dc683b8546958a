//! Title bar.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the bold, centered title across the full width and returns the next row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let background = theme.colors.header_bg.as_deref().map(Theme::bg).unwrap_or_default();

    position_cursor(row, 1);
    print!(
        "{}{}{background}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        center(&header.title, cols),
        Theme::reset()
    );
    row + 1
}
