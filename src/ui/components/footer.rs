//! Keybinding hint bar.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the dimmed hints on one line; they are cut rather than wrapped.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!(
        "{}{}{}",
        Theme::fg(&theme.colors.text_dim),
        center(&footer.keybindings, cols),
        Theme::reset()
    );
    row + 1
}
