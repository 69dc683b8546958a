//! Movie detail view renderer.

use crate::ui::helpers::{position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailsInfo, DetailsView};

/// Left margin of the detail view.
const MARGIN: &str = "  ";

/// Renders the detail route body starting at `row`, never drawing past `last_row`.
pub fn render_details(row: usize, details: &DetailsView, theme: &Theme, cols: usize, last_row: usize) {
    match details {
        DetailsView::Loading => {
            position_cursor(row + 1, 1);
            print!("{}{MARGIN}Loading…{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
        }
        DetailsView::Failed(message) => {
            position_cursor(row + 1, 1);
            print!("{}{MARGIN}{message}{}", Theme::fg(&theme.colors.error_fg), Theme::reset());
        }
        DetailsView::Loaded(info) => render_loaded(row, info, theme, cols, last_row),
    }
}

fn render_loaded(row: usize, info: &DetailsInfo, theme: &Theme, cols: usize, last_row: usize) {
    let width = cols.saturating_sub(MARGIN.len() * 2);
    let mut current_row = row + 1;
    let mut line = |text: &str, style: String| {
        if current_row > last_row {
            return;
        }
        position_cursor(current_row, 1);
        print!("{style}{MARGIN}{}{}", truncate_chars(text, width), Theme::reset());
        current_row += 1;
    };

    line(&info.title, format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg)));
    if let Some(tagline) = &info.tagline {
        line(tagline, format!("{}{}", Theme::italic(), Theme::fg(&theme.colors.text_dim)));
    }
    line(&info.meta, Theme::fg(&theme.colors.accent_fg));
    line("", String::new());

    for overview_line in &info.overview {
        line(overview_line, Theme::fg(&theme.colors.text_normal));
    }

    if !info.genres.is_empty() {
        line("", String::new());
        let chips: Vec<String> = info.genres.iter().map(|genre| format!("[{genre}]")).collect();
        line(&chips.join(" "), Theme::fg(&theme.colors.search_bar_border));
    }

    line("", String::new());
    line(&format!("Poster: {}", info.poster_url), Theme::fg(&theme.colors.text_dim));
}
