//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin.
//! It owns every controller (debouncer, paginator, search-count recorder), the
//! trending and detail data, and the transient UI state (route, input mode,
//! selection, scroll position). It is the single source of truth for rendering.
//!
//! # State Components
//!
//! - **Search text**: Raw text in the search box, committed through the debouncer
//! - **Paginator**: Committed query, page counter and accumulated results
//! - **Trending**: Top search terms, loaded once
//! - **Details**: The detail view's load state
//! - **Selection / scroll**: Cursor row and first visible row of the list
//!
//! # View Model Computation
//!
//! The `compute_viewmodel` method transforms state into a renderable UI
//! representation, handling windowing, fuzzy match highlighting, and the
//! list status lines.
//!
//! # Example
//!
//! ```rust
//! use reelscout::{initialize, Config};
//!
//! let state = initialize(&Config::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.search_bar.is_some());
//! ```

use super::debounce::Debouncer;
use super::modes::{InputMode, Route};
use super::pagination::{Paginator, ScrollMetrics};
use super::recorder::SearchCountRecorder;
use crate::api::tmdb::MovieApi;
use crate::domain::movie::{rating_label, MovieDetails, MovieSummary};
use crate::domain::TrendingEntry;
use crate::ui::helpers::{truncate_chars, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailsInfo, DetailsView, DisplayItem, EmptyState, FooterInfo, HeaderInfo, ListStatus, ListView,
    SearchBarInfo, TrendingItem, UIViewModel, ViewBody,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use std::time::Duration;

/// Message shown when a movie's details fail to load.
pub const DETAILS_ERROR: &str = "Unable to load movie details.";

/// Rows taken by the list route around the rows themselves: blank line,
/// header, border, search box (3), column headers, status line, border, footer.
const LIST_CHROME_ROWS: usize = 10;

/// Rows taken by the trending strip when shown.
const TRENDING_ROWS: usize = 2;

/// Width of the YEAR, RATING and LANG columns together, separators included.
const FIXED_COLUMNS_WIDTH: usize = 22;

/// Host permission state for web requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebAccess {
    Pending,
    Granted,
    Denied,
}

/// Load state of the detail view.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Idle,
    Loading { token: u64, movie_id: u64 },
    Loaded(MovieDetails),
    Failed,
}

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Request builder for the movie-metadata API.
    pub movie_api: MovieApi,

    /// Read-then-write recorder for search counts.
    pub recorder: SearchCountRecorder,

    /// Turns keystrokes into committed queries.
    pub debouncer: Debouncer,

    /// Raw text in the search box.
    pub search_query: String,

    /// Committed query, page counter and results.
    pub paginator: Paginator,

    /// Trending entries, highest count first.
    pub trending: Vec<TrendingEntry>,

    /// Whether the trending request has been sent.
    pub trending_requested: bool,

    /// Detail view load state.
    pub details: DetailState,

    /// Token of the last detail request issued.
    pub details_token: u64,

    /// Current view.
    pub route: Route,

    /// Current input handling mode of the list.
    pub input_mode: InputMode,

    /// Whether the host allowed web requests.
    pub web_access: WebAccess,

    /// Zero-based index of the selected movie.
    pub selected_index: usize,

    /// First visible list row.
    pub scroll_offset: usize,

    /// Number of list rows that fit on screen. Updated before every render.
    pub viewport_rows: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a state on the list route with nothing loaded.
    #[must_use]
    pub fn new(movie_api: MovieApi, recorder: SearchCountRecorder, quiet_period: Duration, theme: Theme) -> Self {
        Self {
            movie_api,
            recorder,
            debouncer: Debouncer::new(quiet_period),
            search_query: String::new(),
            paginator: Paginator::new(),
            trending: Vec::new(),
            trending_requested: false,
            details: DetailState::Idle,
            details_token: 0,
            route: Route::List,
            input_mode: InputMode::Normal,
            web_access: WebAccess::Pending,
            selected_index: 0,
            scroll_offset: 0,
            viewport_rows: 10,
            theme,
        }
    }

    /// Returns the currently selected movie, if any.
    #[must_use]
    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.paginator.results().get(self.selected_index)
    }

    fn result_count(&self) -> usize {
        self.paginator.results().len()
    }

    /// Moves selection down by one row, stopping at the last movie.
    pub fn move_selection_down(&mut self) {
        self.move_selection_by(1);
    }

    /// Moves selection up by one row, stopping at the first movie.
    pub fn move_selection_up(&mut self) {
        self.move_selection_by(-1);
    }

    /// Moves selection down by one screen.
    pub fn page_down(&mut self) {
        self.move_selection_by(isize::try_from(self.viewport_rows.max(1)).unwrap_or(isize::MAX));
    }

    /// Moves selection up by one screen.
    pub fn page_up(&mut self) {
        self.move_selection_by(-isize::try_from(self.viewport_rows.max(1)).unwrap_or(isize::MAX));
    }

    fn move_selection_by(&mut self, delta: isize) {
        let count = self.result_count();
        if count == 0 {
            return;
        }
        self.selected_index = self.selected_index.saturating_add_signed(delta).min(count - 1);
        self.ensure_selection_visible();
    }

    /// Scrolls the list by `lines` rows (mouse wheel), dragging the selection
    /// along so it stays on screen.
    pub fn scroll_by(&mut self, lines: isize) {
        let count = self.result_count();
        if count == 0 {
            return;
        }
        let max_offset = count.saturating_sub(self.viewport_rows);
        self.scroll_offset = self.scroll_offset.saturating_add_signed(lines).min(max_offset);

        let last_visible = (self.scroll_offset + self.viewport_rows).min(count).saturating_sub(1);
        self.selected_index = self.selected_index.clamp(self.scroll_offset, last_visible);
    }

    /// Adjusts the scroll offset so the selected row is visible.
    pub fn ensure_selection_visible(&mut self) {
        let viewport = self.viewport_rows.max(1);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + viewport {
            self.scroll_offset = self.selected_index + 1 - viewport;
        }
    }

    /// Moves selection and scroll back to the top of the list.
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// Current scroll position in rows.
    #[must_use]
    pub fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            offset: self.scroll_offset,
            viewport: self.viewport_rows.min(self.result_count()),
            content: self.result_count(),
        }
    }

    /// Records how many list rows fit on screen and keeps the selection visible.
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
        if self.route == Route::List {
            self.ensure_selection_visible();
        }
    }

    /// Number of list rows that fit in a terminal of `rows` lines.
    #[must_use]
    pub fn list_capacity(&self, rows: usize) -> usize {
        let mut chrome = LIST_CHROME_ROWS;
        if !self.trending.is_empty() {
            chrome += TRENDING_ROWS;
        }
        if self.paginator.error_message().is_some() {
            chrome += 1;
        }
        rows.saturating_sub(chrome).max(1)
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        match self.route {
            Route::List => UIViewModel {
                header: HeaderInfo {
                    title: format!(" All Movies ({}) ", self.result_count()),
                },
                footer: self.compute_footer(),
                search_bar: Some(self.compute_search_bar()),
                body: ViewBody::List(self.compute_list(rows, cols)),
            },
            Route::Details { .. } => UIViewModel {
                header: HeaderInfo {
                    title: " Movie Details ".to_string(),
                },
                footer: self.compute_footer(),
                search_bar: None,
                body: ViewBody::Details(self.compute_details(cols)),
            },
        }
    }

    fn compute_list(&self, rows: usize, cols: usize) -> ListView {
        let title_width = cols.saturating_sub(FIXED_COLUMNS_WIDTH).max(10);
        let results = self.paginator.results();
        let capacity = self.list_capacity(rows);

        let visible_start = self.scroll_offset.min(results.len());
        let visible_end = (visible_start + capacity).min(results.len());

        let matcher = if self.paginator.query().is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let items = results[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, movie)| {
                self.compute_display_item(movie, visible_start + relative_idx, title_width, matcher.as_ref())
            })
            .collect();

        let status = if self.paginator.is_loading() {
            if results.is_empty() {
                ListStatus::Loading
            } else if self.paginator.page() > 1 {
                ListStatus::LoadingMore
            } else {
                ListStatus::Idle
            }
        } else if self.paginator.reached_end() {
            ListStatus::EndOfList
        } else {
            ListStatus::Idle
        };

        ListView {
            trending: self
                .trending
                .iter()
                .enumerate()
                .map(|(index, entry)| TrendingItem {
                    rank: index + 1,
                    label: entry.search_term.clone(),
                })
                .collect(),
            error: self.paginator.error_message().map(str::to_string),
            items,
            status,
            empty_state: self.compute_empty_state(),
            title_width,
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.paginator.results().is_empty() || self.paginator.is_loading() {
            return None;
        }
        match self.web_access {
            WebAccess::Pending => Some(EmptyState {
                message: "Waiting for web access".to_string(),
                subtitle: "Grant the permission prompt to start browsing".to_string(),
            }),
            WebAccess::Denied => Some(EmptyState {
                message: "Web access was denied".to_string(),
                subtitle: "Reload the plugin and allow web requests".to_string(),
            }),
            WebAccess::Granted if self.paginator.error_message().is_some() => None,
            WebAccess::Granted => Some(EmptyState {
                message: "No movies found".to_string(),
                subtitle: "Try a different search".to_string(),
            }),
        }
    }

    /// Computes a display item for a single movie within the visible window.
    fn compute_display_item(
        &self,
        movie: &MovieSummary,
        absolute_idx: usize,
        title_width: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> DisplayItem {
        let title = truncate_chars(&movie.title, title_width.saturating_sub(2));
        let visible_chars = title.chars().count();

        let highlight_ranges = matcher.map_or_else(Vec::new, |m| {
            self.compute_highlight_ranges(&movie.title, m)
                .into_iter()
                .filter(|&(start, _)| start < visible_chars)
                .map(|(start, end)| (start, end.min(visible_chars)))
                .collect()
        });

        DisplayItem {
            title,
            year: movie.release_year().map(|y| y.to_string()).unwrap_or_default(),
            rating: rating_label(movie.vote_average),
            language: movie.original_language.clone().unwrap_or_default(),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    /// Computes character index ranges to highlight for fuzzy match visualization.
    ///
    /// Coalesces consecutive matched indices into `(start, end)` ranges with an
    /// exclusive end.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let Some((_score, indices)) = matcher.fuzzy_indices(text, self.paginator.query()) else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_details(&self, cols: usize) -> DetailsView {
        match &self.details {
            DetailState::Idle | DetailState::Loading { .. } => DetailsView::Loading,
            DetailState::Failed => DetailsView::Failed(DETAILS_ERROR.to_string()),
            DetailState::Loaded(details) => {
                let year = details.release_year().map(|y| y.to_string()).unwrap_or_default();
                let runtime = details.runtime.map_or_else(|| "N/A".to_string(), |r| r.to_string());
                DetailsView::Loaded(DetailsInfo {
                    title: details.title.clone(),
                    tagline: details.tagline.clone().filter(|t| !t.is_empty()),
                    meta: format!("★ {} • {year} • {runtime} min", rating_label(details.vote_average)),
                    overview: wrap_text(details.overview.as_deref().unwrap_or_default(), cols.saturating_sub(4)),
                    genres: details.genres.iter().map(|g| g.name.clone()).collect(),
                    poster_url: self.movie_api.poster_url(details.poster_path.as_deref()),
                })
            }
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.route, self.input_mode) {
            (Route::Details { .. }, _) => "Esc/h: back  q: quit",
            (Route::List, InputMode::Search) => "Type to search  Enter/Esc: done  ↑/↓ or Ctrl+n/p: navigate",
            (Route::List, InputMode::Normal) => {
                "j/k: navigate  PgDn/PgUp: page  /: search  Enter: details  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            query: self.search_query.clone(),
            is_focused: self.input_mode == InputMode::Search,
            is_pending: self.debouncer.is_pending(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::appwrite::{SearchCountStore, DEFAULT_ENDPOINT};
    use crate::api::http::HttpResponse;
    use crate::api::tmdb::{DEFAULT_BASE_URL, DEFAULT_IMAGE_BASE_URL};

    fn state_with_results(count: u64) -> AppState {
        let mut state = AppState::new(
            MovieApi::new(DEFAULT_BASE_URL, DEFAULT_IMAGE_BASE_URL, "t"),
            SearchCountRecorder::new(SearchCountStore::new(DEFAULT_ENDPOINT, "p", "d", "c", None)),
            Duration::from_millis(1000),
            Theme::default(),
        );
        let results: Vec<serde_json::Value> = (1..=count)
            .map(|id| serde_json::json!({"id": id, "title": format!("Movie {id}")}))
            .collect();
        let body = serde_json::json!({"results": results, "total_pages": 3}).to_string();
        let (token, _) = state.paginator.next_request().unwrap();
        state.paginator.apply_response(token, &HttpResponse::new(200, body.into_bytes()));
        state.web_access = WebAccess::Granted;
        state
    }

    #[test]
    fn selection_clamps_at_both_ends() {
        let mut state = state_with_results(3);
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
        state.move_selection_down();
        state.move_selection_down();
        state.move_selection_down();
        assert_eq!(state.selected_index, 2);
    }

    #[test]
    fn moving_past_viewport_scrolls() {
        let mut state = state_with_results(20);
        state.set_viewport_rows(5);
        for _ in 0..7 {
            state.move_selection_down();
        }
        assert_eq!(state.selected_index, 7);
        assert_eq!(state.scroll_offset, 3);
        assert_eq!(state.scroll_metrics().offset + state.scroll_metrics().viewport, 8);
    }

    #[test]
    fn mouse_scroll_drags_selection_and_stops_at_end() {
        let mut state = state_with_results(20);
        state.set_viewport_rows(5);
        state.scroll_by(6);
        assert_eq!(state.scroll_offset, 6);
        assert_eq!(state.selected_index, 6);
        state.scroll_by(100);
        assert_eq!(state.scroll_offset, 15);
        state.scroll_by(-100);
        assert_eq!(state.scroll_offset, 0);
        assert_eq!(state.selected_index, 4);
    }

    #[test]
    fn list_capacity_accounts_for_banner_and_trending() {
        let mut state = state_with_results(1);
        assert_eq!(state.list_capacity(30), 20);
        state.trending.push(TrendingEntry {
            document_id: "a".to_string(),
            search_term: "dune".to_string(),
            movie_id: None,
            poster_url: None,
            count: 1,
        });
        assert_eq!(state.list_capacity(30), 18);
        assert_eq!(state.list_capacity(3), 1);
    }

    #[test]
    fn list_viewmodel_windows_from_scroll_offset() {
        let mut state = state_with_results(20);
        state.set_viewport_rows(state.list_capacity(15));
        state.scroll_by(4);
        let vm = state.compute_viewmodel(15, 80);
        let ViewBody::List(list) = vm.body else {
            panic!("expected list body");
        };
        assert_eq!(list.items.len(), 5);
        assert_eq!(list.items[0].title, "Movie 5");
        assert!(list.items[0].is_selected);
        assert_eq!(list.status, ListStatus::Idle);
    }

    #[test]
    fn highlight_ranges_are_coalesced() {
        let mut state = state_with_results(0);
        state.paginator.commit("bat");
        let matcher = SkimMatcherV2::default();
        assert_eq!(state.compute_highlight_ranges("Batman", &matcher), vec![(0, 3)]);
    }

    #[test]
    fn details_viewmodel_formats_meta_line() {
        let mut state = state_with_results(1);
        state.route = Route::Details { movie_id: 155 };
        state.details = DetailState::Loaded(
            serde_json::from_str(
                r#"{"id": 155, "title": "The Dark Knight", "vote_average": 8.52,
                    "release_date": "2008-07-16", "runtime": 152, "tagline": "Why So Serious?",
                    "poster_path": "/qJ2tW6WMUDux911r6m7haRef0WH.jpg"}"#,
            )
            .unwrap(),
        );
        let ViewBody::Details(DetailsView::Loaded(info)) = state.compute_viewmodel(24, 80).body else {
            panic!("expected loaded details");
        };
        assert_eq!(info.meta, "★ 8.5 • 2008 • 152 min");
        assert_eq!(info.tagline.as_deref(), Some("Why So Serious?"));
        assert_eq!(
            info.poster_url,
            "https://image.tmdb.org/t/p/w500/qJ2tW6WMUDux911r6m7haRef0WH.jpg"
        );
    }

    #[test]
    fn failed_details_show_fixed_message() {
        let mut state = state_with_results(1);
        state.route = Route::Details { movie_id: 1 };
        state.details = DetailState::Failed;
        let ViewBody::Details(DetailsView::Failed(message)) = state.compute_viewmodel(24, 80).body else {
            panic!("expected failed details");
        };
        assert_eq!(message, DETAILS_ERROR);
    }
}
