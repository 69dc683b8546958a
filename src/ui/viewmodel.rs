//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering and contain pre-computed display
//! information like highlight ranges, formatted ratings and wrapped text.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use reelscout::ui::viewmodel::{
//!     DisplayItem, FooterInfo, HeaderInfo, ListStatus, ListView, UIViewModel, ViewBody,
//! };
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " All Movies (1) ".to_string() },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     search_bar: None,
//!     body: ViewBody::List(ListView {
//!         trending: vec![],
//!         error: None,
//!         items: vec![DisplayItem {
//!             title: "Batman".to_string(),
//!             year: "1989".to_string(),
//!             rating: "7.2".to_string(),
//!             language: "en".to_string(),
//!             is_selected: true,
//!             highlight_ranges: vec![(0, 3)],
//!         }],
//!         status: ListStatus::EndOfList,
//!         empty_state: None,
//!         title_width: 40,
//!     }),
//! };
//! assert!(matches!(vm.body, ViewBody::List(_)));
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title).
    pub header: HeaderInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Search box state. Shown on the list route only.
    pub search_bar: Option<SearchBarInfo>,

    /// Route-specific content.
    pub body: ViewBody,
}

/// Content below the header, per route.
#[derive(Debug, Clone)]
pub enum ViewBody {
    List(ListView),
    Details(DetailsView),
}

/// The movie list with its trending strip and status lines.
#[derive(Debug, Clone)]
pub struct ListView {
    /// Trending entries, highest count first. Empty hides the strip.
    pub trending: Vec<TrendingItem>,

    /// Error banner shown above the list.
    pub error: Option<String>,

    /// Visible rows of the list.
    pub items: Vec<DisplayItem>,

    /// Status line below the list.
    pub status: ListStatus,

    /// Message shown instead of the rows when there is nothing to list.
    pub empty_state: Option<EmptyState>,

    /// Width of the title column in characters.
    pub title_width: usize,
}

/// Line shown beneath the list rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Idle,
    /// The list is empty and its first page is loading.
    Loading,
    /// A page after the first is loading.
    LoadingMore,
    /// Every page has been loaded.
    EndOfList,
}

/// One trending entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingItem {
    /// 1-based rank.
    pub rank: usize,
    /// The search term the entry counts.
    pub label: String,
}

/// Display information for a single movie row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Title, truncated to the title column.
    pub title: String,

    /// Release year or blank.
    pub year: String,

    /// Vote average with one decimal, or `N/A`.
    pub rating: String,

    /// Original language code.
    pub language: String,

    /// Whether this item is currently selected.
    pub is_selected: bool,

    /// Character ranges to highlight (for fuzzy search matches).
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Detail route content.
#[derive(Debug, Clone)]
pub enum DetailsView {
    Loading,
    Failed(String),
    Loaded(DetailsInfo),
}

/// Display-ready movie details.
#[derive(Debug, Clone)]
pub struct DetailsInfo {
    pub title: String,
    pub tagline: Option<String>,
    /// `★ 8.5 • 2008 • 152 min`
    pub meta: String,
    /// Overview, word-wrapped to the screen width.
    pub overview: Vec<String>,
    pub genres: Vec<String>,
    pub poster_url: String,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "j/k: navigate  /: search  q: quit").
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No movies found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search box display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current (uncommitted) search text.
    pub query: String,

    /// Whether the box has typing focus.
    pub is_focused: bool,

    /// Whether a keystroke is still waiting for the quiet period.
    pub is_pending: bool,
}
