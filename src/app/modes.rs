//! Input mode and route state types.
//!
//! These two enums decide how keys are interpreted and which view is drawn.
//!
//! # State Machine
//!
//! The list route operates in one of two input modes:
//! - **Normal**: Navigation and command keys
//! - **Search**: Characters edit the search text
//!
//! The details route ignores the input mode; it only knows back and quit.
//!
//! # Example
//!
//! ```rust
//! use reelscout::app::modes::{InputMode, Route};
//!
//! let input_mode = InputMode::Search;
//! let route = Route::Details { movie_id: 155 };
//! assert_ne!(input_mode, InputMode::Normal);
//! assert!(route.is_details());
//! ```

/// Current input handling mode of the list route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation mode.
    ///
    /// Available keybindings: j/k (navigate), `PgDn`/`PgUp` (page),
    /// / (search), enter (details), q (quit).
    Normal,

    /// The search box has typing focus.
    ///
    /// Characters and backspace edit the search text; each edit restarts the
    /// debounce timer. Enter or Esc return to [`InputMode::Normal`] without
    /// clearing the text.
    Search,
}

/// Which view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The searchable movie list (root).
    List,

    /// The detail view for one movie.
    Details {
        /// Identifier of the movie being shown.
        movie_id: u64,
    },
}

impl Route {
    #[must_use]
    pub const fn is_details(self) -> bool {
        matches!(self, Self::Details { .. })
    }
}
