//! Terminal rendering.
//!
//! Rendering is a pure function of [`AppState`](crate::AppState): the state
//! computes a [`UIViewModel`] for the pane size, and the components print it
//! with cursor-positioned ANSI output.
//!
//! ```text
//! AppState ──compute_viewmodel──► UIViewModel ──render──► stdout
//! ```
//!
//! The list route shows the search box, the trending strip and the result
//! table; the details route shows one movie.

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DetailsInfo, DetailsView, DisplayItem, EmptyState, FooterInfo, HeaderInfo, ListStatus, ListView,
    SearchBarInfo, TrendingItem, UIViewModel, ViewBody,
};
