//! Domain layer for the Reelscout plugin.
//!
//! Core types independent of Zellij APIs and of the wire formats of the two
//! external services.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Movie summaries, details and display helpers
//! - [`trending`]: Stored search-count documents and trending ranking

pub mod error;
pub mod movie;
pub mod trending;

pub use error::{ReelscoutError, Result};
pub use movie::{Genre, MovieDetails, MovieSummary};
pub use trending::{rank_trending, TrendingEntry, TRENDING_LIMIT};
