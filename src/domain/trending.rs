//! Trending entries backed by stored search counts.
//!
//! Every search term that produced results is kept as one document in the
//! hosted document database. The same document shape serves both the
//! search-count upsert and the trending strip.

use serde::{Deserialize, Serialize};

/// Maximum number of trending entries shown.
pub const TRENDING_LIMIT: usize = 5;

/// A stored search-count document.
///
/// Field names on the wire follow the collection's attribute names
/// (`searchTerm`, `count`, `movie_id`, `poster_url`) plus the database's own
/// `$id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingEntry {
    #[serde(rename = "$id")]
    pub document_id: String,
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    #[serde(default)]
    pub movie_id: Option<u64>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub count: u64,
}

/// Orders entries by descending count and keeps the top [`TRENDING_LIMIT`].
///
/// The database already sorts and limits; this keeps the invariant when it
/// does not. The sort is stable, so ties keep the database's order.
#[must_use]
pub fn rank_trending(mut entries: Vec<TrendingEntry>) -> Vec<TrendingEntry> {
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(TRENDING_LIMIT);
    entries
}
