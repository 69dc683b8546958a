//! Movie domain models.
//!
//! [`MovieSummary`] and [`MovieDetails`] are passthroughs of the movie-metadata
//! API's response shapes; nothing is derived locally beyond display formatting.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Placeholder shown (and stored) when a movie has no poster.
pub const NO_POSTER_URL: &str = "/No-Poster.png";

/// One entry of a search or discover result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
}

impl MovieSummary {
    /// Release year parsed from `release_date`, if present and well formed.
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        release_year(self.release_date.as_deref())
    }
}

/// A genre attached to a movie's detail payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Full detail payload for a single movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl MovieDetails {
    /// Release year parsed from `release_date`.
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        release_year(self.release_date.as_deref())
    }
}

/// Parses the year out of an ISO `YYYY-MM-DD` date. The API sends `""` for
/// unknown dates.
#[must_use]
pub fn release_year(release_date: Option<&str>) -> Option<i32> {
    release_date
        .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .map(|date| date.year())
}

/// Formats a vote average with one decimal, `N/A` when missing.
#[must_use]
pub fn rating_label(vote_average: Option<f64>) -> String {
    vote_average.map_or_else(|| "N/A".to_string(), |vote| format!("{vote:.1}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_decodes_with_missing_optional_fields() {
        let movie: MovieSummary = serde_json::from_str(r#"{"id": 268, "title": "Batman"}"#).unwrap();
        assert_eq!(movie.id, 268);
        assert_eq!(movie.poster_path, None);
        assert_eq!(movie.release_year(), None);
    }

    #[test]
    fn summary_tolerates_null_poster() {
        let movie: MovieSummary =
            serde_json::from_str(r#"{"id": 1, "title": "X", "poster_path": null, "release_date": "1989-06-23"}"#)
                .unwrap();
        assert_eq!(movie.poster_path, None);
        assert_eq!(movie.release_year(), Some(1989));
    }

    #[test]
    fn release_year_rejects_empty_and_malformed_dates() {
        assert_eq!(release_year(Some("")), None);
        assert_eq!(release_year(Some("2024")), None);
        assert_eq!(release_year(Some("2024-02-29")), Some(2024));
    }

    #[test]
    fn rating_label_uses_one_decimal() {
        assert_eq!(rating_label(Some(7.25)), "7.2");
        assert_eq!(rating_label(Some(8.0)), "8.0");
        assert_eq!(rating_label(None), "N/A");
    }

    #[test]
    fn details_decode_genres() {
        let details: MovieDetails = serde_json::from_str(
            r#"{"id": 155, "title": "The Dark Knight", "runtime": 152,
                "genres": [{"id": 18, "name": "Drama"}, {"id": 28, "name": "Action"}]}"#,
        )
        .unwrap();
        assert_eq!(details.runtime, Some(152));
        assert_eq!(details.genres.len(), 2);
        assert_eq!(details.genres[1].name, "Action");
        assert!(details.tagline.is_none());
    }
}
