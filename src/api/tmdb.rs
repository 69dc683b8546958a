//! Movie-metadata API (TMDB v3) request builders and decoders.

use crate::api::http::{HttpRequest, HttpResponse};
use crate::domain::movie::{MovieDetails, MovieSummary, NO_POSTER_URL};
use crate::domain::Result;
use serde::Deserialize;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default poster base URL (w500 size).
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// One page of discover or search results.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// Builds requests against the movie-metadata API.
///
/// Holds only configuration; every request is a plain [`HttpRequest`] value
/// that the plugin shim sends through the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieApi {
    base_url: String,
    image_base_url: String,
    token: String,
}

impl MovieApi {
    #[must_use]
    pub fn new(base_url: &str, image_base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            image_base_url: image_base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Request for one results page.
    ///
    /// An empty query browses popular movies, anything else is a title search.
    #[must_use]
    pub fn page_request(&self, query: &str, page: u32) -> HttpRequest {
        let url = if query.is_empty() {
            format!("{}/discover/movie?sort_by=popularity.desc&page={page}", self.base_url)
        } else {
            format!(
                "{}/search/movie?query={}&page={page}",
                self.base_url,
                urlencoding::encode(query)
            )
        };
        self.authorized(HttpRequest::get(url))
    }

    /// Request for a single movie's detail payload.
    #[must_use]
    pub fn details_request(&self, movie_id: u64) -> HttpRequest {
        self.authorized(HttpRequest::get(format!(
            "{}/movie/{movie_id}?language=en-US",
            self.base_url
        )))
    }

    /// Poster URL for a poster path, using the configured image base.
    #[must_use]
    pub fn poster_url(&self, poster_path: Option<&str>) -> String {
        match poster_path {
            Some(path) if !path.is_empty() => format!("{}{path}", self.image_base_url),
            _ => NO_POSTER_URL.to_string(),
        }
    }

    fn authorized(&self, request: HttpRequest) -> HttpRequest {
        request
            .header("accept", "application/json")
            .header("Authorization", format!("Bearer {}", self.token))
    }
}

/// Decodes a discover or search page.
///
/// # Errors
///
/// Fails on non-2xx statuses and undecodable bodies.
pub fn decode_page(response: &HttpResponse, context: &str) -> Result<MoviePage> {
    response.json(context)
}

/// Decodes a movie's detail payload.
///
/// # Errors
///
/// Fails on non-2xx statuses and undecodable bodies.
pub fn decode_details(response: &HttpResponse, movie_id: u64) -> Result<MovieDetails> {
    response.json(&format!("movie {movie_id}"))
}
