//! Search-count recording.
//!
//! Each successful search is recorded as a read-then-write pair against the
//! search-count collection: look the term up, then either increment the
//! stored document or create it. The two steps are separate host requests,
//! so concurrent sessions can lose an increment between them.
//!
//! Recording is best effort. Failures are logged and never reach the user.

use crate::api::appwrite::{decode_documents, SearchCountStore};
use crate::api::context::{OutboundRequest, RequestKind};
use crate::api::http::HttpResponse;

#[derive(Debug, Clone)]
pub struct SearchCountRecorder {
    store: SearchCountStore,
}

impl SearchCountRecorder {
    #[must_use]
    pub fn new(store: SearchCountStore) -> Self {
        Self { store }
    }

    /// The trending request against the same collection.
    #[must_use]
    pub fn trending_request(&self) -> OutboundRequest {
        OutboundRequest::new(RequestKind::Trending, self.store.trending_request())
    }

    /// First step: look up the stored document for `term`.
    #[must_use]
    pub fn lookup(&self, term: &str, movie_id: u64, poster_url: &str) -> OutboundRequest {
        tracing::debug!(term, movie_id, "recording search");
        OutboundRequest::new(
            RequestKind::SearchCountLookup {
                term: term.to_string(),
                movie_id,
                poster_url: poster_url.to_string(),
            },
            self.store.find_term_request(term),
        )
    }

    /// Second step: increment the first matching document, or create one
    /// with a count of 1. Returns `None` when the lookup failed.
    #[must_use]
    pub fn resolve_lookup(
        &self,
        term: &str,
        movie_id: u64,
        poster_url: &str,
        response: &HttpResponse,
    ) -> Option<OutboundRequest> {
        let documents = match decode_documents(response, "search count lookup") {
            Ok(list) => list.documents,
            Err(err) => {
                tracing::warn!(error = %err, term, "Error updating search count");
                return None;
            }
        };

        let request = match documents.first() {
            Some(existing) => {
                tracing::debug!(term, count = existing.count, "incrementing search count");
                self.store.increment_request(existing)
            }
            None => {
                tracing::debug!(term, "creating search count");
                self.store.create_request(term, movie_id, poster_url)
            }
        };

        match request {
            Ok(request) => Some(OutboundRequest::new(
                RequestKind::SearchCountWrite {
                    term: term.to_string(),
                },
                request,
            )),
            Err(err) => {
                tracing::warn!(error = %err, term, "Error updating search count");
                None
            }
        }
    }

    /// Final step: log the outcome of the write.
    pub fn finish_write(&self, term: &str, response: &HttpResponse) {
        if response.is_success() {
            tracing::debug!(term, "search count recorded");
        } else {
            tracing::warn!(status = response.status, term, "Error updating search count");
        }
    }
}
