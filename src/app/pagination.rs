//! Paginated movie list with a single in-flight fetch.
//!
//! The [`Paginator`] owns the committed query, the current page and the
//! accumulated results. Every fetch it issues is tagged with a fresh request
//! token and at most one fetch is in flight. Targets observed meanwhile wait
//! for it to finish, and a response whose target is no longer current is
//! discarded instead of applied.

use crate::api::http::HttpResponse;
use crate::api::tmdb::decode_page;
use crate::domain::MovieSummary;

/// Message shown when a page fails to load.
pub const GENERIC_ERROR: &str = "An error occurred while fetching data.";

/// A (query, page) pair to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTarget {
    pub query: String,
    pub page: u32,
}

#[derive(Debug, Clone)]
struct InFlight {
    token: u64,
    target: PageTarget,
}

/// Scroll position of the list, measured in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMetrics {
    /// First visible row.
    pub offset: usize,
    /// Number of visible rows.
    pub viewport: usize,
    /// Total number of rows.
    pub content: usize,
}

impl ScrollMetrics {
    /// True once the bottom of the viewport reaches 80% of the content.
    #[must_use]
    pub fn near_bottom(&self) -> bool {
        (self.offset + self.viewport) * 5 >= self.content * 4
    }
}

/// Result of feeding a page response to the [`Paginator`].
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// The token does not belong to the in-flight fetch.
    Ignored,
    /// The target changed while the fetch was in flight. The caller should
    /// issue the current target.
    Discarded,
    /// The page was applied. `record` holds the search term and its top
    /// result when page 1 of a search returned anything.
    Applied {
        record: Option<(String, MovieSummary)>,
    },
    /// The fetch failed and the error message is set.
    Failed,
}

/// Committed query, page counter and accumulated results.
#[derive(Debug)]
pub struct Paginator {
    query: String,
    page: u32,
    total_pages: u32,
    results: Vec<MovieSummary>,
    in_flight: Option<InFlight>,
    last_requested: Option<PageTarget>,
    next_token: u64,
    error_message: Option<String>,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    /// Starts on page 1 of the empty (discover) query.
    #[must_use]
    pub fn new() -> Self {
        Self {
            query: String::new(),
            page: 1,
            total_pages: 1,
            results: Vec::new(),
            in_flight: None,
            last_requested: None,
            next_token: 0,
            error_message: None,
        }
    }

    /// Commits a debounced query and resets to page 1.
    ///
    /// Committing the query that is already committed and requested changes
    /// nothing. Returns whether the target changed.
    pub fn commit(&mut self, query: &str) -> bool {
        if query == self.query && self.last_requested.is_some() {
            tracing::debug!(query, "query unchanged, not refetching");
            return false;
        }
        tracing::debug!(query, previous = %self.query, "query committed");
        self.query = query.to_string();
        self.page = 1;
        self.total_pages = 1;
        true
    }

    fn current_target(&self) -> PageTarget {
        PageTarget {
            query: self.query.clone(),
            page: self.page,
        }
    }

    /// Issues the current target if it has not been requested and nothing is
    /// in flight. Returns the request token and the target to fetch.
    pub fn next_request(&mut self) -> Option<(u64, PageTarget)> {
        if let Some(in_flight) = &self.in_flight {
            tracing::debug!(token = in_flight.token, "fetch in flight, target deferred");
            return None;
        }

        let target = self.current_target();
        if self.last_requested.as_ref() == Some(&target) {
            return None;
        }

        self.next_token += 1;
        let token = self.next_token;
        self.in_flight = Some(InFlight {
            token,
            target: target.clone(),
        });
        self.last_requested = Some(target.clone());
        self.error_message = None;
        Some((token, target))
    }

    /// Applies the response to the fetch identified by `token`.
    pub fn apply_response(&mut self, token: u64, response: &HttpResponse) -> PageOutcome {
        let in_flight = match self.in_flight.take() {
            Some(in_flight) if in_flight.token == token => in_flight,
            other => {
                tracing::debug!(token, "response for a fetch no longer in flight");
                self.in_flight = other;
                return PageOutcome::Ignored;
            }
        };

        let target = in_flight.target;
        if target != self.current_target() {
            tracing::debug!(
                stale_query = %target.query,
                stale_page = target.page,
                "discarding response for a superseded target"
            );
            return PageOutcome::Discarded;
        }

        let label = if target.query.is_empty() {
            format!("discover page {}", target.page)
        } else {
            format!("search page {}", target.page)
        };

        match decode_page(response, &label) {
            Ok(page) => {
                if let Some(total) = page.total_pages {
                    self.total_pages = total;
                }

                let record = if target.page == 1 && !target.query.is_empty() {
                    page.results.first().cloned().map(|top| (target.query.clone(), top))
                } else {
                    None
                };

                if target.page == 1 {
                    self.results = page.results;
                } else {
                    self.results.extend(page.results);
                }

                tracing::debug!(
                    page = target.page,
                    total_pages = self.total_pages,
                    results = self.results.len(),
                    "page applied"
                );
                PageOutcome::Applied { record }
            }
            Err(err) => {
                tracing::error!(error = %err, "Error fetching movies");
                self.error_message = Some(GENERIC_ERROR.to_string());
                PageOutcome::Failed
            }
        }
    }

    /// Advances one page when the list is scrolled near its end and more
    /// pages exist. Returns whether the page changed.
    ///
    /// A failed fetch halts the list until the next query is committed.
    pub fn advance(&mut self, metrics: ScrollMetrics) -> bool {
        if self.in_flight.is_some()
            || self.error_message.is_some()
            || self.page >= self.total_pages
            || !metrics.near_bottom()
        {
            return false;
        }
        self.page += 1;
        tracing::debug!(page = self.page, "scrolled near the end, advancing page");
        true
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub fn results(&self) -> &[MovieSummary] {
        &self.results
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// True while a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// True when the last page has been loaded and nothing is in flight.
    #[must_use]
    pub fn reached_end(&self) -> bool {
        !self.is_loading() && self.page >= self.total_pages && !self.results.is_empty()
    }
}
