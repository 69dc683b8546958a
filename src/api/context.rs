//! Request context carried through the host's web request round trip.
//!
//! The host answers every request with an event that echoes back a string map
//! supplied when the request was issued. Reelscout stores one JSON-encoded
//! [`RequestContext`] under [`CONTEXT_KEY`] in that map, which tells the event
//! handler what the response belongs to (and whether it is still wanted).
//! It also carries the issuing span's trace context, so the span that
//! handles the response links back to the span that sent the request.

use crate::api::http::HttpRequest;
use crate::domain::{ReelscoutError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key under which the encoded context is stored in the host's context map.
pub const CONTEXT_KEY: &str = "reelscout";

/// Distributed tracing context for linking response spans to request spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Span ID of the span that issued the request.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the current tracing span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span
    /// context is invalid.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Makes this context the remote parent of spans opened while the guard lives.
    pub fn attach(&self) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }
}

/// What an outbound request was for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestKind {
    /// A discover or search page. `token` identifies the fetch that was in
    /// flight when it was issued.
    MoviePage { token: u64, query: String, page: u32 },

    /// The detail payload for one movie.
    MovieDetails { token: u64, movie_id: u64 },

    /// The top search-count documents.
    Trending,

    /// Lookup of the stored document for a search term, first half of the
    /// search-count upsert.
    SearchCountLookup {
        term: String,
        movie_id: u64,
        poster_url: String,
    },

    /// Create or increment of a search-count document.
    SearchCountWrite { term: String },
}

/// Context echoed back by the host alongside a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    pub kind: RequestKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_context: Option<TraceContext>,
}

impl RequestContext {
    /// Creates a context for `kind`, capturing the current trace context.
    #[must_use]
    pub fn new(kind: RequestKind) -> Self {
        Self {
            kind,
            trace_context: TraceContext::from_current(),
        }
    }

    /// Encodes the context into the host's string map.
    ///
    /// # Errors
    ///
    /// Returns [`ReelscoutError::Decode`] if serialization fails.
    pub fn to_map(&self) -> Result<BTreeMap<String, String>> {
        let mut map = BTreeMap::new();
        map.insert(CONTEXT_KEY.to_string(), serde_json::to_string(self)?);
        Ok(map)
    }

    /// Decodes the context from the host's string map.
    ///
    /// # Errors
    ///
    /// Returns [`ReelscoutError::Context`] if the key is missing and
    /// [`ReelscoutError::Decode`] if its value is not a valid context.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let encoded = map
            .get(CONTEXT_KEY)
            .ok_or_else(|| ReelscoutError::Context(format!("missing '{CONTEXT_KEY}' key")))?;
        Ok(serde_json::from_str(encoded)?)
    }
}

/// A request paired with the context its response will be routed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub context: RequestContext,
    pub request: HttpRequest,
}

impl OutboundRequest {
    #[must_use]
    pub fn new(kind: RequestKind, request: HttpRequest) -> Self {
        Self {
            context: RequestContext::new(kind),
            request,
        }
    }
}
