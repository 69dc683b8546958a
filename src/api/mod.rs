//! Outbound HTTP for the two external services.
//!
//! Nothing here performs I/O. Builders return [`HttpRequest`] values, the
//! plugin shim sends them through the host, and the responses come back to
//! the decoders as [`HttpResponse`].
//!
//! - `http`: Request/response values
//! - `context`: Routing context round-tripped through the host
//! - `tmdb`: Movie-metadata API
//! - `appwrite`: Search-count document database

pub mod appwrite;
pub mod context;
pub mod http;
pub mod tmdb;

pub use appwrite::SearchCountStore;
pub use context::{OutboundRequest, RequestContext, RequestKind, TraceContext};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use tmdb::MovieApi;
