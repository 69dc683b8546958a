//! Error types for the Reelscout plugin.
//!
//! This module defines the centralized error type [`ReelscoutError`] and a type alias
//! [`Result`] used throughout the crate. Request builders, response decoders and the
//! event handler all return this type; the plugin shim logs it and skips rendering.

use thiserror::Error;

/// The main error type for Reelscout operations.
///
/// Transport failures and non-success HTTP statuses share the single
/// [`ReelscoutError::Http`] variant.
///
/// # Examples
///
/// ```
/// use reelscout::ReelscoutError;
///
/// let err = ReelscoutError::Http { status: 500, context: "search page 1".to_string() };
/// assert_eq!(err.to_string(), "HTTP error! status: 500 (search page 1)");
/// ```
#[derive(Debug, Error)]
pub enum ReelscoutError {
    /// A request completed with a non-success status or failed in transit.
    ///
    /// The plugin host reports transport failures as a response with an error
    /// status, so both cases arrive here.
    #[error("HTTP error! status: {status} ({context})")]
    Http {
        /// Status code reported by the host.
        status: u16,
        /// Short description of the request that failed.
        context: String,
    },

    /// A response body could not be decoded, or a request body could not be encoded.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A host response carried a request context that cannot be routed.
    #[error("Request context error: {0}")]
    Context(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Reelscout operations.
pub type Result<T> = std::result::Result<T, ReelscoutError>;
