//! Host-agnostic HTTP request and response values.
//!
//! The plugin never performs I/O itself: request builders produce an
//! [`HttpRequest`] value and the plugin shim hands it to the host. Responses
//! come back as [`HttpResponse`] and are decoded here, which keeps every
//! builder and decoder testable without a running host.

use crate::domain::{ReelscoutError, Result};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// HTTP verbs the plugin issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

/// A fully described outbound HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Creates a GET request with no headers.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Creates a POST request with no headers and an empty body.
    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    /// Creates a PUT request with no headers and an empty body.
    #[must_use]
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, url)
    }

    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: BTreeMap::new(),
            body: Vec::new(),
        }
    }

    /// Adds or replaces a header.
    #[must_use]
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_string(), value.into());
        self
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`ReelscoutError::Decode`] if the value cannot be serialized.
    pub fn json_body<T: serde::Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = serde_json::to_vec(body)?;
        Ok(self)
    }
}

/// Status and body of a completed request, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// True for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Checks the status and decodes the body as JSON.
    ///
    /// `context` names the request in the error, e.g. `"search page 2"`.
    ///
    /// # Errors
    ///
    /// Returns [`ReelscoutError::Http`] for non-2xx statuses and
    /// [`ReelscoutError::Decode`] when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self, context: &str) -> Result<T> {
        if !self.is_success() {
            return Err(ReelscoutError::Http {
                status: self.status,
                context: context.to_string(),
            });
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}
