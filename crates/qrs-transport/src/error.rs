//! Transport error types.

use thiserror::Error;

use crate::request::HttpMethod;

/// Errors raised while executing an HTTP exchange.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or I/O failure (DNS, connect, timeout, malformed response).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request URI could not be parsed.
    #[error("invalid request URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    /// The adapter does not implement this method.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(HttpMethod),

    /// A body was requested but no exchange is open.
    #[error("no open HTTP exchange to read from")]
    NoOpenExchange,
}
