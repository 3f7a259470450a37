//! Sheet API, cache and save-pipeline error types.

use std::path::PathBuf;

use qrs_transport::TransportError;
use thiserror::Error;

/// Errors from a single remote API call.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// The transport failed before a response was available.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// A response body could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// A request body could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),
}

/// Durable column cache failures. Never surfaced to save callers; they are
/// logged and the cache falls back to the remote API.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The entry exists but could not be read.
    #[error("failed to read cache entry {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The entry was read but is not a valid column list.
    #[error("corrupt cache entry {path}: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The directory or entry could not be written.
    #[error("failed to write cache entry {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The schema could not be serialized.
    #[error("failed to encode cache entry {path}: {source}")]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Outcome of a failed contact save.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The column schema was neither cached nor fetchable.
    #[error("failed to fetch columns for sheet {sheet}: {source}")]
    RemoteFetch {
        sheet: String,
        #[source]
        source: SheetsError,
    },

    /// The row append call failed.
    #[error("failed to append row to sheet {sheet}: {source}")]
    RemoteWrite {
        sheet: String,
        #[source]
        source: SheetsError,
    },

    /// The save task ended without reporting a result.
    #[error("save task aborted: {0}")]
    Aborted(String),
}
