//! Cross-cutting error types for qrsheet.
//!
//! Transport, remote API and cache errors live in their own crates; this
//! module only covers failures that can be detected from the data alone.

use thiserror::Error;

/// Errors raised while constructing or validating core values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Data failed validation (empty contact, malformed identifier).
    #[error("Validation error: {0}")]
    Validation(String),
}
