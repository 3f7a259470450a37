//! # qrs-sheets
//!
//! Saves captured contacts as rows of a remote sheet.
//!
//! - [`SheetsClient`]: the two sheet API calls (list columns, append row)
//!   over any [`qrs_transport::HttpClient`]
//! - [`ColumnCache`]: read-through, file-backed cache of column schemas
//! - [`ContactSync`]: resolve columns → map cells → append row
//! - [`spawn_save`]: run one save in the background with a boolean result

mod cache;
mod client;
mod error;
mod http;
mod sync;

pub use cache::ColumnCache;
pub use client::SheetsClient;
pub use error::{CacheError, SheetsError, SyncError};
pub use sync::{ContactSync, SaveOutcome, spawn_save, wait_for_save};
