//! # qrs-core
//!
//! Core types shared across qrsheet crates:
//! - [`Contact`] records captured from a QR code or typed in by hand
//! - Remote identifiers ([`SheetId`], [`ColumnId`]) and the column schema
//! - The contact-to-cell mapper with its static title alias table
//! - Cross-cutting error types

pub mod contact;
pub mod errors;
pub mod ids;
pub mod mapping;
pub mod schema;

pub use contact::{AddressBook, Contact};
pub use errors::CoreError;
pub use ids::{ColumnId, SheetId};
pub use mapping::{CellAssignment, ContactField, map_to_cells};
pub use schema::{Column, ColumnSchema};
