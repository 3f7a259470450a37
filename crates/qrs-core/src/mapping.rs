//! Contact-to-cell mapping.
//!
//! Column titles are matched case-insensitively against a fixed alias table.
//! Titles that are not in the table are ignored. A matched column whose
//! contact field is absent or empty still receives a cell with an empty value
//! (an explicit blank), so the written row always lines up with the columns
//! the sheet recognizes.

use serde::{Deserialize, Serialize};

use crate::contact::Contact;
use crate::ids::ColumnId;
use crate::schema::ColumnSchema;

/// A contact attribute that can be written to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Organization,
    Title,
    RawCode,
}

/// Lower-cased column title → contact field.
pub const TITLE_ALIASES: &[(&str, ContactField)] = &[
    ("name", ContactField::Name),
    ("email", ContactField::Email),
    ("org", ContactField::Organization),
    ("organization", ContactField::Organization),
    ("title", ContactField::Title),
    ("raw", ContactField::RawCode),
    ("qrcode", ContactField::RawCode),
    ("rawqrcode", ContactField::RawCode),
];

impl ContactField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Organization,
        Self::Title,
        Self::RawCode,
    ];

    /// Classify a column title. Matching lower-cases the title and performs
    /// no other normalization.
    #[must_use]
    pub fn from_title(title: &str) -> Option<Self> {
        let normalized = title.to_lowercase();
        TITLE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == normalized)
            .map(|(_, field)| *field)
    }
}

/// One value destined for one column of a new row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellAssignment {
    pub column_id: ColumnId,
    pub value: String,
}

/// Build the cells of a new row for `contact`, in schema order.
///
/// Pure: the result depends only on the arguments. An empty result means the
/// schema has no recognized columns and there is nothing to write.
#[must_use]
pub fn map_to_cells(contact: &Contact, schema: &ColumnSchema) -> Vec<CellAssignment> {
    schema
        .columns()
        .iter()
        .filter_map(|column| {
            ContactField::from_title(&column.title).map(|field| CellAssignment {
                column_id: column.id,
                value: contact.field(field).unwrap_or_default().to_string(),
            })
        })
        .collect()
}
