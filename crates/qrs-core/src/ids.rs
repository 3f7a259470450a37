//! Remote resource identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Identifier of a remote sheet (the tabular container that owns the column
/// schema and receives new rows).
///
/// The value is opaque, but it names a cache file on disk, so only ASCII
/// alphanumerics, `-` and `_` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SheetId(String);

impl SheetId {
    /// Parse and validate a sheet identifier. Surrounding whitespace is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the identifier is empty or holds
    /// characters outside `[A-Za-z0-9_-]`.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation("sheet id is empty".into()));
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(CoreError::Validation(format!(
                "sheet id '{trimmed}' contains invalid character '{bad}'"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SheetId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SheetId> for String {
    fn from(value: SheetId) -> Self {
        value.0
    }
}

/// Remote column identifier, as assigned by the sheet service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(pub i64);

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_sheet_id() {
        let id = SheetId::parse(" 4583173393803140 ").unwrap();
        assert_eq!(id.as_str(), "4583173393803140");
        assert_eq!(id.to_string(), "4583173393803140");
    }

    #[test]
    fn rejects_empty_sheet_id() {
        assert!(matches!(SheetId::parse("   "), Err(CoreError::Validation(_))));
    }

    #[test]
    fn rejects_path_separators() {
        assert!(SheetId::parse("../etc").is_err());
        assert!(SheetId::parse("a/b").is_err());
        assert!(SheetId::parse("a\\b").is_err());
    }

    #[test]
    fn sheet_id_deserialization_validates() {
        let ok: SheetId = serde_json::from_str("\"abc-123_x\"").unwrap();
        assert_eq!(ok.as_str(), "abc-123_x");
        assert!(serde_json::from_str::<SheetId>("\"a b\"").is_err());
    }

    #[test]
    fn column_id_is_transparent_in_json() {
        assert_eq!(serde_json::to_string(&ColumnId(42)).unwrap(), "42");
        let id: ColumnId = serde_json::from_str("7960873114331012").unwrap();
        assert_eq!(id, ColumnId(7_960_873_114_331_012));
    }
}
