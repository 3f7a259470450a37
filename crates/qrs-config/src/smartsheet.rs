//! Remote sheet service configuration.

use std::fmt;

use qrs_core::SheetId;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default Smartsheet REST API root.
fn default_base_url() -> String {
    String::from("https://api.smartsheet.com/2.0")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmartsheetConfig {
    /// API access token, sent as a bearer token.
    #[serde(default)]
    pub token: String,

    /// Sheet that receives saved contacts. Numeric ids from TOML or the
    /// environment are kept as their decimal text.
    #[serde(default, deserialize_with = "sheet_id_text")]
    pub sheet_id: String,

    /// API root URL (without trailing slash).
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn sheet_id_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    struct SheetIdText;

    impl Visitor<'_> for SheetIdText {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a sheet id as a string or integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(SheetIdText)
}

impl Default for SmartsheetConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            sheet_id: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl SmartsheetConfig {
    /// Token present and sheet id valid.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.token.trim().is_empty() && SheetId::parse(&self.sheet_id).is_ok()
    }

    /// Parsed target sheet.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `sheet_id` is empty or malformed.
    pub fn sheet(&self) -> Result<SheetId, ConfigError> {
        SheetId::parse(&self.sheet_id).map_err(|e| ConfigError::InvalidValue {
            field: "smartsheet.sheet_id".into(),
            reason: e.to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if the token is blank.
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        let token = self.token.trim();
        if token.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "smartsheet".into(),
            });
        }
        Ok(token)
    }
}
