//! Errors raised while loading or checking qrsheet settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `QRSHEET_*` variable could not be merged or extracted.
    #[error("failed to load qrsheet settings: {0}")]
    Figment(#[from] figment::Error),

    /// A section needed by the command is missing its credentials, e.g.
    /// `[smartsheet]` without a token.
    #[error("[{section}] is not set up: add it to .qrsheet/config.toml or QRSHEET_{} variables", .section.to_uppercase())]
    NotConfigured { section: String },

    /// A setting is present but unusable, such as a malformed `smartsheet.sheet_id`.
    #[error("bad value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
