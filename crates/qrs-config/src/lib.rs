//! # qrs-config
//!
//! Layered configuration loading for qrsheet using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`QRSHEET_*` prefix, `__` as separator)
//! 2. Project-level `.qrsheet/config.toml`
//! 3. User-level `~/.config/qrsheet/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `QRSHEET_SMARTSHEET__TOKEN` -> `smartsheet.token`,
//! `QRSHEET_CACHE__DIR` -> `cache.dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use qrs_config::QrsConfig;
//!
//! let config = QrsConfig::load_with_dotenv().expect("config");
//! if config.smartsheet.is_configured() {
//!     println!("Saving to sheet {}", config.smartsheet.sheet_id);
//! }
//! ```

mod cache;
mod error;
mod smartsheet;

pub use cache::CacheConfig;
pub use error::ConfigError;
pub use smartsheet::SmartsheetConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QrsConfig {
    #[serde(default)]
    pub smartsheet: SmartsheetConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

impl QrsConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`QrsConfig::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the current directory (if any), then [`QrsConfig::load`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source is malformed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".qrsheet/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("QRSHEET_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("qrsheet").join("config.toml"))
    }
}
