//! Column cache location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const APP_DIR: &str = "qrsheet";
const COLUMNS_DIR: &str = "columns";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Explicit cache directory. When unset, a per-user cache directory is used.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl CacheConfig {
    /// Directory holding the column cache entries.
    ///
    /// Falls back to `.qrsheet/cache` when the platform has no cache directory.
    #[must_use]
    pub fn resolved_dir(&self) -> PathBuf {
        if let Some(dir) = &self.dir {
            return dir.clone();
        }
        dirs::cache_dir().map_or_else(
            || PathBuf::from(".qrsheet").join("cache"),
            |p| p.join(APP_DIR).join(COLUMNS_DIR),
        )
    }
}
