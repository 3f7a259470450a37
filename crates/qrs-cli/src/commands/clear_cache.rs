use anyhow::bail;
use qrs_config::QrsConfig;
use qrs_sheets::ColumnCache;
use serde::Serialize;

use crate::output::output;

#[derive(Serialize)]
struct ClearCacheResponse {
    dir: String,
    cleared: bool,
}

/// Handle `qrs clear-cache`.
pub fn handle(config: &QrsConfig) -> anyhow::Result<()> {
    let cache = ColumnCache::new(config.cache.resolved_dir());
    let cleared = cache.clear_all();
    output(&ClearCacheResponse {
        dir: cache.dir().display().to_string(),
        cleared,
    })?;
    if !cleared {
        bail!("failed to clear column cache at {}", cache.dir().display());
    }
    Ok(())
}
