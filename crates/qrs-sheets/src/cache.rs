//! Read-through cache of sheet column schemas.
//!
//! One JSON file per sheet, `column-<sheet id>.json`, inside a single cache
//! directory. Read and write failures are logged and never surface to the
//! caller: a bad entry only costs a remote fetch.

use std::fs;
use std::path::{Path, PathBuf};

use qrs_core::{ColumnSchema, SheetId};
use qrs_transport::HttpClient;

use crate::client::SheetsClient;
use crate::error::{CacheError, SheetsError};

const ENTRY_PREFIX: &str = "column-";
const ENTRY_SUFFIX: &str = ".json";

/// Column schemas kept on disk, one entry per sheet.
#[derive(Debug, Clone)]
pub struct ColumnCache {
    dir: PathBuf,
}

impl ColumnCache {
    /// Cache rooted at `dir`. Nothing is created until the first store.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the entry for `sheet`.
    #[must_use]
    pub fn entry_path(&self, sheet: &SheetId) -> PathBuf {
        self.dir
            .join(format!("{ENTRY_PREFIX}{}{ENTRY_SUFFIX}", sheet.as_str()))
    }

    /// Read the cached schema for `sheet`. `Ok(None)` on a miss.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Read`] if the entry exists but cannot be read and
    /// [`CacheError::Corrupt`] if it does not deserialize.
    pub fn load(&self, sheet: &SheetId) -> Result<Option<ColumnSchema>, CacheError> {
        let path = self.entry_path(sheet);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(CacheError::Read { path, source }),
        };
        ColumnSchema::from_json(&json)
            .map(Some)
            .map_err(|source| CacheError::Corrupt { path, source })
    }

    /// Write (or overwrite) the entry for `sheet`, creating the directory.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Write`] on I/O failure.
    pub fn store(&self, sheet: &SheetId, schema: &ColumnSchema) -> Result<(), CacheError> {
        let path = self.entry_path(sheet);
        let json = schema
            .to_json()
            .map_err(|source| CacheError::Encode {
                path: path.clone(),
                source,
            })?;
        fs::create_dir_all(&self.dir).map_err(|source| CacheError::Write {
            path: self.dir.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| CacheError::Write { path, source })
    }

    /// Resolve the schema for `sheet`: cached entry if readable, otherwise a
    /// remote fetch whose result is written back to the cache.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError`] only when the remote fetch fails. Cache
    /// failures are logged and fall through to the fetch.
    pub async fn resolve_schema<H: HttpClient>(
        &self,
        sheet: &SheetId,
        client: &mut SheetsClient<H>,
    ) -> Result<ColumnSchema, SheetsError> {
        match self.load(sheet) {
            Ok(Some(schema)) => {
                tracing::debug!(%sheet, columns = schema.len(), "loaded columns from cache");
                return Ok(schema);
            }
            Ok(None) => tracing::debug!(%sheet, "column cache miss"),
            Err(error) => tracing::warn!(%sheet, %error, "ignoring unreadable column cache entry"),
        }

        tracing::debug!(%sheet, "loading columns from sheet API");
        let schema = client.list_columns(sheet).await?;

        if let Err(error) = self.store(sheet, &schema) {
            tracing::warn!(%sheet, %error, "failed to save columns to cache");
        }
        Ok(schema)
    }

    /// Delete the whole cache directory. Returns `false` only if it exists
    /// and could not be removed.
    #[must_use]
    pub fn clear_all(&self) -> bool {
        match fs::remove_dir_all(&self.dir) {
            Ok(()) => {
                tracing::debug!(dir = %self.dir.display(), "cleared column cache");
                true
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(error) => {
                tracing::warn!(dir = %self.dir.display(), %error, "failed to clear column cache");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use qrs_core::{Column, ColumnId};

    use super::*;

    fn sheet() -> SheetId {
        SheetId::parse("4583173393803140").unwrap()
    }

    fn schema() -> ColumnSchema {
        ColumnSchema::new(vec![
            Column {
                id: ColumnId(1),
                title: "Name".into(),
            },
            Column {
                id: ColumnId(2),
                title: "Email".into(),
            },
        ])
    }

    #[test]
    fn entry_name_is_derived_from_sheet() {
        let cache = ColumnCache::new("/cache");
        assert_eq!(
            cache.entry_path(&sheet()),
            PathBuf::from("/cache/column-4583173393803140.json")
        );
    }

    #[test]
    fn store_then_load() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let cache = ColumnCache::new(tmp.path().join("nested").join("columns"));

        assert!(cache.load(&sheet()).expect("miss").is_none());
        cache.store(&sheet(), &schema()).expect("store");
        assert_eq!(cache.load(&sheet()).expect("hit"), Some(schema()));
    }

    #[test]
    fn corrupt_entry_is_reported() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let cache = ColumnCache::new(tmp.path());
        fs::write(cache.entry_path(&sheet()), "{not json").expect("write");

        assert!(matches!(
            cache.load(&sheet()),
            Err(CacheError::Corrupt { .. })
        ));
    }

    #[test]
    fn unreadable_entry_is_read_error() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let cache = ColumnCache::new(tmp.path());
        fs::create_dir_all(cache.entry_path(&sheet())).expect("mkdir in place of entry");

        assert!(matches!(
            cache.load(&sheet()),
            Err(CacheError::Read { .. })
        ));
    }

    #[test]
    fn store_into_unwritable_location_fails() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "file, not a directory").expect("write");
        let cache = ColumnCache::new(&blocker);

        assert!(matches!(
            cache.store(&sheet(), &schema()),
            Err(CacheError::Write { .. })
        ));
    }

    #[test]
    fn clear_all_removes_every_entry() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let cache = ColumnCache::new(tmp.path().join("columns"));
        let other = SheetId::parse("other").unwrap();
        cache.store(&sheet(), &schema()).expect("store");
        cache.store(&other, &schema()).expect("store");

        assert!(cache.clear_all());
        assert!(!cache.dir().exists());
        assert!(cache.load(&sheet()).expect("miss").is_none());
        assert!(cache.load(&other).expect("miss").is_none());
    }

    #[test]
    fn clear_all_on_missing_dir_succeeds() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let cache = ColumnCache::new(tmp.path().join("never-created"));
        assert!(cache.clear_all());
        assert!(cache.clear_all());
    }

    #[test]
    fn clear_all_on_a_file_fails() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "x").expect("write");
        assert!(!ColumnCache::new(&blocker).clear_all());
    }
}
