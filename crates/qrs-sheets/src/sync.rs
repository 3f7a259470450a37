//! The contact save pipeline: resolve columns, map cells, append one row.

use qrs_config::QrsConfig;
use qrs_core::{CellAssignment, Contact, SheetId, map_to_cells};
use qrs_transport::{HttpClient, TransportAdapter};
use tokio::sync::oneshot;

use crate::cache::ColumnCache;
use crate::client::SheetsClient;
use crate::error::SyncError;

/// What a successful save did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A row with this many cells was appended.
    Written { cells: usize },
    /// No column matched a contact field; nothing was sent.
    NothingToWrite,
}

pub struct ContactSync<H = TransportAdapter> {
    client: SheetsClient<H>,
    cache: ColumnCache,
}

impl ContactSync<TransportAdapter> {
    /// Build a pipeline from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`qrs_config::ConfigError`] if no API token is configured.
    pub fn from_config(config: &QrsConfig) -> Result<Self, qrs_config::ConfigError> {
        let token = config.smartsheet.require_token()?;
        let client = SheetsClient::new(TransportAdapter::new(), &config.smartsheet.base_url, token);
        Ok(Self::new(client, ColumnCache::new(config.cache.resolved_dir())))
    }
}

impl<H: HttpClient> ContactSync<H> {
    #[must_use]
    pub const fn new(client: SheetsClient<H>, cache: ColumnCache) -> Self {
        Self { client, cache }
    }

    #[must_use]
    pub const fn cache(&self) -> &ColumnCache {
        &self.cache
    }

    #[must_use]
    pub const fn client(&self) -> &SheetsClient<H> {
        &self.client
    }

    /// Save `contact` as a new row of `sheet`.
    ///
    /// The contact is not validated here; callers reject empty contacts first.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::RemoteFetch`] if the column schema cannot be
    /// resolved and [`SyncError::RemoteWrite`] if the row append fails.
    pub async fn save_contact(
        &mut self,
        sheet: &SheetId,
        contact: &Contact,
    ) -> Result<SaveOutcome, SyncError> {
        let schema = self
            .cache
            .resolve_schema(sheet, &mut self.client)
            .await
            .map_err(|source| SyncError::RemoteFetch {
                sheet: sheet.to_string(),
                source,
            })?;

        let cells: Vec<CellAssignment> = map_to_cells(contact, &schema);
        if cells.is_empty() {
            tracing::info!(%sheet, columns = schema.len(), "no matching columns; nothing to save");
            return Ok(SaveOutcome::NothingToWrite);
        }

        self.client
            .append_row(sheet, &cells)
            .await
            .map_err(|source| SyncError::RemoteWrite {
                sheet: sheet.to_string(),
                source,
            })?;
        tracing::info!(%sheet, cells = cells.len(), "saved contact row");
        Ok(SaveOutcome::Written { cells: cells.len() })
    }

    /// Delete every cached column schema.
    #[must_use]
    pub fn clear_cache(&self) -> bool {
        self.cache.clear_all()
    }

    /// Close any open exchange and return pooled connections.
    pub fn release(&mut self) {
        self.client.release();
    }
}

/// Run one save as a background task and report a single boolean.
///
/// The failure cause is logged, and the transport is released on every path.
pub fn spawn_save<H>(
    mut sync: ContactSync<H>,
    sheet: SheetId,
    contact: Contact,
) -> oneshot::Receiver<bool>
where
    H: HttpClient + 'static,
{
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let result = sync.save_contact(&sheet, &contact).await;
        sync.release();
        let success = match result {
            Ok(outcome) => {
                tracing::debug!(%sheet, ?outcome, "save finished");
                true
            }
            Err(error) => {
                tracing::error!(%sheet, %error, "error saving contact");
                false
            }
        };
        let _ = tx.send(success);
    });
    rx
}

/// Await the result of [`spawn_save`].
///
/// # Errors
///
/// Returns [`SyncError::Aborted`] if the task ended without reporting.
pub async fn wait_for_save(rx: oneshot::Receiver<bool>) -> Result<bool, SyncError> {
    rx.await.map_err(|e| SyncError::Aborted(e.to_string()))
}
