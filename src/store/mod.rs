use async_trait::async_trait;

mod errors;
mod file;
mod record;

pub use errors::StoreError;
pub use file::FileStore;
pub use record::Record;

/// Durable home of the single record
///
/// Implementations own no in-memory state; they only move a record to and
/// from their backing location.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet
    async fn load(&self) -> Result<Option<Record>, StoreError>;

    /// Replace the stored record in full
    async fn save(&self, record: &Record) -> Result<(), StoreError>;

    async fn exists(&self) -> bool;

    fn location(&self) -> String;

    /// Load, logging and absorbing any failure as "no data"
    async fn read_or_absent(&self) -> Option<Record> {
        match self.load().await {
            Ok(record) => record,
            Err(e) => {
                tracing::error!("failed to load record from {}: {}", self.location(), e);
                None
            }
        }
    }

    /// Save, logging and absorbing any failure
    async fn write_best_effort(&self, record: &Record) {
        if let Err(e) = self.save(record).await {
            tracing::error!("failed to persist record to {}: {}", self.location(), e);
        }
    }
}
