//! The single shared record and its read/update/persist cycle

use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use crate::server::config::StartupPolicy;
use crate::store::{Record, RecordStore};

/// Liveness snapshot served by `/health`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthSnapshot {
    pub has_current: bool,
    pub entry_number: Option<i64>,
    pub title: Option<String>,
    pub storage_file: String,
    pub storage_file_exists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WakeupSnapshot {
    pub current_title: Option<String>,
}

pub struct StateService {
    current: RwLock<Option<Record>>,

    /// Held across every commit and file write so writes land in commit order
    persist: Mutex<()>,

    store: Arc<dyn RecordStore>,
}

impl StateService {
    /// Build the service and fill the slot according to `policy`
    pub async fn start(store: Arc<dyn RecordStore>, policy: StartupPolicy) -> Self {
        let initial = match policy {
            StartupPolicy::Eager => {
                let loaded = store.read_or_absent().await;
                match &loaded {
                    Some(record) => tracing::info!(
                        "loaded record {} \"{}\" from {}",
                        record.entry_number,
                        record.title,
                        store.location()
                    ),
                    None => tracing::info!("no stored record at {}", store.location()),
                }
                loaded
            }
            StartupPolicy::Seeded => Some(Record::default()),
        };
        Self::with_current(store, initial)
    }

    pub fn with_current(store: Arc<dyn RecordStore>, current: Option<Record>) -> Self {
        Self {
            current: RwLock::new(current),
            persist: Mutex::new(()),
            store,
        }
    }

    /// The held record, reloading from storage once if the slot is empty
    pub async fn get_current(&self) -> Option<Record> {
        if let Some(record) = self.current.read().await.as_ref() {
            return Some(record.clone());
        }

        // updates commit only while holding `persist`, so none can land
        // between the re-check below and the assignment
        let _persist = self.persist.lock().await;
        if let Some(record) = self.current.read().await.as_ref() {
            return Some(record.clone());
        }

        let loaded = self.store.read_or_absent().await?;
        tracing::info!(
            "reloaded record {} \"{}\" from {}",
            loaded.entry_number,
            loaded.title,
            self.store.location()
        );
        let mut current = self.current.write().await;
        *current = Some(loaded);
        current.clone()
    }

    /// Replace the record wholesale and persist it; last write wins
    pub async fn update(&self, record: Record) -> Record {
        let _persist = self.persist.lock().await;
        *self.current.write().await = Some(record.clone());

        // readers see the new record while the file is written
        tracing::info!("updated record {} \"{}\"", record.entry_number, record.title);
        self.store.write_best_effort(&record).await;
        record
    }

    pub async fn has_current(&self) -> bool {
        self.current.read().await.is_some()
    }

    pub async fn current_title(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|r| r.title.clone())
    }

    /// Liveness acknowledgment; never touches storage
    pub async fn wakeup(&self) -> WakeupSnapshot {
        WakeupSnapshot {
            current_title: self.current_title().await,
        }
    }

    pub async fn health(&self) -> HealthSnapshot {
        let (entry_number, title) = match self.current.read().await.as_ref() {
            Some(record) => (Some(record.entry_number), Some(record.title.clone())),
            None => (None, None),
        };
        HealthSnapshot {
            has_current: title.is_some(),
            entry_number,
            title,
            storage_file: self.store.location(),
            storage_file_exists: self.store.exists().await,
        }
    }

    /// Drop the in-memory record; storage is left untouched
    pub async fn reset(&self) {
        *self.current.write().await = None;
    }
}
