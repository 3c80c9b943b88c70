use std::io::ErrorKind;
use std::path::PathBuf;
use async_trait::async_trait;
use tokio::fs;
use super::{Record, RecordStore, StoreError};

/// Single JSON file holding the latest record
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored record; missing or corrupt files yield `None`
    pub async fn read(&self) -> Option<Record> {
        self.read_or_absent().await
    }

    /// Overwrite the stored record; failures are logged, never returned
    pub async fn write(&self, record: &Record) {
        self.write_best_effort(record).await
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl RecordStore for FileStore {
    async fn load(&self) -> Result<Option<Record>, StoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e)),
        };
        let record = serde_json::from_str(&content).map_err(StoreError::Corrupt)?;
        Ok(Some(record))
    }

    async fn save(&self, record: &Record) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(record).map_err(StoreError::Encode)?;

        // write to temp file first, then rename over the target
        let temp_path = self.temp_path();
        fs::write(&temp_path, json).await?;
        fs::rename(&temp_path, &self.path).await?;
        tracing::debug!("record {} written to {}", record.entry_number, self.path.display());
        Ok(())
    }

    async fn exists(&self) -> bool {
        fs::try_exists(&self.path).await.unwrap_or(false)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
