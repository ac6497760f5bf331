//! High-score store persisted as a single JSON object on disk.
//!
//! Layout: `{"<namespace>": <percent>, ...}`. Writes go to a temporary file
//! that is then renamed over the original.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::foundation::Percentage;
use crate::ports::{ExternalServiceError, HighScoreStore};

type ScoreTable = BTreeMap<String, Percentage>;

pub struct JsonFileHighScoreStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileHighScoreStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the table; a missing file is an empty table.
    async fn read_table(&self) -> Result<ScoreTable, ExternalServiceError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(ScoreTable::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ScoreTable::new()),
            Err(e) => Err(ExternalServiceError::storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn write_table(&self, table: &ScoreTable) -> Result<(), ExternalServiceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, serde_json::to_vec_pretty(table)?)
            .await
            .map_err(|e| ExternalServiceError::storage(format!("Failed to write temporary file: {}", e)))?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| ExternalServiceError::storage(format!("Failed to rename file: {}", e)))?;
        Ok(())
    }
}

#[async_trait]
impl HighScoreStore for JsonFileHighScoreStore {
    async fn get(&self, namespace: &str) -> Result<Option<Percentage>, ExternalServiceError> {
        Ok(self.read_table().await?.get(namespace).copied())
    }

    async fn set(&self, namespace: &str, percent: Percentage) -> Result<(), ExternalServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut table = self.read_table().await?;
        table.insert(namespace.to_string(), percent);
        self.write_table(&table).await
    }
}
