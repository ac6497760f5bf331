//! Append-only JSON Lines lead sink.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::ports::{ExternalServiceError, LeadRecord, LeadSink};

/// Writes one JSON object per line to a file, creating it on first use.
pub struct JsonLinesLeadSink {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonLinesLeadSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_dir_exists(&self) -> Result<(), ExternalServiceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                ExternalServiceError::storage(format!("Failed to create directory: {}", e))
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl LeadSink for JsonLinesLeadSink {
    async fn record_lead(&self, lead: LeadRecord) -> Result<(), ExternalServiceError> {
        let mut line = serde_json::to_string(&lead)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;
        self.ensure_dir_exists().await?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| ExternalServiceError::storage(format!("Failed to open lead log: {}", e)))?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(path = %self.path.display(), "lead appended");
        Ok(())
    }
}
