//! Storage configuration for file-backed collaborators

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding best scores
    #[serde(default = "default_high_score_path")]
    pub high_score_path: PathBuf,

    /// JSON Lines file receiving captured leads
    #[serde(default = "default_leads_path")]
    pub leads_path: PathBuf,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.high_score_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyPath("storage.high_score_path"));
        }
        if self.leads_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyPath("storage.leads_path"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            high_score_path: default_high_score_path(),
            leads_path: default_leads_path(),
        }
    }
}

fn default_high_score_path() -> PathBuf {
    PathBuf::from("data/high_score.json")
}

fn default_leads_path() -> PathBuf {
    PathBuf::from("data/leads.jsonl")
}
