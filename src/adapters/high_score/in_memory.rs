//! In-memory high-score store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::Percentage;
use crate::ports::{ExternalServiceError, HighScoreStore};

#[derive(Default)]
pub struct InMemoryHighScoreStore {
    scores: RwLock<HashMap<String, Percentage>>,
    failure: Option<ExternalServiceError>,
}

impl InMemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated with one score.
    pub fn with_score(namespace: impl Into<String>, percent: Percentage) -> Self {
        let store = Self::new();
        if let Ok(mut scores) = store.scores.write() {
            scores.insert(namespace.into(), percent);
        }
        store
    }

    /// A store whose reads and writes all fail with `error`.
    pub fn failing(error: ExternalServiceError) -> Self {
        Self {
            scores: RwLock::new(HashMap::new()),
            failure: Some(error),
        }
    }

    fn check(&self) -> Result<(), ExternalServiceError> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl HighScoreStore for InMemoryHighScoreStore {
    async fn get(&self, namespace: &str) -> Result<Option<Percentage>, ExternalServiceError> {
        self.check()?;
        let scores = self
            .scores
            .read()
            .map_err(|_| ExternalServiceError::storage("score lock poisoned"))?;
        Ok(scores.get(namespace).copied())
    }

    async fn set(&self, namespace: &str, percent: Percentage) -> Result<(), ExternalServiceError> {
        self.check()?;
        self.scores
            .write()
            .map_err(|_| ExternalServiceError::storage("score lock poisoned"))?
            .insert(namespace.to_string(), percent);
        Ok(())
    }
}
