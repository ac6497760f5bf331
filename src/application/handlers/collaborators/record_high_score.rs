//! RecordHighScoreHandler - keeps the best alignment percent.

use std::sync::Arc;

use crate::domain::foundation::Percentage;
use crate::ports::{HighScoreStore, HIGH_SCORE_NAMESPACE};

#[derive(Debug, Clone, Copy)]
pub struct RecordHighScoreCommand {
    pub alignment_percent: Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighScoreResult {
    /// Best score after this session.
    pub best: Percentage,
    pub is_new_record: bool,
}

/// Writes a new best only when it strictly beats the stored one.
///
/// A store that cannot be read is not written to; the result reports the
/// current score as best and no new record.
pub struct RecordHighScoreHandler {
    store: Arc<dyn HighScoreStore>,
    namespace: String,
}

impl RecordHighScoreHandler {
    pub fn new(store: Arc<dyn HighScoreStore>) -> Self {
        Self::with_namespace(store, HIGH_SCORE_NAMESPACE)
    }

    pub fn with_namespace(store: Arc<dyn HighScoreStore>, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    pub async fn handle(&self, cmd: RecordHighScoreCommand) -> HighScoreResult {
        let score = cmd.alignment_percent;
        let stored = match self.store.get(&self.namespace).await {
            Ok(stored) => stored.unwrap_or(Percentage::ZERO),
            Err(error) => {
                tracing::warn!(error = %error, "high score unreadable, skipping update");
                return HighScoreResult {
                    best: score,
                    is_new_record: false,
                };
            }
        };

        if score <= stored {
            return HighScoreResult {
                best: stored,
                is_new_record: false,
            };
        }

        if let Err(error) = self.store.set(&self.namespace, score).await {
            tracing::warn!(error = %error, "failed to persist high score");
        }
        tracing::info!(previous = stored.value(), best = score.value(), "new high score");
        HighScoreResult {
            best: score,
            is_new_record: true,
        }
    }
}
