//! HighScoreStore port - Interface for the best alignment percent seen.

use async_trait::async_trait;

use crate::domain::foundation::Percentage;

use super::ExternalServiceError;

/// Key under which the simulator keeps its best score.
pub const HIGH_SCORE_NAMESPACE: &str = "policy_deck.high_score";

/// Key-value store of best scores.
#[async_trait]
pub trait HighScoreStore: Send + Sync {
    /// Stored best for `namespace`, `None` if nothing was recorded yet.
    async fn get(&self, namespace: &str) -> Result<Option<Percentage>, ExternalServiceError>;

    /// Overwrites the stored best for `namespace`.
    ///
    /// Callers decide whether the value is an improvement.
    async fn set(&self, namespace: &str, percent: Percentage)
        -> Result<(), ExternalServiceError>;
}
