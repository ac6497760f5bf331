//! LeadSink port - Interface for recording player contact details.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, Timestamp};

use super::ExternalServiceError;

/// Contact details captured at the end of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub contact: String,
    pub zip: String,
    /// Archetype title at capture time.
    pub archetype: String,
    pub alignment_percent: Percentage,
    pub captured_at: Timestamp,
}

/// Write-only destination for lead records.
///
/// Failures are reported to the caller, which treats them as non-fatal.
#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn record_lead(&self, lead: LeadRecord) -> Result<(), ExternalServiceError>;
}
