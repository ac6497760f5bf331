//! In-memory lead sink for tests and the demo driver.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::ports::{ExternalServiceError, LeadRecord, LeadSink};

/// Keeps every lead in a vector; can be told to fail.
#[derive(Default)]
pub struct InMemoryLeadSink {
    leads: RwLock<Vec<LeadRecord>>,
    failure: Option<ExternalServiceError>,
}

impl InMemoryLeadSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every write fails with `error`.
    pub fn failing(error: ExternalServiceError) -> Self {
        Self {
            leads: RwLock::new(Vec::new()),
            failure: Some(error),
        }
    }

    pub fn leads(&self) -> Vec<LeadRecord> {
        self.leads.read().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.leads.read().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl LeadSink for InMemoryLeadSink {
    async fn record_lead(&self, lead: LeadRecord) -> Result<(), ExternalServiceError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.leads
            .write()
            .map_err(|_| ExternalServiceError::storage("lead store lock poisoned"))?
            .push(lead);
        Ok(())
    }
}
