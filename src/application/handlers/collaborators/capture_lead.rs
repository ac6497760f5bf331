//! CaptureLeadHandler - validates contact details and records them.

use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::outcome::Outcome;
use crate::ports::{LeadRecord, LeadSink};

/// Command to capture a lead after a finished session.
#[derive(Debug, Clone)]
pub struct CaptureLeadCommand {
    pub email: String,
    pub zip: String,
    pub outcome: Outcome,
}

/// Accepted lead and the background write.
///
/// The write never reports failure; awaiting it only waits for completion.
#[derive(Debug)]
pub struct CaptureLeadResult {
    pub lead: LeadRecord,
    pub write: JoinHandle<()>,
}

/// Handler for lead capture.
///
/// Validation failures are returned to the caller. Sink failures are only
/// logged, since the session result must not depend on them.
pub struct CaptureLeadHandler {
    sink: Arc<dyn LeadSink>,
}

impl CaptureLeadHandler {
    pub fn new(sink: Arc<dyn LeadSink>) -> Self {
        Self { sink }
    }

    /// Validates the command and spawns the write.
    ///
    /// Must be called from within a tokio runtime.
    pub fn handle(&self, cmd: CaptureLeadCommand) -> Result<CaptureLeadResult, ValidationError> {
        let contact = validate_email(&cmd.email)?;
        let zip = validate_zip(&cmd.zip)?;

        let lead = LeadRecord {
            contact,
            zip,
            archetype: cmd.outcome.archetype.title().to_string(),
            alignment_percent: cmd.outcome.alignment_percent,
            captured_at: Timestamp::now(),
        };

        let sink = Arc::clone(&self.sink);
        let record = lead.clone();
        let write = tokio::spawn(async move {
            if let Err(error) = sink.record_lead(record).await {
                tracing::warn!(error = %error, "lead capture failed");
            }
        });

        Ok(CaptureLeadResult { lead, write })
    }
}

fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::empty_field("email"));
    }
    if !email.contains('@') {
        return Err(ValidationError::invalid_format("email", "must contain '@'"));
    }
    Ok(email.to_string())
}

fn validate_zip(zip: &str) -> Result<String, ValidationError> {
    let zip = zip.trim();
    if zip.is_empty() {
        return Err(ValidationError::empty_field("zip"));
    }
    if zip.len() != 5 || !zip.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::invalid_format("zip", "must be 5 digits"));
    }
    Ok(zip.to_string())
}
