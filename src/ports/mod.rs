//! Ports - trait contracts for the simulator's external collaborators.
//!
//! - `AdvisoryService` - generated commentary for the current card
//! - `LeadSink` - player contact capture
//! - `HighScoreStore` - best alignment percent across sessions
//! - `SessionListener` - session event notifications

mod advisory_service;
mod errors;
mod high_score_store;
mod lead_sink;
mod session_listener;

pub use advisory_service::AdvisoryService;
pub use errors::ExternalServiceError;
pub use high_score_store::{HighScoreStore, HIGH_SCORE_NAMESPACE};
pub use lead_sink::{LeadRecord, LeadSink};
pub use session_listener::SessionListener;
