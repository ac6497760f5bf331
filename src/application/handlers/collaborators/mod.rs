//! Handlers that talk to external collaborators.

mod ask_advisor;
mod capture_lead;
mod record_high_score;

pub use ask_advisor::{
    advisor_prompt, AdvisorFallbacks, AskAdvisorCommand, AskAdvisorHandler, AskAdvisorResult,
    DEFAULT_ADVISOR_EMPTY_ANSWER, DEFAULT_ADVISOR_FALLBACK, DEFAULT_ADVISOR_UNAVAILABLE,
};
pub use capture_lead::{CaptureLeadCommand, CaptureLeadHandler, CaptureLeadResult};
pub use record_high_score::{HighScoreResult, RecordHighScoreCommand, RecordHighScoreHandler};
