//! Application handlers.
//!
//! Command handlers that coordinate the domain with collaborator ports.

pub mod collaborators;

pub use collaborators::{
    advisor_prompt, AdvisorFallbacks, AskAdvisorCommand, AskAdvisorHandler, AskAdvisorResult,
    CaptureLeadCommand, CaptureLeadHandler, CaptureLeadResult, HighScoreResult,
    RecordHighScoreCommand, RecordHighScoreHandler, DEFAULT_ADVISOR_EMPTY_ANSWER,
    DEFAULT_ADVISOR_FALLBACK, DEFAULT_ADVISOR_UNAVAILABLE,
};
