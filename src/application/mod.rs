//! Application layer - the game controller and collaborator handlers.
//!
//! The controller drives the synchronous session core. Handlers wrap the
//! async collaborator ports and never let their failures reach the ledger.

pub mod controller;
pub mod handlers;

pub use controller::{GameController, SessionSettings};
pub use handlers::{
    advisor_prompt, AdvisorFallbacks, AskAdvisorCommand, AskAdvisorHandler, AskAdvisorResult,
    CaptureLeadCommand, CaptureLeadHandler, CaptureLeadResult, HighScoreResult,
    RecordHighScoreCommand, RecordHighScoreHandler, DEFAULT_ADVISOR_EMPTY_ANSWER,
    DEFAULT_ADVISOR_FALLBACK, DEFAULT_ADVISOR_UNAVAILABLE,
};
