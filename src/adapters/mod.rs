//! Adapters - implementations of the collaborator ports.
//!
//! - `advisory` - Gemini HTTP advisor and a scripted mock
//! - `leads` - JSON Lines file sink and in-memory sink
//! - `high_score` - JSON file store and in-memory store
//! - `events` - recording and tracing session listeners

pub mod advisory;
pub mod events;
pub mod high_score;
pub mod leads;

pub use advisory::{GeminiAdvisor, GeminiConfig, MockAdvisor};
pub use events::{RecordingListener, TracingListener};
pub use high_score::{InMemoryHighScoreStore, JsonFileHighScoreStore};
pub use leads::{InMemoryLeadSink, JsonLinesLeadSink};
