//! Advisory service adapters.

mod gemini_advisor;
mod mock_advisor;

pub use gemini_advisor::{
    GeminiAdvisor, GeminiConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
};
pub use mock_advisor::MockAdvisor;
