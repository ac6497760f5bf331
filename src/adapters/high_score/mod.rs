//! High-score store adapters.

mod in_memory;
mod json_file_store;

pub use in_memory::InMemoryHighScoreStore;
pub use json_file_store::JsonFileHighScoreStore;
