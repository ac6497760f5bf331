//! Lead sink adapters.

mod in_memory;
mod jsonl_lead_sink;

pub use in_memory::InMemoryLeadSink;
pub use jsonl_lead_sink::JsonLinesLeadSink;
