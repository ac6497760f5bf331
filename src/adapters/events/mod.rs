//! Session event listener adapters.

mod recording_listener;
mod tracing_listener;

pub use recording_listener::RecordingListener;
pub use tracing_listener::TracingListener;
