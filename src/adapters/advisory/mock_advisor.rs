//! Mock advisor for testing.
//!
//! Returns scripted responses in order and records every prompt it saw.
//! When the script runs out it answers with the default response.
//!
//! # Example
//!
//! ```ignore
//! let advisor = MockAdvisor::new()
//!     .with_response("Take the deal.")
//!     .with_error(ExternalServiceError::Network("down".into()));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{AdvisoryService, ExternalServiceError};

#[derive(Debug, Clone)]
pub struct MockAdvisor {
    responses: Arc<Mutex<VecDeque<Result<String, ExternalServiceError>>>>,
    default_response: String,
    delay: Duration,
    calls: Arc<Mutex<Vec<String>>>,
}

impl Default for MockAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAdvisor {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            default_response: "Mock advisory response.".to_string(),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful response.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: ExternalServiceError) -> Self {
        self.push(Err(error));
        self
    }

    /// Simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Prompts received so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    fn push(&self, response: Result<String, ExternalServiceError>) {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(response);
        }
    }
}

#[async_trait]
impl AdvisoryService for MockAdvisor {
    async fn advise(&self, prompt: &str) -> Result<String, ExternalServiceError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(prompt.to_string());
        }
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let next = self
            .responses
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front());
        next.unwrap_or_else(|| Ok(self.default_response.clone()))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
