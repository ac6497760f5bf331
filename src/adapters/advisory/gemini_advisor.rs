//! Gemini Advisor - AdvisoryService backed by the `generateContent` API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(Some(api_key))
//!     .with_model("gemini-2.5-flash")
//!     .with_timeout(Duration::from_secs(20));
//!
//! let advisor = GeminiAdvisor::new(config)?;
//! ```
//!
//! Without an API key every call fails fast with `Unavailable`, so the
//! calling handler can fall back without touching the network.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{AdvisoryService, ExternalServiceError};

/// Default public endpoint.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model name.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Configuration for the Gemini advisor.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    api_key: Option<Secret<String>>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a configuration; blank keys count as missing.
    pub fn new(api_key: Option<Secret<String>>) -> Self {
        let api_key = api_key.filter(|key| !key.expose_secret().trim().is_empty());
        Self {
            api_key,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(20),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Advisory service calling Google's Gemini API.
pub struct GeminiAdvisor {
    config: GeminiConfig,
    client: Client,
}

impl GeminiAdvisor {
    /// Builds the HTTP client with the configured timeout.
    pub fn new(config: GeminiConfig) -> Result<Self, ExternalServiceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ExternalServiceError::unavailable(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    async fn send_request(&self, key: &str, prompt: &str) -> Result<Response, ExternalServiceError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        self.client
            .post(self.generate_url())
            .query(&[("key", key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ExternalServiceError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    ExternalServiceError::Network(format!("Connection failed: {}", e))
                } else {
                    ExternalServiceError::Network(e.to_string())
                }
            })
    }

    async fn handle_response_status(
        &self,
        response: Response,
    ) -> Result<Response, ExternalServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        match status.as_u16() {
            400 => Err(ExternalServiceError::invalid_input(error_body)),
            401 | 403 => Err(ExternalServiceError::unavailable("API key rejected")),
            429 | 500..=599 => Err(ExternalServiceError::unavailable(format!(
                "Server returned {}: {}",
                status, error_body
            ))),
            _ => Err(ExternalServiceError::Network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }
}

/// Text of the first part of the first candidate, if non-blank.
fn first_candidate_text(response: GenerateResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .next()
        .map(|part| part.text)
        .filter(|text| !text.trim().is_empty())
}

#[async_trait]
impl AdvisoryService for GeminiAdvisor {
    async fn advise(&self, prompt: &str) -> Result<String, ExternalServiceError> {
        let key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| ExternalServiceError::unavailable("no API key configured"))?;

        let response = self.send_request(key.expose_secret(), prompt).await?;
        let response = self.handle_response_status(response).await?;

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ExternalServiceError::Malformed(format!("Failed to parse response: {}", e)))?;

        first_candidate_text(parsed)
            .ok_or_else(|| ExternalServiceError::Malformed("response had no candidate text".into()))
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}
