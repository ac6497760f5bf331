//! Advisor configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use crate::adapters::advisory::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use crate::application::{
    AdvisorFallbacks, DEFAULT_ADVISOR_EMPTY_ANSWER, DEFAULT_ADVISOR_FALLBACK,
    DEFAULT_ADVISOR_UNAVAILABLE,
};

use super::error::ValidationError;

/// Advisory service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AdvisorConfig {
    /// Gemini API key; the advisor answers with `unavailable_text` without one
    pub api_key: Option<Secret<String>>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Text shown when the advisor cannot be reached
    #[serde(default = "default_fallback_text")]
    pub fallback_text: String,

    /// Text shown when no advisor is configured
    #[serde(default = "default_unavailable_text")]
    pub unavailable_text: String,

    /// Text shown when the advisor answers without usable text
    #[serde(default = "default_empty_answer_text")]
    pub empty_answer_text: String,
}

impl AdvisorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    pub fn fallbacks(&self) -> AdvisorFallbacks {
        AdvisorFallbacks {
            unavailable: self.unavailable_text.clone(),
            empty_answer: self.empty_answer_text.clone(),
            link_down: self.fallback_text.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidAdvisorUrl);
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("advisor.model"));
        }
        Ok(())
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            fallback_text: default_fallback_text(),
            unavailable_text: default_unavailable_text(),
            empty_answer_text: default_empty_answer_text(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    20
}

fn default_fallback_text() -> String {
    DEFAULT_ADVISOR_FALLBACK.to_string()
}

fn default_unavailable_text() -> String {
    DEFAULT_ADVISOR_UNAVAILABLE.to_string()
}

fn default_empty_answer_text() -> String {
    DEFAULT_ADVISOR_EMPTY_ANSWER.to_string()
}
