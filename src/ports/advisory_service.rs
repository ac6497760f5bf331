//! Advisory Service Port - Interface for generated strategy commentary.
//!
//! The advisor receives a fully built prompt and returns free text. Prompt
//! construction lives in the application layer so adapters stay dumb.

use async_trait::async_trait;

use super::ExternalServiceError;

/// Port for advisory text generation.
#[async_trait]
pub trait AdvisoryService: Send + Sync {
    /// Returns commentary for `prompt`.
    ///
    /// # Errors
    ///
    /// - `Unavailable` when the service is not configured
    /// - `Network` / `Timeout` on transport failure
    /// - `Malformed` when the response carries no usable text
    async fn advise(&self, prompt: &str) -> Result<String, ExternalServiceError>;

    /// Short provider name for logs.
    fn name(&self) -> &'static str;
}
