//! AskAdvisorHandler - fetches strategy commentary for a card.

use std::sync::Arc;

use crate::domain::catalog::DecisionCard;
use crate::ports::{AdvisoryService, ExternalServiceError};

/// Text shown when the advisor cannot be reached.
pub const DEFAULT_ADVISOR_FALLBACK: &str = "Comms link down.";

/// Text shown when no advisor is configured.
pub const DEFAULT_ADVISOR_UNAVAILABLE: &str = "AI Advisor is unavailable in this demo.";

/// Text shown when the advisor answered without usable text.
pub const DEFAULT_ADVISOR_EMPTY_ANSWER: &str = "Connection jamming. Retrying...";

/// Fallback texts, one per kind of advisor failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorFallbacks {
    pub unavailable: String,
    pub empty_answer: String,
    /// Transport failures, timeouts and anything else.
    pub link_down: String,
}

impl Default for AdvisorFallbacks {
    fn default() -> Self {
        Self {
            unavailable: DEFAULT_ADVISOR_UNAVAILABLE.to_string(),
            empty_answer: DEFAULT_ADVISOR_EMPTY_ANSWER.to_string(),
            link_down: DEFAULT_ADVISOR_FALLBACK.to_string(),
        }
    }
}

impl AdvisorFallbacks {
    pub fn text_for(&self, error: &ExternalServiceError) -> &str {
        match error {
            ExternalServiceError::Unavailable(_) => &self.unavailable,
            ExternalServiceError::Malformed(_) => &self.empty_answer,
            _ => &self.link_down,
        }
    }
}

/// Command to ask the advisor about a card.
#[derive(Debug, Clone)]
pub struct AskAdvisorCommand {
    pub card: DecisionCard,
}

/// Advisor answer, or the fallback text when the service failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskAdvisorResult {
    pub text: String,
    pub from_fallback: bool,
}

/// Builds the advisor prompt from a card's title, description and labels.
pub fn advisor_prompt(card: &DecisionCard) -> String {
    format!(
        "You are a cynical but pragmatic political strategist in Olympia, WA. \
         The issue is: \"{} - {}\". The options are: Left=\"{}\" or Right=\"{}\". \
         Explain the political trade-off in 2 sentences. Be punchy.",
        card.title, card.description, card.left.label, card.right.label
    )
}

/// Handler for advisor requests. Never fails; errors degrade to fallback text.
pub struct AskAdvisorHandler {
    advisor: Arc<dyn AdvisoryService>,
    fallbacks: AdvisorFallbacks,
}

impl AskAdvisorHandler {
    pub fn new(advisor: Arc<dyn AdvisoryService>, fallbacks: AdvisorFallbacks) -> Self {
        Self { advisor, fallbacks }
    }

    pub async fn handle(&self, cmd: AskAdvisorCommand) -> AskAdvisorResult {
        let prompt = advisor_prompt(&cmd.card);
        match self.advisor.advise(&prompt).await {
            Ok(text) => AskAdvisorResult {
                text,
                from_fallback: false,
            },
            Err(error) => {
                tracing::warn!(
                    advisor = self.advisor.name(),
                    card_id = %cmd.card.id,
                    error = %error,
                    "advisor request failed, using fallback"
                );
                AskAdvisorResult {
                    text: self.fallbacks.text_for(&error).to_string(),
                    from_fallback: true,
                }
            }
        }
    }
}
