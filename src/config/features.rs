//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for the optional collaborators
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Offer advisor commentary on each card
    #[serde(default = "default_true")]
    pub enable_advisor: bool,

    /// Ask for contact details after a session
    #[serde(default)]
    pub enable_lead_capture: bool,

    /// Track the best alignment percent across sessions
    #[serde(default = "default_true")]
    pub enable_high_score: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_advisor: true,
            enable_lead_capture: false,
            enable_high_score: true,
        }
    }
}

fn default_true() -> bool {
    true
}
