//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `POLICY_DECK` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use policy_deck::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Dealing {} cards per session", config.game.deck_size);
//! ```

mod advisor;
mod error;
mod features;
mod game;
mod logging;
mod storage;

pub use advisor::AdvisorConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use game::{GameConfig, MAX_DECK_SIZE};
pub use logging::LoggingConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

use crate::application::SessionSettings;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a playable
/// configuration with the built-in catalog and no advisor key.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Deck and catalog settings
    #[serde(default)]
    pub game: GameConfig,

    /// Advisory service (Gemini)
    #[serde(default)]
    pub advisor: AdvisorConfig,

    /// File locations for high scores and leads
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `POLICY_DECK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `POLICY_DECK__GAME__DECK_SIZE=8` -> `game.deck_size = 8`
    /// - `POLICY_DECK__ADVISOR__API_KEY=...` -> `advisor.api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("POLICY_DECK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.game.validate()?;
        self.advisor.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Deal settings for the game controller.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            deck_size: self.game.deck_size,
            category_filter: self.game.category_filter.clone(),
            exclude_played: self.game.exclude_played,
        }
    }
}
