//! Game configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::catalog::Category;
use crate::domain::deck::DEFAULT_DECK_SIZE;

use super::error::ValidationError;

/// Largest deck a session may request.
pub const MAX_DECK_SIZE: usize = 100;

/// Deck and catalog configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Cards dealt per session
    #[serde(default = "default_deck_size")]
    pub deck_size: usize,

    /// Restrict decks to one category when it has enough cards
    pub category_filter: Option<Category>,

    /// YAML catalog to use instead of the built-in master deck
    pub catalog_path: Option<PathBuf>,

    /// Fixed shuffle seed for reproducible decks
    pub seed: Option<u64>,

    /// Avoid re-dealing cards from earlier sessions
    #[serde(default = "default_exclude_played")]
    pub exclude_played: bool,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.deck_size == 0 || self.deck_size > MAX_DECK_SIZE {
            return Err(ValidationError::InvalidDeckSize {
                max: MAX_DECK_SIZE,
                actual: self.deck_size,
            });
        }
        if self
            .catalog_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(ValidationError::EmptyPath("game.catalog_path"));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            deck_size: default_deck_size(),
            category_filter: None,
            catalog_path: None,
            seed: None,
            exclude_played: default_exclude_played(),
        }
    }
}

fn default_deck_size() -> usize {
    DEFAULT_DECK_SIZE
}

fn default_exclude_played() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_config_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.deck_size, 10);
        assert!(config.exclude_played);
        assert!(config.category_filter.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_zero_deck() {
        let config = GameConfig {
            deck_size: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidDeckSize { max: 100, actual: 0 })
        );
    }

    #[test]
    fn test_category_filter_deserializes_display_name() {
        let config: GameConfig =
            serde_json::from_str(r#"{"category_filter": "Smart Gov"}"#).unwrap();
        assert_eq!(config.category_filter, Some(Category::SmartGov));
        assert_eq!(config.deck_size, 10);
    }
}
