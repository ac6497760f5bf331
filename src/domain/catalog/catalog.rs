//! Read-only card catalog with lookup by identifier.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use super::card::{Category, DecisionCard};
use crate::domain::foundation::{CardId, ValidationError};

const MASTER_DECK_YAML: &str = include_str!("master_deck.yaml");

static BUILTIN: Lazy<Arc<CardCatalog>> = Lazy::new(|| {
    Arc::new(
        CardCatalog::from_yaml_str(MASTER_DECK_YAML)
            .expect("built-in master deck should always parse"),
    )
});

/// Errors raised while loading a catalog from an external document.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] ValidationError),
}

/// Immutable table of decision cards.
///
/// # Invariants
///
/// - card ids are unique
/// - every card passes [`DecisionCard::validate`]
#[derive(Debug, Clone)]
pub struct CardCatalog {
    cards: Vec<DecisionCard>,
    index: HashMap<CardId, usize>,
}

impl CardCatalog {
    /// Builds a catalog, rejecting duplicate ids and invalid cards.
    pub fn new(cards: Vec<DecisionCard>) -> Result<Self, ValidationError> {
        let mut index = HashMap::with_capacity(cards.len());
        for (position, card) in cards.iter().enumerate() {
            card.validate()?;
            if index.insert(card.id.clone(), position).is_some() {
                return Err(ValidationError::duplicate("card_id", card.id.as_str()));
            }
        }
        Ok(Self { cards, index })
    }

    /// The fifteen-card master deck shipped with the simulator.
    pub fn builtin() -> Arc<CardCatalog> {
        Arc::clone(&BUILTIN)
    }

    /// Parses a YAML sequence of cards.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let cards: Vec<DecisionCard> = serde_yaml::from_str(yaml)?;
        Ok(Self::new(cards)?)
    }

    /// Reads and parses a YAML catalog file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Looks up a card. A miss is not an error for callers.
    pub fn get(&self, id: &CardId) -> Option<&DecisionCard> {
        self.index.get(id).map(|&position| &self.cards[position])
    }

    pub fn contains(&self, id: &CardId) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in catalog order.
    pub fn cards(&self) -> &[DecisionCard] {
        &self.cards
    }

    /// Number of cards carrying the given category.
    pub fn count_in(&self, category: &Category) -> usize {
        self.cards.iter().filter(|c| &c.category == category).count()
    }
}
