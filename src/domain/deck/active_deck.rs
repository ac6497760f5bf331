//! The ordered subset of the catalog dealt for one session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CardId;

/// Ordered card ids, fixed for the lifetime of a session.
///
/// Review-phase toggles change recorded votes only; deck membership and
/// order never change after the deal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveDeck(Vec<CardId>);

impl ActiveDeck {
    pub fn new(card_ids: Vec<CardId>) -> Self {
        Self(card_ids)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Card at the given turn, if the deck is that long.
    pub fn get(&self, turn_index: usize) -> Option<&CardId> {
        self.0.get(turn_index)
    }

    pub fn card_ids(&self) -> &[CardId] {
        &self.0
    }

    pub fn contains(&self, id: &CardId) -> bool {
        self.0.contains(id)
    }
}
