//! Deck selector - bounded, best-effort filtered, uniformly shuffled draws.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::collections::HashSet;

use super::ActiveDeck;
use crate::domain::catalog::{CardCatalog, Category};
use crate::domain::foundation::CardId;

/// Default number of cards dealt per session.
pub const DEFAULT_DECK_SIZE: usize = 10;

/// Draws decks from a catalog.
///
/// Owns its RNG so that a seeded selector replays the same sequence of
/// deals across sessions.
#[derive(Debug, Clone)]
pub struct DeckSelector {
    rng: ChaCha20Rng,
}

impl DeckSelector {
    /// Selector seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: ChaCha20Rng::from_os_rng(),
        }
    }

    /// Deterministic selector for tests and reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Draws up to `count` distinct cards.
    ///
    /// The pool is the catalog minus `exclude_ids`. When `category` is given
    /// and at least `count` pooled cards carry it, the pool narrows to those;
    /// otherwise the filter is ignored. A pool smaller than `count` yields a
    /// shorter deck.
    pub fn draw_deck(
        &mut self,
        catalog: &CardCatalog,
        count: usize,
        category: Option<&Category>,
        exclude_ids: &[CardId],
    ) -> ActiveDeck {
        let excluded: HashSet<&CardId> = exclude_ids.iter().collect();
        let mut pool: Vec<&CardId> = catalog
            .cards()
            .iter()
            .filter(|card| !excluded.contains(&card.id))
            .map(|card| &card.id)
            .collect();

        if let Some(category) = category {
            let filtered: Vec<&CardId> = catalog
                .cards()
                .iter()
                .filter(|card| &card.category == category && !excluded.contains(&card.id))
                .map(|card| &card.id)
                .collect();
            if filtered.len() >= count {
                pool = filtered;
            } else {
                tracing::debug!(
                    category = %category,
                    available = filtered.len(),
                    requested = count,
                    "Category filter too narrow, drawing from full pool"
                );
            }
        }

        pool.shuffle(&mut self.rng);
        ActiveDeck::new(pool.into_iter().take(count).cloned().collect())
    }
}

impl Default for DeckSelector {
    fn default() -> Self {
        Self::new()
    }
}
