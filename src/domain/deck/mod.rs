//! Deck selection - draws the ordered subset of the catalog for a session.

mod active_deck;
mod selector;

pub use active_deck::ActiveDeck;
pub use selector::{DeckSelector, DEFAULT_DECK_SIZE};
