//! Turn engine - commits choices, advances the cursor and undoes turns.
//!
//! The engine holds no phase state. It borrows the catalog and the active
//! deck and mutates whichever ledger it is handed.

use crate::domain::catalog::{CardCatalog, CardOption, DecisionCard};
use crate::domain::deck::ActiveDeck;
use crate::domain::foundation::Side;

use super::{LedgerSnapshot, SessionError, SessionLedger, Vote};

/// Result of moving the cursor forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAdvance {
    /// Another card is waiting at this index.
    Next(usize),
    /// The cursor reached the end of the deck.
    DeckExhausted,
}

/// Applies turns of one session against its deck.
#[derive(Debug, Clone, Copy)]
pub struct TurnEngine<'a> {
    catalog: &'a CardCatalog,
    deck: &'a ActiveDeck,
}

impl<'a> TurnEngine<'a> {
    pub fn new(catalog: &'a CardCatalog, deck: &'a ActiveDeck) -> Self {
        Self { catalog, deck }
    }

    /// The card at the ledger's cursor.
    ///
    /// # Errors
    ///
    /// - `DeckExhausted` if the cursor is past the last card
    /// - `UnknownCard` if the deck id no longer resolves
    pub fn current_card(&self, ledger: &SessionLedger) -> Result<&'a DecisionCard, SessionError> {
        let card_id = self
            .deck
            .get(ledger.turn_index())
            .ok_or(SessionError::DeckExhausted)?;
        self.catalog
            .get(card_id)
            .ok_or_else(|| SessionError::unknown_card(card_id.clone()))
    }

    /// Records a choice for the current card and applies its effects.
    ///
    /// Pushes a snapshot, appends the vote, adds the option's deltas and
    /// alignment points, and updates the streak. The cursor does not move;
    /// call [`advance_turn`](Self::advance_turn) once feedback is shown.
    ///
    /// # Errors
    ///
    /// - `ChoicePending` if the current card already has a committed choice
    /// - `DeckExhausted` / `UnknownCard` as for [`current_card`](Self::current_card)
    pub fn commit_choice(
        &self,
        ledger: &mut SessionLedger,
        side: Side,
    ) -> Result<&'a CardOption, SessionError> {
        if ledger.has_pending_choice() {
            return Err(SessionError::ChoicePending);
        }
        let card = self.current_card(ledger)?;
        let option = card.option(side);
        ledger.record(Vote::new(card.id.clone(), side), option, card.is_preferred(side));
        Ok(option)
    }

    /// Moves past the card whose choice was just committed.
    ///
    /// # Errors
    ///
    /// - `NoPendingChoice` if the current card has not been answered
    pub fn advance_turn(&self, ledger: &mut SessionLedger) -> Result<TurnAdvance, SessionError> {
        if !ledger.has_pending_choice() {
            return Err(SessionError::NoPendingChoice);
        }
        let next = ledger.advance();
        if next >= self.deck.len() {
            Ok(TurnAdvance::DeckExhausted)
        } else {
            Ok(TurnAdvance::Next(next))
        }
    }

    /// Reverts the most recent commit, whether or not it was advanced.
    ///
    /// # Errors
    ///
    /// - `NoHistory` if nothing has been committed
    pub fn undo(&self, ledger: &mut SessionLedger) -> Result<LedgerSnapshot, SessionError> {
        ledger.rewind().ok_or(SessionError::NoHistory)
    }

    pub fn is_exhausted(&self, ledger: &SessionLedger) -> bool {
        ledger.turn_index() >= self.deck.len()
    }
}
