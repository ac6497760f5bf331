//! Review ballot - post-play vote revision with full replay.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::CardCatalog;

use super::{LedgerTotals, SessionError, Vote};

/// Recomputes totals from the starting values by replaying `votes`.
///
/// Votes whose card no longer resolves are skipped. The streak is the
/// trailing run of preferred choices, the same value live play would have
/// produced for this vote sequence.
pub fn replay(votes: &[Vote], catalog: &CardCatalog) -> LedgerTotals {
    let mut totals = LedgerTotals::default();
    for vote in votes {
        let Some(card) = catalog.get(&vote.card_id) else {
            tracing::debug!(card_id = %vote.card_id, "skipping unknown card during replay");
            continue;
        };
        totals.apply(card.option(vote.side), card.is_preferred(vote.side));
    }
    totals
}

/// Working copy of a session's votes during the review phase.
///
/// Edits never touch the ledger's history stack; the ballot is adopted
/// wholesale when review finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewBallot {
    votes: Vec<Vote>,
    totals: LedgerTotals,
}

impl ReviewBallot {
    /// Copies `votes` and computes their replayed totals.
    pub fn open(votes: &[Vote], catalog: &CardCatalog) -> Self {
        let votes = votes.to_vec();
        let totals = replay(&votes, catalog);
        Self { votes, totals }
    }

    pub fn votes(&self) -> &[Vote] {
        &self.votes
    }

    pub fn totals(&self) -> LedgerTotals {
        self.totals
    }

    /// Flips vote `index` to the other side and replays all votes.
    ///
    /// # Errors
    ///
    /// - `VoteIndexOutOfRange` if `index` does not name a cast vote
    pub fn revise_vote(
        &mut self,
        index: usize,
        catalog: &CardCatalog,
    ) -> Result<&Vote, SessionError> {
        let len = self.votes.len();
        let vote = self
            .votes
            .get_mut(index)
            .ok_or(SessionError::VoteIndexOutOfRange { index, len })?;
        vote.side = vote.side.opposite();
        self.totals = replay(&self.votes, catalog);
        Ok(&self.votes[index])
    }

    /// Consumes the ballot, yielding the final votes and totals.
    pub fn into_parts(self) -> (Vec<Vote>, LedgerTotals) {
        (self.votes, self.totals)
    }
}
