//! Session ledger - the mutable running totals of one play-through.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::CardOption;
use crate::domain::foundation::{CardId, Side};

/// Budget meter value at the start of every session.
pub const STARTING_BUDGET: i32 = -15;

/// Trust meter value at the start of every session.
pub const STARTING_TRUST: i32 = 25;

/// A committed choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub card_id: CardId,
    pub side: Side,
}

impl Vote {
    pub fn new(card_id: CardId, side: Side) -> Self {
        Self { card_id, side }
    }
}

/// Scalar state captured before each committed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub meter_a: i32,
    pub meter_b: i32,
    pub alignment_score: u32,
    pub streak: u32,
    pub turn_index: usize,
}

/// Meters, alignment and streak without cursor or history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTotals {
    pub meter_a: i32,
    pub meter_b: i32,
    pub alignment_score: u32,
    pub streak: u32,
}

impl Default for LedgerTotals {
    fn default() -> Self {
        Self {
            meter_a: STARTING_BUDGET,
            meter_b: STARTING_TRUST,
            alignment_score: 0,
            streak: 0,
        }
    }
}

impl LedgerTotals {
    /// Adds an option's effects; streak grows on the preferred side and
    /// resets otherwise.
    pub fn apply(&mut self, option: &CardOption, preferred: bool) {
        self.meter_a += option.budget_delta;
        self.meter_b += option.trust_delta;
        self.alignment_score += option.alignment_points;
        self.streak = if preferred { self.streak + 1 } else { 0 };
    }
}

/// Running state of one session.
///
/// # Invariants
///
/// - `votes.len() == history.len()`: every commit pushes exactly one of each
/// - after each commit is advanced, `history.len() == turn_index`
/// - history is strictly LIFO and only consumed by undo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLedger {
    totals: LedgerTotals,
    turn_index: usize,
    votes: Vec<Vote>,
    history: Vec<LedgerSnapshot>,
}

impl Default for SessionLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionLedger {
    /// A ledger at the starting values.
    pub fn new() -> Self {
        Self {
            totals: LedgerTotals::default(),
            turn_index: 0,
            votes: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Resets every field to the starting values.
    pub fn start_session(&mut self) {
        *self = Self::new();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Budget meter.
    pub fn meter_a(&self) -> i32 {
        self.totals.meter_a
    }

    /// Trust meter.
    pub fn meter_b(&self) -> i32 {
        self.totals.meter_b
    }

    pub fn alignment_score(&self) -> u32 {
        self.totals.alignment_score
    }

    pub fn streak(&self) -> u32 {
        self.totals.streak
    }

    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    pub fn totals(&self) -> LedgerTotals {
        self.totals
    }

    pub fn votes(&self) -> &[Vote] {
        &self.votes
    }

    pub fn history(&self) -> &[LedgerSnapshot] {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// True between a commit and the advance that follows it.
    pub fn has_pending_choice(&self) -> bool {
        self.votes.len() > self.turn_index
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            meter_a: self.totals.meter_a,
            meter_b: self.totals.meter_b,
            alignment_score: self.totals.alignment_score,
            streak: self.totals.streak,
            turn_index: self.turn_index,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations (driven by the turn engine and review)
    // ─────────────────────────────────────────────────────────────────────────

    /// Pushes the current snapshot, records the vote and applies the option.
    pub(crate) fn record(&mut self, vote: Vote, option: &CardOption, preferred: bool) {
        self.history.push(self.snapshot());
        self.votes.push(vote);
        self.totals.apply(option, preferred);
    }

    /// Moves the cursor to the next card and returns the new index.
    pub(crate) fn advance(&mut self) -> usize {
        self.turn_index += 1;
        self.turn_index
    }

    /// Pops the last snapshot and vote, restoring scalars and cursor.
    pub(crate) fn rewind(&mut self) -> Option<LedgerSnapshot> {
        let snapshot = self.history.pop()?;
        self.votes.pop();
        self.totals = LedgerTotals {
            meter_a: snapshot.meter_a,
            meter_b: snapshot.meter_b,
            alignment_score: snapshot.alignment_score,
            streak: snapshot.streak,
        };
        self.turn_index = snapshot.turn_index;
        Some(snapshot)
    }

    /// Replaces votes and totals with a finished review.
    ///
    /// The history stack describes the pre-review timeline, so it is dropped.
    pub(crate) fn adopt_review(&mut self, votes: Vec<Vote>, totals: LedgerTotals) {
        self.votes = votes;
        self.totals = totals;
        self.history.clear();
    }
}
