//! Session domain events.
//!
//! Published by the game controller to registered listeners:
//! - `SessionStarted` - a deck was dealt and play began
//! - `TurnStarted` - a card is waiting for a choice
//! - `ChoiceCommitted` - a side was chosen and applied
//! - `TurnEnded` - the cursor moved past a card
//! - `TurnUndone` - the last commit was reverted
//! - `DeckExhausted` - the last card was played
//! - `VoteRevised` - a vote was toggled during review
//! - `SessionFinished` - the final outcome is fixed
//! - `PhaseChanged` - any top-level phase transition

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CardId, SessionId, Side, Timestamp};

use super::GamePhase;

/// What happened, with the data a listener needs to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEventKind {
    SessionStarted {
        deck: Vec<CardId>,
    },
    TurnStarted {
        turn_index: usize,
        card_id: CardId,
    },
    ChoiceCommitted {
        turn_index: usize,
        card_id: CardId,
        side: Side,
        meter_a: i32,
        meter_b: i32,
        alignment_score: u32,
        streak: u32,
    },
    TurnEnded {
        turn_index: usize,
    },
    TurnUndone {
        turn_index: usize,
        meter_a: i32,
        meter_b: i32,
    },
    DeckExhausted {
        cards_played: usize,
    },
    VoteRevised {
        index: usize,
        card_id: CardId,
        side: Side,
    },
    SessionFinished {
        meter_a: i32,
        meter_b: i32,
        alignment_score: u32,
        alignment_percent: u8,
    },
    PhaseChanged {
        from: GamePhase,
        to: GamePhase,
    },
}

impl SessionEventKind {
    /// Routing key, e.g. `session.turn_started.v1`.
    pub fn event_type(&self) -> &'static str {
        match self {
            SessionEventKind::SessionStarted { .. } => "session.started.v1",
            SessionEventKind::TurnStarted { .. } => "session.turn_started.v1",
            SessionEventKind::ChoiceCommitted { .. } => "session.choice_committed.v1",
            SessionEventKind::TurnEnded { .. } => "session.turn_ended.v1",
            SessionEventKind::TurnUndone { .. } => "session.turn_undone.v1",
            SessionEventKind::DeckExhausted { .. } => "session.deck_exhausted.v1",
            SessionEventKind::VoteRevised { .. } => "session.vote_revised.v1",
            SessionEventKind::SessionFinished { .. } => "session.finished.v1",
            SessionEventKind::PhaseChanged { .. } => "session.phase_changed.v1",
        }
    }
}

/// An event stamped with its session and time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEvent {
    pub session_id: SessionId,
    pub occurred_at: Timestamp,
    #[serde(flatten)]
    pub kind: SessionEventKind,
}

impl SessionEvent {
    pub fn new(session_id: SessionId, kind: SessionEventKind) -> Self {
        Self {
            session_id,
            occurred_at: Timestamp::now(),
            kind,
        }
    }

    pub fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }
}
