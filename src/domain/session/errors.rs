//! Session-specific error types.

use crate::domain::foundation::{CardId, ErrorCode};

use super::GamePhase;

/// Failures signalled by the turn engine and session controller.
///
/// All of them are recoverable: the session stays usable and the caller
/// decides whether to surface a message or ignore the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Undo requested with an empty history stack.
    NoHistory,
    /// A deck entry or vote references a card missing from the catalog.
    UnknownCard(CardId),
    /// Operation not allowed in the current phase.
    InvalidPhase {
        operation: &'static str,
        phase: GamePhase,
    },
    /// No card left at the cursor.
    DeckExhausted,
    /// A choice for the current card is already committed.
    ChoicePending,
    /// Advance requested before any choice was committed for the card.
    NoPendingChoice,
    /// Review toggle for a vote that does not exist.
    VoteIndexOutOfRange { index: usize, len: usize },
    /// The selector could not deal a single card.
    EmptyDeck,
}

impl SessionError {
    pub fn unknown_card(id: CardId) -> Self {
        SessionError::UnknownCard(id)
    }
    pub fn invalid_phase(operation: &'static str, phase: GamePhase) -> Self {
        SessionError::InvalidPhase { operation, phase }
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NoHistory => ErrorCode::NoHistory,
            SessionError::UnknownCard(_) => ErrorCode::CardNotFound,
            SessionError::InvalidPhase { .. } => ErrorCode::InvalidStateTransition,
            SessionError::DeckExhausted => ErrorCode::DeckExhausted,
            SessionError::ChoicePending | SessionError::NoPendingChoice => {
                ErrorCode::InvalidStateTransition
            }
            SessionError::VoteIndexOutOfRange { .. } => ErrorCode::VoteOutOfRange,
            SessionError::EmptyDeck => ErrorCode::EmptyDeck,
        }
    }
    pub fn message(&self) -> String {
        match self {
            SessionError::NoHistory => "Nothing to undo".to_string(),
            SessionError::UnknownCard(id) => format!("Card not found in catalog: {}", id),
            SessionError::InvalidPhase { operation, phase } => {
                format!("Cannot {} during {}", operation, phase)
            }
            SessionError::DeckExhausted => "No cards left in this session".to_string(),
            SessionError::ChoicePending => {
                "A choice is already committed for this card".to_string()
            }
            SessionError::NoPendingChoice => "Choose an option before advancing".to_string(),
            SessionError::VoteIndexOutOfRange { index, len } => {
                format!("Vote {} does not exist ({} votes cast)", index, len)
            }
            SessionError::EmptyDeck => "No cards available to deal".to_string(),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}
