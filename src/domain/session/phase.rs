//! GamePhase enum for sequencing a play-through.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Top-level phase of the simulator.
///
/// ```text
/// Intro -> Briefing -> Playing -> SessionEndChoice -> ReviewSession -> GameOver
///                                                  \----------------/
/// GameOver -> Intro
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Intro,
    Briefing,
    Playing,
    SessionEndChoice,
    ReviewSession,
    GameOver,
}

impl GamePhase {
    /// Undo, commit and advance are only meaningful while playing.
    pub fn accepts_turns(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }

    /// True once the session's result is final.
    pub fn ends_session(&self) -> bool {
        matches!(self, GamePhase::GameOver)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Intro => "intro",
            GamePhase::Briefing => "briefing",
            GamePhase::Playing => "playing",
            GamePhase::SessionEndChoice => "session_end_choice",
            GamePhase::ReviewSession => "review_session",
            GamePhase::GameOver => "game_over",
        }
    }
}

impl StateMachine for GamePhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use GamePhase::*;
        matches!(
            (self, target),
            (Intro, Briefing)
                | (Briefing, Playing)
                | (Playing, SessionEndChoice)
                | (SessionEndChoice, ReviewSession)
                | (SessionEndChoice, GameOver)
                | (ReviewSession, GameOver)
                | (GameOver, Intro)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use GamePhase::*;
        match self {
            Intro => vec![Briefing],
            Briefing => vec![Playing],
            Playing => vec![SessionEndChoice],
            SessionEndChoice => vec![ReviewSession, GameOver],
            ReviewSession => vec![GameOver],
            GameOver => vec![Intro],
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
