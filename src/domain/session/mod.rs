//! Session domain module.
//!
//! One play-through of a dealt deck: the ledger of running totals, the
//! turn engine that mutates it, the review ballot that replays it, and the
//! phase machine that sequences everything.
//!
//! # Events
//!
//! See [`SessionEventKind`] for the notifications the controller publishes.

mod errors;
mod events;
mod ledger;
mod phase;
mod review;
mod turn_engine;

pub use errors::SessionError;
pub use events::{SessionEvent, SessionEventKind};
pub use ledger::{
    LedgerSnapshot, LedgerTotals, SessionLedger, Vote, STARTING_BUDGET, STARTING_TRUST,
};
pub use phase::GamePhase;
pub use review::{replay, ReviewBallot};
pub use turn_engine::{TurnAdvance, TurnEngine};
