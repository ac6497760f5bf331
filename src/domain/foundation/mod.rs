//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the simulator.

mod errors;
mod ids;
mod percentage;
mod side;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{CardId, SessionId};
pub use percentage::Percentage;
pub use side::Side;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
