//! Domain layer containing the simulator's rules and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `catalog` - Decision cards and the card catalog
//! - `deck` - Randomized deck selection
//! - `session` - Ledger, turn engine, review ballot, phases and events
//! - `outcome` - Archetype, alignment percent and governing style

pub mod catalog;
pub mod deck;
pub mod foundation;
pub mod outcome;
pub mod session;
