//! Policy Deck - card-based policy decision simulator
//!
//! A player works through a dealt deck of two-sided policy cards. Each
//! choice moves two shared meters and an alignment score. Choices can be
//! undone turn by turn, revisited in a review session, and the final
//! totals are classified into an outcome archetype.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
