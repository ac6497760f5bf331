//! Card catalog - the static collection of decision cards.
//!
//! Lookups that miss are skipped by callers rather than treated as fatal,
//! since votes may reference cards retired from a reloaded catalog.

mod card;
mod catalog;

pub use card::{CardOption, Category, DecisionCard};
pub use catalog::{CardCatalog, CatalogError};

#[cfg(test)]
pub(crate) use card::fixtures;
