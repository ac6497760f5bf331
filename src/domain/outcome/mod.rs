//! Outcome classification - pure functions of final session totals.

mod archetype;
mod classifier;
mod share;
mod spectrum;
mod style;

pub use archetype::{Archetype, CHAMPION_THRESHOLD, MANAGER_THRESHOLD, PRAGMATIST_THRESHOLD};
pub use classifier::{classify, classify_totals, Outcome};
pub use share::share_message;
pub use spectrum::ReformSpectrum;
pub use style::{GoverningStyle, HIGH_METER, LOW_BUDGET};
