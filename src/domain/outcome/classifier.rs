//! Outcome classifier - maps final totals to archetype, percent and style.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;
use crate::domain::session::LedgerTotals;

use super::{share_message, Archetype, GoverningStyle, ReformSpectrum};

/// Derived result of a session. Never stored; recompute from the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub archetype: Archetype,
    pub alignment_percent: Percentage,
    pub style: GoverningStyle,
    pub spectrum: ReformSpectrum,
}

impl Outcome {
    pub fn share_message(&self) -> String {
        share_message(self.alignment_percent)
    }
}

/// Classifies final meters and alignment against the deck length.
///
/// `alignment_percent = round(min(100, score / deck_length * 100))`, and an
/// empty deck yields 0%.
pub fn classify(meter_a: i32, meter_b: i32, alignment_score: u32, deck_length: usize) -> Outcome {
    let whole = u32::try_from(deck_length).unwrap_or(u32::MAX);
    let alignment_percent = Percentage::from_ratio(alignment_score, whole);
    Outcome {
        archetype: Archetype::from_percent(alignment_percent),
        alignment_percent,
        style: GoverningStyle::from_meters(meter_a, meter_b),
        spectrum: ReformSpectrum::from_percent(alignment_percent),
    }
}

/// [`classify`] applied to a ledger's totals.
pub fn classify_totals(totals: &LedgerTotals, deck_length: usize) -> Outcome {
    classify(
        totals.meter_a,
        totals.meter_b,
        totals.alignment_score,
        deck_length,
    )
}
