//! Governing style - quadrant of the final budget/trust meters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Meter value above which a meter counts as "high".
pub const HIGH_METER: i32 = 40;
/// Budget value at or below which the budget counts as "low".
pub const LOW_BUDGET: i32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoverningStyle {
    Statesman,
    AusterityHawk,
    Populist,
    GridlockVictim,
    /// Budget between the low and high bands.
    Balanced,
}

impl GoverningStyle {
    pub fn from_meters(meter_a: i32, meter_b: i32) -> Self {
        let trusted = meter_b > HIGH_METER;
        if meter_a > HIGH_METER {
            if trusted {
                GoverningStyle::Statesman
            } else {
                GoverningStyle::AusterityHawk
            }
        } else if meter_a <= LOW_BUDGET {
            if trusted {
                GoverningStyle::Populist
            } else {
                GoverningStyle::GridlockVictim
            }
        } else {
            GoverningStyle::Balanced
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GoverningStyle::Statesman => "The Statesman",
            GoverningStyle::AusterityHawk => "The Austerity Hawk",
            GoverningStyle::Populist => "The Populist",
            GoverningStyle::GridlockVictim => "Gridlock Victim",
            GoverningStyle::Balanced => "The Pragmatist",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GoverningStyle::Statesman => {
                "You achieved the impossible: Fiscal discipline AND public popularity."
            }
            GoverningStyle::AusterityHawk => {
                "You saved the budget, but the public is hurting. A tough, necessary medicine."
            }
            GoverningStyle::Populist => {
                "The people love you, but the state credit card is maxed out. Dangerous fun."
            }
            GoverningStyle::GridlockVictim => {
                "You tried to please everyone and pleased no one. The deficit grew and trust fell."
            }
            GoverningStyle::Balanced => "Balanced approach.",
        }
    }
}

impl fmt::Display for GoverningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
