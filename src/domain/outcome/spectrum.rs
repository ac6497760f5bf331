//! Reform spectrum - coarse position label for the alignment percent.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReformSpectrum {
    StatusQuo,
    Progressive,
    Pragmatic,
    Reform,
}

impl ReformSpectrum {
    pub fn from_percent(percent: Percentage) -> Self {
        match percent.value() {
            p if p < 30 => ReformSpectrum::StatusQuo,
            p if p < 60 => ReformSpectrum::Progressive,
            p if p < 80 => ReformSpectrum::Pragmatic,
            _ => ReformSpectrum::Reform,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReformSpectrum::StatusQuo => "Status Quo",
            ReformSpectrum::Progressive => "Progressive",
            ReformSpectrum::Pragmatic => "Pragmatic",
            ReformSpectrum::Reform => "Reform",
        }
    }
}

impl fmt::Display for ReformSpectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
