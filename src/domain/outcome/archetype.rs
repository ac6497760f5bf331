//! Archetype - the discrete label a final alignment percent maps to.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

/// Minimum alignment percent for [`Archetype::Champion`].
pub const CHAMPION_THRESHOLD: u8 = 85;
/// Minimum alignment percent for [`Archetype::Pragmatist`].
pub const PRAGMATIST_THRESHOLD: u8 = 60;
/// Minimum alignment percent for [`Archetype::Manager`].
pub const MANAGER_THRESHOLD: u8 = 30;

/// Player archetype, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Champion,
    Pragmatist,
    Manager,
    StatusQuo,
}

impl Archetype {
    /// Picks the first archetype whose threshold `percent` meets.
    pub fn from_percent(percent: Percentage) -> Self {
        match percent.value() {
            p if p >= CHAMPION_THRESHOLD => Archetype::Champion,
            p if p >= PRAGMATIST_THRESHOLD => Archetype::Pragmatist,
            p if p >= MANAGER_THRESHOLD => Archetype::Manager,
            _ => Archetype::StatusQuo,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Archetype::Champion => "Firewall for Reform",
            Archetype::Pragmatist => "Pragmatic Builder",
            Archetype::Manager => "Establishment Manager",
            Archetype::StatusQuo => "The Bureaucrat",
        }
    }

    /// What the player's votes said about them.
    pub fn description(&self) -> &'static str {
        match self {
            Archetype::Champion => {
                "You are the firewall against wasteful spending. You voted to stop 'Ghost Revenue' \
                 and fought to save Rainier School. You understand that true compassion means \
                 delivering results, not just spending money. You are a Champion of Real Reform."
            }
            Archetype::Pragmatist => {
                "You voted to drag our state agencies out of the stone age. You recognize that \
                 systems should move at the speed of business. You are a strong ally for working \
                 families across Washington."
            }
            Archetype::Manager => {
                "You managed the decline. You avoided the worst mistakes, but you stopped short of \
                 the structural reforms needed to save Rainier School or truly cut red tape. We \
                 need to do more than just survive the session."
            }
            Archetype::StatusQuo => {
                "You tended to accept the 'Ghost Revenue' projections and allowed agencies to \
                 justify their own existence. While you kept the lights on, you funded a system \
                 that moves at the speed of bureaucracy, not business."
            }
        }
    }

    /// Closing appeal shown alongside the result.
    pub fn pitch(&self) -> &'static str {
        match self {
            Archetype::Champion => {
                "We are 100% aligned. You see exactly what I see: A budget built on phantom money \
                 and a system failing its most vulnerable. I need you in my inner circle."
            }
            Archetype::Pragmatist => {
                "You have the right instincts: Cut the red tape, protect the vulnerable. I need \
                 your help to take the next step: forcing agencies to justify every dollar, \
                 every year."
            }
            Archetype::Manager => {
                "You see the cracks in the foundation, but you're hesitant to rebuild. I need \
                 allies who are willing to demand Zero-Based Budgeting and real accountability. \
                 Join me."
            }
            Archetype::StatusQuo => {
                "You voted to keep the machinery running, even when it's broken. We need to stop \
                 funding the 'Stone Age' and start demanding results. Help me force that change."
            }
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(p: u8) -> Archetype {
        Archetype::from_percent(Percentage::new(p))
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(at(85), Archetype::Champion);
        assert_eq!(at(84), Archetype::Pragmatist);
        assert_eq!(at(60), Archetype::Pragmatist);
        assert_eq!(at(59), Archetype::Manager);
        assert_eq!(at(30), Archetype::Manager);
        assert_eq!(at(29), Archetype::StatusQuo);
    }

    #[test]
    fn extremes_map_to_ends() {
        assert_eq!(at(0), Archetype::StatusQuo);
        assert_eq!(at(100), Archetype::Champion);
    }

    #[test]
    fn display_uses_title() {
        assert_eq!(Archetype::Manager.to_string(), "Establishment Manager");
    }
}
