//! Decision card and option value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{CardId, Percentage, Side, ValidationError};

/// Topic tag used for best-effort deck filtering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Budget,
    SmartGov,
    Care,
    Safety,
    Fixes,
    Energy,
    Education,
    /// Any tag not known to the built-in catalog.
    Other(String),
}

impl Category {
    /// Display name, as written in catalog files.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Budget => "Budget",
            Category::SmartGov => "Smart Gov",
            Category::Care => "Care",
            Category::Safety => "Safety",
            Category::Fixes => "Fixes",
            Category::Energy => "Energy",
            Category::Education => "Education",
            Category::Other(name) => name,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.trim() {
            "Budget" => Category::Budget,
            "Smart Gov" => Category::SmartGov,
            "Care" => Category::Care,
            "Safety" => Category::Safety,
            "Fixes" => Category::Fixes,
            "Energy" => Category::Energy,
            "Education" => Category::Education,
            other => Category::Other(other.to_string()),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Category::from)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the two choices printed on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardOption {
    pub label: String,
    /// Short forecast shown under the label.
    pub forecast: String,
    /// Signed change applied to the budget meter.
    #[serde(rename = "budget")]
    pub budget_delta: i32,
    /// Signed change applied to the trust meter.
    #[serde(rename = "trust")]
    pub trust_delta: i32,
    /// Added to the alignment score when this option is chosen.
    #[serde(rename = "alignment", default)]
    pub alignment_points: u32,
    /// Narrative shown after the choice is committed.
    pub feedback: String,
}

impl CardOption {
    /// Zero deltas still apply, but render no badge.
    pub fn has_budget_badge(&self) -> bool {
        self.budget_delta != 0
    }

    pub fn has_trust_badge(&self) -> bool {
        self.trust_delta != 0
    }
}

/// Immutable catalog entry: a policy dilemma with two options.
///
/// # Invariants
///
/// - `id` is unique within its catalog
/// - `title` is non-empty
/// - exactly two options exist and `preferred_side` names one of them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionCard {
    pub id: CardId,
    pub category: Category,
    pub title: String,
    pub description: String,
    pub left: CardOption,
    pub right: CardOption,
    /// The simulator's advisory stance on this card.
    pub preferred_side: Side,
    /// Commentary explaining the preferred stance.
    #[serde(default)]
    pub context: String,
    /// Factual annotation shown with the feedback.
    #[serde(default)]
    pub reality: String,
    /// Share of players who agreed with the stance. Display only.
    #[serde(default)]
    pub community_agreement: Percentage,
}

impl DecisionCard {
    /// Returns the option printed on the given side.
    pub fn option(&self, side: Side) -> &CardOption {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// True when `side` matches the card's preferred stance.
    pub fn is_preferred(&self, side: Side) -> bool {
        side == self.preferred_side
    }

    /// Checks the textual invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field(format!("{}.title", self.id)));
        }
        for (side, option) in [(Side::Left, &self.left), (Side::Right, &self.right)] {
            if option.label.trim().is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "{}.{}.label",
                    self.id, side
                )));
            }
        }
        Ok(())
    }
}
