use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::judgment::Confidence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Condition {
    Adhd,
    Depression,
    Anxiety,
}

impl Condition {
    pub fn label(self) -> &'static str {
        match self {
            Self::Adhd => "ADHD",
            Self::Depression => "Depression",
            Self::Anxiety => "Anxiety",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bounded likelihood estimate for one condition.
///
/// `value` is a heuristic score clamped to [0, 1], not a calibrated
/// probability. `confidence` is derived from where `value` falls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionLikelihood {
    pub condition: Condition,
    pub value: f64,
    pub confidence: Confidence,
    pub contributing_factors: Vec<String>,
    pub interpretation: String,
}
