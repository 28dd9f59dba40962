use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// DSM-5 presentation implied by endorsed ASRS symptoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Presentation {
    Combined,
    PredominantlyInattentive,
    PredominantlyHyperactiveImpulsive,
    BelowThreshold,
}

impl Presentation {
    pub fn label(self) -> &'static str {
        match self {
            Self::Combined => "Combined presentation",
            Self::PredominantlyInattentive => "Predominantly inattentive presentation",
            Self::PredominantlyHyperactiveImpulsive => {
                "Predominantly hyperactive-impulsive presentation"
            }
            Self::BelowThreshold => "Below DSM-5 symptom count threshold",
        }
    }
}

/// Symptom counts per DSM-5 Criterion A domain. Informational only; it
/// does not feed the likelihood calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomProfile {
    pub inattentive_count: u32,
    pub hyperactive_impulsive_count: u32,
    /// Symptoms required per domain for the user's age group.
    pub required_count: u32,
    pub presentation: Presentation,
}
