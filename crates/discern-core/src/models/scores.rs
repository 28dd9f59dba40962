use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// ASRS Part A screening band, keyed on the count of items scored 2+.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AsrsScreening {
    HighlyConsistent,
    Possible,
    BelowThreshold,
}

impl AsrsScreening {
    pub fn label(self) -> &'static str {
        match self {
            Self::HighlyConsistent => "Highly consistent with ADHD - further evaluation recommended",
            Self::Possible => "Possible ADHD - clinical interview needed",
            Self::BelowThreshold => "Below screening threshold",
        }
    }
}

/// PHQ-9 severity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DepressionSeverity {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl DepressionSeverity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal/none",
            Self::Mild => "Mild depression",
            Self::Moderate => "Moderate depression",
            Self::ModeratelySevere => "Moderately severe depression",
            Self::Severe => "Severe depression",
        }
    }
}

/// GAD-7 severity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnxietySeverity {
    Minimal,
    Mild,
    Moderate,
    Severe,
}

impl AnxietySeverity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal/none",
            Self::Mild => "Mild anxiety",
            Self::Moderate => "Moderate anxiety",
            Self::Severe => "Severe anxiety",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(AsrsScreening, DepressionSeverity, AnxietySeverity);

/// Totals and bands for the three screening instruments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleScores {
    /// Sum of all 18 ASRS items (0–72).
    pub asrs_total: f64,
    /// Count of ASRS Part A items scored 2 or higher (0–6).
    pub asrs_screening: u32,
    pub asrs_interpretation: AsrsScreening,
    /// Sum of the 9 PHQ-9 items (0–27).
    pub phq9_total: f64,
    pub phq9_severity: DepressionSeverity,
    /// Sum of the 7 GAD-7 items (0–21).
    pub gad7_total: f64,
    pub gad7_severity: AnxietySeverity,
}
