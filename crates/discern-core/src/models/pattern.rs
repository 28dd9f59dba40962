use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Overall presentation pattern across the three conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DiagnosticPattern {
    AdhdPredominant,
    DepressionPredominant,
    AnxietyPredominant,
    AdhdWithDepression,
    AdhdWithAnxiety,
    DepressionWithAnxiety,
    ComplexComorbid,
    UnclearSubclinical,
}

impl DiagnosticPattern {
    pub const ALL: [DiagnosticPattern; 8] = [
        Self::AdhdPredominant,
        Self::DepressionPredominant,
        Self::AnxietyPredominant,
        Self::AdhdWithDepression,
        Self::AdhdWithAnxiety,
        Self::DepressionWithAnxiety,
        Self::ComplexComorbid,
        Self::UnclearSubclinical,
    ];

    /// Stable snake_case identifier, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AdhdPredominant => "adhd_predominant",
            Self::DepressionPredominant => "depression_predominant",
            Self::AnxietyPredominant => "anxiety_predominant",
            Self::AdhdWithDepression => "adhd_with_depression",
            Self::AdhdWithAnxiety => "adhd_with_anxiety",
            Self::DepressionWithAnxiety => "depression_with_anxiety",
            Self::ComplexComorbid => "complex_comorbid",
            Self::UnclearSubclinical => "unclear_subclinical",
        }
    }
}

impl fmt::Display for DiagnosticPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
