use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::likelihood::Condition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Confidence {
    High,
    Moderate,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
        })
    }
}

/// Childhood onset (DSM-5 Criterion B).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OnsetJudgment {
    /// Reported age at which difficulties were first noticed.
    pub onset_age: f64,
    /// Heuristic weight of evidence for ADHD, not a probability.
    pub score: f64,
    pub confidence: Confidence,
    pub interpretation: String,
    /// Onset at or before the criterion age.
    pub criterion_met: bool,
    pub childhood_symptoms: f64,
    pub clinical_note: String,
}

/// Cross-situational impairment (DSM-5 Criterion C).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImpairmentJudgment {
    /// Number of life contexts with significant impairment (0–4).
    pub impaired_contexts: u32,
    pub criterion_met: bool,
    pub confidence: Confidence,
    pub interpretation: String,
}

/// Which explanation a differential comparison favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Leaning {
    Adhd,
    Rival,
    Comorbid,
}

/// Weighted comparison of ADHD against one rival condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DifferentialJudgment {
    pub rival: Condition,
    pub leaning: Leaning,
    pub adhd_weight: f64,
    pub rival_weight: f64,
    pub confidence: Confidence,
    /// Descriptive observations behind the weights, for the narrative.
    pub indicators: Vec<String>,
}

impl DifferentialJudgment {
    /// Human-readable name of the favored explanation.
    pub fn primary_label(&self) -> &'static str {
        match self.leaning {
            Leaning::Adhd => Condition::Adhd.label(),
            Leaning::Rival => self.rival.label(),
            Leaning::Comorbid => "Comorbid",
        }
    }

    pub fn favors_adhd(&self) -> bool {
        self.leaning == Leaning::Adhd
    }

    pub fn favors_rival(&self) -> bool {
        self.leaning == Leaning::Rival
    }
}

/// All rule-evaluator outputs for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Judgments {
    pub onset: OnsetJudgment,
    pub impairment: ImpairmentJudgment,
    pub adhd_vs_depression: DifferentialJudgment,
    pub adhd_vs_anxiety: DifferentialJudgment,
}
