use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The kind of response an item accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// Likert-style frequency or severity rating (e.g., 0–4).
    Rating,
    /// Age in whole years.
    Age,
    /// Yes/no answer, scored as 1/0.
    Flag,
    /// Unscaled sum of item ratings.
    Raw,
}

/// Defines the valid range for a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub const LIKERT_0_4: ScoreRange = ScoreRange {
        min: 0.0,
        max: 4.0,
        step: Some(1.0),
    };

    pub const LIKERT_0_3: ScoreRange = ScoreRange {
        min: 0.0,
        max: 3.0,
        step: Some(1.0),
    };

    pub const AGE: ScoreRange = ScoreRange {
        min: 0.0,
        max: 100.0,
        step: Some(1.0),
    };

    pub const FLAG: ScoreRange = ScoreRange {
        min: 0.0,
        max: 1.0,
        step: Some(1.0),
    };

    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// A single scored item within an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    /// Question text as presented to the respondent.
    pub text: String,
    pub score_type: ScoreType,
    pub range: ScoreRange,
}

/// A group of items within an instrument (e.g., ASRS Part A).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub items: Vec<Item>,
    pub composite_score_type: Option<ScoreType>,
    pub composite_range: Option<ScoreRange>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question_id: String,
    pub message: String,
}

pub(crate) fn rating_item(id: &str, text: &str, range: ScoreRange) -> Item {
    Item {
        id: id.to_string(),
        text: text.to_string(),
        score_type: ScoreType::Rating,
        range,
    }
}
