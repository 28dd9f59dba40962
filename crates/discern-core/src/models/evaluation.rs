use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::judgment::Judgments;
use super::likelihood::ConditionLikelihood;
use super::pattern::DiagnosticPattern;
use super::recommendation::Recommendation;
use super::scores::ScaleScores;
use super::symptoms::SymptomProfile;

/// The complete output of one evaluation.
/// Every field is addressable by name in a report template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationResult {
    pub scale_scores: ScaleScores,
    pub symptom_profile: SymptomProfile,
    pub judgments: Judgments,
    pub adhd_likelihood: ConditionLikelihood,
    pub depression_likelihood: ConditionLikelihood,
    pub anxiety_likelihood: ConditionLikelihood,
    pub pattern: DiagnosticPattern,
    pub pattern_description: String,
    pub narrative: Narrative,
    pub recommendations: Vec<Recommendation>,
    pub disclaimer: String,
}

/// Clinical reasoning explanation, kept as structured sections so a
/// frontend can lay it out itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Narrative {
    pub sections: Vec<NarrativeSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NarrativeSection {
    pub heading: String,
    pub lines: Vec<String>,
}

impl Narrative {
    pub fn section(&self, heading: &str) -> Option<&NarrativeSection> {
        self.sections.iter().find(|s| s.heading == heading)
    }

    /// Render as Markdown under a "Clinical Assessment Summary" heading.
    pub fn to_markdown(&self) -> String {
        let mut output = String::from("## Clinical Assessment Summary\n\n");
        for section in &self.sections {
            output.push_str(&format!("### {}\n", section.heading));
            for line in &section.lines {
                output.push_str(line);
                output.push('\n');
            }
            output.push('\n');
        }
        output
    }
}
