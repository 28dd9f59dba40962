//! Clinical reasoning narrative, assembled as structured sections.

use discern_core::models::evaluation::{Narrative, NarrativeSection};
use discern_core::models::judgment::{DifferentialJudgment, Judgments};
use discern_core::models::pattern::DiagnosticPattern;
use discern_core::models::scores::ScaleScores;
use discern_core::models::symptoms::SymptomProfile;

pub const SCREENING_RESULTS: &str = "Screening Scale Results";
pub const CRITERIA_ANALYSIS: &str = "Diagnostic Criteria Analysis";
pub const DIFFERENTIAL: &str = "Differential Diagnosis Considerations";
pub const SYMPTOM_PROFILE: &str = "Symptom Profile";
pub const OVERALL_PATTERN: &str = "Overall Clinical Pattern";
pub const IMPORTANT_NOTES: &str = "Important Notes";

pub fn build(
    scores: &ScaleScores,
    judgments: &Judgments,
    profile: &SymptomProfile,
    pattern: DiagnosticPattern,
) -> Narrative {
    let sections = vec![
        section(
            SCREENING_RESULTS,
            vec![
                format!("- **ASRS (ADHD)**: {}", scores.asrs_interpretation),
                format!("- **PHQ-9 (Depression)**: {}", scores.phq9_severity),
                format!("- **GAD-7 (Anxiety)**: {}", scores.gad7_severity),
            ],
        ),
        section(
            CRITERIA_ANALYSIS,
            vec![
                format!(
                    "**Childhood Onset (DSM Criterion B)**: {}",
                    judgments.onset.interpretation
                ),
                format!(
                    "**Cross-Situational Impairment (Criterion C)**: {}",
                    judgments.impairment.interpretation
                ),
            ],
        ),
        section(
            DIFFERENTIAL,
            vec![
                differential_line("ADHD vs Depression", &judgments.adhd_vs_depression),
                differential_line("ADHD vs Anxiety", &judgments.adhd_vs_anxiety),
            ],
        ),
        section(
            SYMPTOM_PROFILE,
            vec![
                format!(
                    "- Inattentive symptoms endorsed: {} of 9 (threshold {})",
                    profile.inattentive_count, profile.required_count
                ),
                format!(
                    "- Hyperactive-impulsive symptoms endorsed: {} of 9 (threshold {})",
                    profile.hyperactive_impulsive_count, profile.required_count
                ),
                format!("- {}", profile.presentation.label()),
            ],
        ),
        section(
            OVERALL_PATTERN,
            vec![format!("Pattern identified: **{pattern}**")],
        ),
        section(
            IMPORTANT_NOTES,
            vec![
                "- This screening provides preliminary information only".to_string(),
                "- Formal diagnosis requires comprehensive clinical evaluation".to_string(),
                "- Multiple conditions can co-occur".to_string(),
                "- Treatment should be individualized based on full assessment".to_string(),
            ],
        ),
    ];

    Narrative { sections }
}

fn differential_line(title: &str, judgment: &DifferentialJudgment) -> String {
    format!(
        "**{title}**: Primary pattern suggests {} (confidence: {})",
        judgment.primary_label(),
        judgment.confidence
    )
}

fn section(heading: &str, lines: Vec<String>) -> NarrativeSection {
    NarrativeSection {
        heading: heading.to_string(),
        lines,
    }
}
