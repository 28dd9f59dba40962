use discern_core::models::judgment::OnsetJudgment;
use discern_core::models::likelihood::ConditionLikelihood;
use discern_core::models::recommendation::{Priority, Recommendation, RecommendationCategory};
use discern_core::models::scores::ScaleScores;

use crate::config::RecommendationThresholds;

/// Everything the recommendation rules look at.
pub struct RecommendationInputs<'a> {
    pub adhd: &'a ConditionLikelihood,
    pub depression: &'a ConditionLikelihood,
    pub anxiety: &'a ConditionLikelihood,
    pub scores: &'a ScaleScores,
    pub onset: &'a OnsetJudgment,
}

/// Build the ordered recommendation list. The professional evaluation
/// entry is always first; nothing is deduplicated.
pub fn recommendations(
    inputs: &RecommendationInputs<'_>,
    thresholds: &RecommendationThresholds,
) -> Vec<Recommendation> {
    let mut out = vec![recommendation(
        Priority::High,
        RecommendationCategory::Evaluation,
        "Professional Evaluation Recommended",
        "This screening suggests you may benefit from a comprehensive evaluation by a mental health professional (psychiatrist, psychologist, or specialized clinician).",
        "Screening tools provide preliminary information but cannot replace clinical diagnosis.",
    )];

    if inputs.adhd.value >= thresholds.adhd_min {
        if inputs.onset.criterion_met {
            out.push(recommendation(
                Priority::High,
                RecommendationCategory::SpecialistReferral,
                "ADHD Specialist Evaluation",
                "Consider evaluation by a clinician experienced in adult ADHD (psychiatrist, clinical psychologist, or ADHD specialist).",
                "Pattern consistent with possible ADHD.",
            ));
        } else {
            out.push(recommendation(
                Priority::High,
                RecommendationCategory::DiagnosticClarification,
                "Childhood History Needs Clarification",
                "Your current symptoms suggest ADHD, but childhood onset information is unclear. Bring school report cards, speak with parents, or recall childhood difficulties.",
                "DSM-5-TR requires childhood onset for ADHD diagnosis.",
            ));
        }
    }

    if inputs.depression.value >= thresholds.depression_min {
        if inputs.scores.phq9_total >= thresholds.urgent_phq9_min {
            out.push(recommendation(
                Priority::High,
                RecommendationCategory::UrgentCare,
                "Significant Depressive Symptoms",
                "Your depression screening suggests moderate-severe symptoms. Consider seeking evaluation soon, especially if symptoms are worsening or affecting daily functioning.",
                "PHQ-9 score indicates clinically significant depression.",
            ));
        } else {
            out.push(recommendation(
                Priority::Moderate,
                RecommendationCategory::Treatment,
                "Depression Treatment Options",
                "Discuss treatment options with a mental health provider. Evidence-based treatments include therapy (CBT, IPT) and/or medication.",
                "Depressive symptoms are present and may benefit from treatment.",
            ));
        }
    }

    if inputs.anxiety.value >= thresholds.anxiety_min {
        out.push(recommendation(
            Priority::Moderate,
            RecommendationCategory::Treatment,
            "Anxiety Management",
            "Consider anxiety-focused treatment such as Cognitive Behavioral Therapy (CBT) or medication evaluation with a psychiatrist.",
            "Significant anxiety symptoms detected.",
        ));
    }

    if inputs.adhd.value >= thresholds.comorbid_adhd_min
        && (inputs.depression.value >= thresholds.comorbid_other_min
            || inputs.anxiety.value >= thresholds.comorbid_other_min)
    {
        out.push(recommendation(
            Priority::High,
            RecommendationCategory::ComprehensiveCare,
            "Multiple Conditions May Be Present",
            "Your screening suggests possible ADHD along with depression and/or anxiety. This is common - about 50% of adults with ADHD have comorbid mood/anxiety disorders. Comprehensive treatment addressing all conditions is important.",
            "Comorbid conditions require integrated treatment approach.",
        ));
    }

    out
}

fn recommendation(
    priority: Priority,
    category: RecommendationCategory,
    title: &str,
    description: &str,
    rationale: &str,
) -> Recommendation {
    Recommendation {
        priority,
        category,
        title: title.to_string(),
        description: description.to_string(),
        rationale: rationale.to_string(),
    }
}
