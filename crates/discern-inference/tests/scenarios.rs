use discern_core::models::answer_set::AnswerSet;
use discern_core::models::judgment::{Confidence, Leaning};
use discern_core::models::pattern::DiagnosticPattern;
use discern_core::models::recommendation::RecommendationCategory;
use discern_core::models::scores::{AsrsScreening, DepressionSeverity};
use discern_core::models::user::UserContext;
use discern_inference::{DISCLAIMER, Engine};
use discern_instruments::catalog::{self, ids};
use discern_instruments::instruments::{asrs, gad7, phq9};

fn evaluate(answers: &AnswerSet) -> discern_core::models::evaluation::EvaluationResult {
    Engine::default().evaluate(answers, &UserContext { age: 30 })
}

/// Every catalog question answered 0, except the onset age which is left
/// unanswered and so defaults to adulthood.
fn all_zero() -> AnswerSet {
    catalog::pages()
        .iter()
        .flat_map(|p| &p.questions)
        .filter(|q| q.id != ids::SYMPTOM_ONSET_AGE)
        .map(|q| (q.id.as_str(), 0.0))
        .collect()
}

#[test]
fn all_zero_answers_are_subclinical() {
    let result = evaluate(&all_zero());

    assert_eq!(result.scale_scores.asrs_screening, 0);
    assert_eq!(result.scale_scores.phq9_total, 0.0);
    assert_eq!(result.scale_scores.gad7_total, 0.0);
    assert_eq!(result.pattern, DiagnosticPattern::UnclearSubclinical);
    assert_eq!(
        result.pattern_description,
        "Subclinical symptoms - monitoring may be appropriate"
    );

    // 0.15 base, ×0.2 for the missing childhood onset, ×0.5 for no impairment.
    assert!(!result.judgments.onset.criterion_met);
    assert!(result.adhd_likelihood.value <= 0.03);
    assert!((result.adhd_likelihood.value - 0.015).abs() < 1e-9);
    assert_eq!(result.adhd_likelihood.confidence, Confidence::High);

    assert_eq!(result.recommendations.len(), 1);
    assert_eq!(
        result.recommendations[0].title,
        "Professional Evaluation Recommended"
    );
}

#[test]
fn strong_childhood_adhd_without_mood_symptoms_is_adhd_predominant() {
    let mut answers: AnswerSet = asrs::PART_A
        .iter()
        .chain(asrs::PART_B.iter())
        .map(|id| (*id, 4.0))
        .collect();
    answers.insert(ids::SYMPTOM_ONSET_AGE, 5.0);
    answers.insert(ids::CHILDHOOD_SYMPTOMS, 4.0);
    for id in ids::IMPAIRMENT_CONTEXTS {
        answers.insert(id, 4.0);
    }
    for id in phq9::ITEMS.iter().chain(gad7::ITEMS.iter()) {
        answers.insert(*id, 0.0);
    }

    let result = evaluate(&answers);

    assert_eq!(result.scale_scores.asrs_screening, 6);
    assert_eq!(
        result.scale_scores.asrs_interpretation,
        AsrsScreening::HighlyConsistent
    );
    assert!(result.judgments.onset.criterion_met);
    assert_eq!(result.judgments.onset.score, 3.0);
    assert_eq!(result.judgments.impairment.impaired_contexts, 4);
    assert_eq!(result.judgments.adhd_vs_depression.leaning, Leaning::Adhd);
    assert_eq!(result.judgments.adhd_vs_anxiety.leaning, Leaning::Adhd);

    assert_eq!(result.adhd_likelihood.value, 1.0);
    assert!((result.depression_likelihood.value - 0.06).abs() < 1e-9);
    assert!((result.anxiety_likelihood.value - 0.06).abs() < 1e-9);

    assert_eq!(result.pattern, DiagnosticPattern::AdhdPredominant);
    assert_eq!(
        result.pattern_description,
        "ADHD presentation without significant comorbidity"
    );

    let categories: Vec<_> = result.recommendations.iter().map(|r| r.category).collect();
    assert_eq!(
        categories,
        vec![
            RecommendationCategory::Evaluation,
            RecommendationCategory::SpecialistReferral,
        ]
    );
}

#[test]
fn severe_phq9_alone_is_depression_predominant() {
    let answers: AnswerSet = phq9::ITEMS.iter().map(|id| (*id, 3.0)).collect();

    let result = evaluate(&answers);

    assert_eq!(result.scale_scores.phq9_total, 27.0);
    assert_eq!(result.scale_scores.phq9_severity, DepressionSeverity::Severe);
    assert_eq!(result.scale_scores.phq9_severity.label(), "Severe depression");
    assert_eq!(
        result.judgments.adhd_vs_depression.leaning,
        Leaning::Rival
    );
    assert_eq!(result.depression_likelihood.value, 1.0);
    assert!(result.adhd_likelihood.value < 0.3);
    assert!(result.anxiety_likelihood.value < 0.3);

    assert_eq!(result.pattern, DiagnosticPattern::DepressionPredominant);
    assert_eq!(result.pattern_description, "Primary depressive disorder");
    assert!(
        result
            .recommendations
            .iter()
            .any(|r| r.category == RecommendationCategory::UrgentCare)
    );
}

#[test]
fn empty_answer_set_does_not_fail() {
    let result = evaluate(&AnswerSet::new());

    assert_eq!(result.scale_scores.asrs_total, 0.0);
    assert_eq!(result.scale_scores.phq9_total, 0.0);
    assert_eq!(result.scale_scores.gad7_total, 0.0);
    assert_eq!(result.judgments.onset.onset_age, 18.0);
    assert_eq!(result.pattern, DiagnosticPattern::UnclearSubclinical);
    assert_eq!(result.disclaimer, DISCLAIMER);
}

#[test]
fn comorbid_presentation_adds_comprehensive_care() {
    let mut answers: AnswerSet = asrs::PART_A.iter().map(|id| (*id, 4.0)).collect();
    answers.insert(ids::SYMPTOM_ONSET_AGE, 10.0);
    for id in ids::IMPAIRMENT_CONTEXTS {
        answers.insert(id, 3.0);
    }
    for id in phq9::ITEMS {
        answers.insert(id, 2.0);
    }
    answers.insert(ids::LIFELONG_SYMPTOMS, 4.0);
    answers.insert(ids::EPISODIC_SYMPTOMS, 4.0);
    answers.insert(ids::RESTLESSNESS, 4.0);

    let result = evaluate(&answers);

    // ADHD 2.0 + 1.2 against depression 2.0 + 1.0 (PHQ-9 18 leads the
    // screening count of 6): neither clears the 1.3 ratio.
    assert_eq!(
        result.judgments.adhd_vs_depression.leaning,
        Leaning::Comorbid
    );
    // 0.75, no early-onset boost, ×1.1 for the anxiety differential.
    assert!((result.adhd_likelihood.value - 0.825).abs() < 1e-9);
    assert_eq!(result.depression_likelihood.value, 0.80);

    assert_eq!(result.pattern, DiagnosticPattern::AdhdWithDepression);
    let titles: Vec<_> = result.recommendations.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Professional Evaluation Recommended",
            "ADHD Specialist Evaluation",
            "Significant Depressive Symptoms",
            "Multiple Conditions May Be Present",
        ]
    );
}

#[test]
fn narrative_sections_are_in_order() {
    let result = evaluate(&all_zero());
    let headings: Vec<_> = result
        .narrative
        .sections
        .iter()
        .map(|s| s.heading.as_str())
        .collect();
    assert_eq!(
        headings,
        vec![
            "Screening Scale Results",
            "Diagnostic Criteria Analysis",
            "Differential Diagnosis Considerations",
            "Symptom Profile",
            "Overall Clinical Pattern",
            "Important Notes",
        ]
    );

    let markdown = result.narrative.to_markdown();
    assert!(markdown.starts_with("## Clinical Assessment Summary\n\n### Screening Scale Results\n"));
    assert!(markdown.contains("Pattern identified: **unclear_subclinical**"));
    assert!(markdown.contains("**ADHD vs Depression**: Primary pattern suggests Comorbid (confidence: moderate)"));
}
