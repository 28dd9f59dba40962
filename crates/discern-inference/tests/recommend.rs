use discern_core::models::answer_set::AnswerSet;
use discern_core::models::judgment::{Confidence, OnsetJudgment};
use discern_core::models::likelihood::{Condition, ConditionLikelihood};
use discern_core::models::recommendation::{Priority, Recommendation, RecommendationCategory};
use discern_core::models::scores::{
    AnxietySeverity, AsrsScreening, DepressionSeverity, ScaleScores,
};
use discern_inference::config::RecommendationThresholds;
use discern_inference::recommend::{RecommendationInputs, recommendations};
use discern_inference::{Engine, EngineConfig};
use discern_instruments::catalog::ids;

fn likelihood(condition: Condition, value: f64) -> ConditionLikelihood {
    ConditionLikelihood {
        condition,
        value,
        confidence: Confidence::Moderate,
        contributing_factors: Vec::new(),
        interpretation: String::new(),
    }
}

fn onset(criterion_met: bool) -> OnsetJudgment {
    OnsetJudgment {
        onset_age: if criterion_met { 8.0 } else { 25.0 },
        score: if criterion_met { 2.0 } else { 0.0 },
        confidence: Confidence::Moderate,
        interpretation: String::new(),
        criterion_met,
        childhood_symptoms: 0.0,
        clinical_note: String::new(),
    }
}

fn scores(phq9_total: f64) -> ScaleScores {
    ScaleScores {
        asrs_total: 0.0,
        asrs_screening: 0,
        asrs_interpretation: AsrsScreening::BelowThreshold,
        phq9_total,
        phq9_severity: DepressionSeverity::Moderate,
        gad7_total: 0.0,
        gad7_severity: AnxietySeverity::Minimal,
    }
}

fn run(adhd: f64, depression: f64, anxiety: f64, phq9_total: f64, onset_met: bool) -> Vec<Recommendation> {
    recommendations(
        &RecommendationInputs {
            adhd: &likelihood(Condition::Adhd, adhd),
            depression: &likelihood(Condition::Depression, depression),
            anxiety: &likelihood(Condition::Anxiety, anxiety),
            scores: &scores(phq9_total),
            onset: &onset(onset_met),
        },
        &RecommendationThresholds::default(),
    )
}

fn titles(recs: &[Recommendation]) -> Vec<&str> {
    recs.iter().map(|r| r.title.as_str()).collect()
}

#[test]
fn below_every_threshold_only_evaluation_is_recommended() {
    let recs = run(0.49, 0.59, 0.59, 20.0, true);
    assert_eq!(titles(&recs), vec!["Professional Evaluation Recommended"]);
    assert_eq!(recs[0].priority, Priority::High);
    assert_eq!(recs[0].category, RecommendationCategory::Evaluation);
}

#[test]
fn adhd_with_childhood_onset_gets_specialist_referral() {
    let recs = run(0.8, 0.1, 0.1, 0.0, true);
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[1].title, "ADHD Specialist Evaluation");
    assert_eq!(recs[1].category, RecommendationCategory::SpecialistReferral);
}

#[test]
fn adhd_without_childhood_onset_needs_history_clarification() {
    let recs = run(0.5, 0.1, 0.1, 0.0, false);
    assert_eq!(
        titles(&recs),
        vec![
            "Professional Evaluation Recommended",
            "Childhood History Needs Clarification",
        ]
    );
    assert_eq!(recs[1].priority, Priority::High);
    assert_eq!(recs[1].category, RecommendationCategory::DiagnosticClarification);
}

#[test]
fn phq9_below_fifteen_gets_treatment_options_not_urgent_care() {
    let recs = run(0.1, 0.65, 0.1, 14.0, true);
    assert_eq!(recs[1].title, "Depression Treatment Options");
    assert_eq!(recs[1].priority, Priority::Moderate);
    assert_eq!(recs[1].category, RecommendationCategory::Treatment);

    let recs = run(0.1, 0.65, 0.1, 15.0, true);
    assert_eq!(recs[1].title, "Significant Depressive Symptoms");
    assert_eq!(recs[1].category, RecommendationCategory::UrgentCare);
}

#[test]
fn anxiety_at_threshold_gets_management() {
    let recs = run(0.1, 0.1, 0.6, 0.0, true);
    assert_eq!(titles(&recs)[1], "Anxiety Management");
    assert_eq!(recs[1].priority, Priority::Moderate);
    assert_eq!(recs[1].category, RecommendationCategory::Treatment);
}

#[test]
fn every_branch_appears_in_fixed_order() {
    let recs = run(0.7, 0.7, 0.7, 10.0, false);
    assert_eq!(
        titles(&recs),
        vec![
            "Professional Evaluation Recommended",
            "Childhood History Needs Clarification",
            "Depression Treatment Options",
            "Anxiety Management",
            "Multiple Conditions May Be Present",
        ]
    );
    let priorities: Vec<Priority> = recs.iter().map(|r| r.priority).collect();
    assert_eq!(
        priorities,
        vec![
            Priority::High,
            Priority::High,
            Priority::Moderate,
            Priority::Moderate,
            Priority::High,
        ]
    );
}

#[test]
fn comorbidity_note_needs_adhd_and_one_other_condition() {
    let recs = run(0.5, 0.5, 0.1, 0.0, true);
    assert_eq!(recs.last().unwrap().title, "Multiple Conditions May Be Present");

    let recs = run(0.5, 0.1, 0.5, 0.0, true);
    assert_eq!(recs.last().unwrap().category, RecommendationCategory::ComprehensiveCare);

    let recs = run(0.49, 0.9, 0.9, 0.0, true);
    assert!(recs.iter().all(|r| r.category != RecommendationCategory::ComprehensiveCare));
}

#[test]
fn softened_onset_veto_lets_late_onset_reach_clarification() {
    let mut config = EngineConfig::default();
    config.likelihood.onset_veto = 1.0;
    let engine = Engine::new(config).expect("valid config");

    let mut answers: AnswerSet = (1..=6).map(|i| (format!("asrs_{i}"), 4.0)).collect();
    answers.insert(ids::SYMPTOM_ONSET_AGE.to_string(), 30.0);
    answers.insert(ids::WORK_IMPAIRMENT.to_string(), 3.0);
    answers.insert(ids::HOME_IMPAIRMENT.to_string(), 3.0);

    let result = engine.evaluate(&answers, &Default::default());
    assert!(!result.judgments.onset.criterion_met);
    assert!(result.adhd_likelihood.value >= 0.5);
    assert_eq!(
        titles(&result.recommendations),
        vec![
            "Professional Evaluation Recommended",
            "Childhood History Needs Clarification",
        ]
    );
}
