//! Rule evaluator: four independent clinical heuristics over the answers.
//!
//! None of these reads another's output, so evaluation order is irrelevant.

use discern_core::models::answer_set::AnswerSet;
use discern_core::models::judgment::{
    Confidence, DifferentialJudgment, ImpairmentJudgment, Leaning, OnsetJudgment,
};
use discern_core::models::likelihood::Condition;
use discern_core::models::scores::ScaleScores;
use discern_instruments::catalog::ids;

use crate::config::{DifferentialWeights, ImpairmentRules, OnsetRules};

const ONSET_CLINICAL_NOTE: &str = "Criterion B (childhood onset) is REQUIRED for ADHD diagnosis";

/// Childhood onset (Criterion B).
pub fn evaluate_onset(answers: &AnswerSet, rules: &OnsetRules) -> OnsetJudgment {
    let onset_age = answers.value_or(ids::SYMPTOM_ONSET_AGE, rules.default_onset_age);
    let childhood_impairment = answers.value(ids::CHILDHOOD_IMPAIRMENT);

    let (mut score, confidence, interpretation) = if onset_age <= rules.early_onset_age {
        (
            rules.early_score,
            Confidence::High,
            "Early childhood onset strongly supports ADHD",
        )
    } else if onset_age <= rules.criterion_onset_age {
        (
            rules.childhood_score,
            Confidence::Moderate,
            "Childhood onset consistent with ADHD",
        )
    } else if onset_age <= rules.adolescent_onset_age {
        (
            rules.adolescent_score,
            Confidence::Low,
            "Adolescent onset less typical for ADHD; consider mood/anxiety",
        )
    } else {
        (
            rules.adult_score,
            Confidence::High,
            "Adult onset rules out primary ADHD; likely depression/anxiety",
        )
    };

    if childhood_impairment >= rules.childhood_impairment_min {
        score += rules.childhood_impairment_bonus;
    }

    OnsetJudgment {
        onset_age,
        score,
        confidence,
        interpretation: interpretation.to_string(),
        criterion_met: onset_age <= rules.criterion_onset_age,
        childhood_symptoms: answers.value(ids::CHILDHOOD_SYMPTOMS),
        clinical_note: ONSET_CLINICAL_NOTE.to_string(),
    }
}

/// Cross-situational impairment (Criterion C).
pub fn evaluate_impairment(answers: &AnswerSet, rules: &ImpairmentRules) -> ImpairmentJudgment {
    let impaired_contexts = answers.count_at_least(&ids::IMPAIRMENT_CONTEXTS, rules.significant_min);

    let (confidence, interpretation) = if impaired_contexts >= rules.pervasive_contexts {
        (
            Confidence::High,
            "Pervasive impairment across multiple contexts supports ADHD",
        )
    } else if impaired_contexts >= rules.criterion_contexts {
        (
            Confidence::Moderate,
            "Cross-situational impairment meets diagnostic threshold",
        )
    } else if impaired_contexts >= 1 {
        (
            Confidence::Moderate,
            "Single-context impairment suggests situational stress, not ADHD",
        )
    } else {
        (
            Confidence::High,
            "Minimal reported impairment; subclinical presentation",
        )
    };

    ImpairmentJudgment {
        impaired_contexts,
        criterion_met: impaired_contexts >= rules.criterion_contexts,
        confidence,
        interpretation: interpretation.to_string(),
    }
}

/// ADHD against depression: temporal pattern, mood symptoms, and whether
/// concentration tracks mood.
pub fn adhd_vs_depression(
    answers: &AnswerSet,
    scores: &ScaleScores,
    weights: &DifferentialWeights,
) -> DifferentialJudgment {
    let lifelong = answers.value(ids::LIFELONG_SYMPTOMS);
    let episodic = answers.value(ids::EPISODIC_SYMPTOMS);
    let anhedonia = answers.value(ids::ANHEDONIA);
    let sadness = answers.value(ids::DEPRESSED_MOOD);
    let restlessness = answers.value(ids::RESTLESSNESS);
    let anxiety_level = answers.value(ids::ANXIETY_LEVEL);
    let mood_linked = answers.value(ids::CONCENTRATION_WORSE_WHEN_SAD);

    let endorsed = |v: f64| v >= weights.endorsed_min;
    let mut adhd = 0.0;
    let mut depression = 0.0;

    if endorsed(lifelong) {
        adhd += weights.lifelong_pattern;
    }
    if endorsed(episodic) {
        depression += weights.episodic_pattern;
    }
    if endorsed(anhedonia) || endorsed(sadness) {
        depression += weights.mood_symptoms;
    }
    if endorsed(restlessness) && anxiety_level < weights.calm_anxiety_max {
        adhd += weights.restlessness;
    }
    if endorsed(mood_linked) {
        depression += weights.mood_linked_concentration;
        adhd -= weights.mood_linked_adhd_penalty;
    }

    let (adhd_bonus, depression_bonus) =
        scale_lead(f64::from(scores.asrs_screening), scores.phq9_total, weights);
    adhd += adhd_bonus;
    depression += depression_bonus;

    let present = |v: f64| v >= weights.present_min;
    let indicators = vec![
        format!(
            "Temporal pattern: {}",
            if endorsed(lifelong) { "lifelong" } else { "episodic" }
        ),
        format!(
            "Mood symptoms present: {}",
            yes_no(present(anhedonia) || present(sadness))
        ),
        format!("Concentration linked to mood: {}", yes_no(present(mood_linked))),
    ];

    decide(Condition::Depression, adhd, depression, indicators, weights)
}

/// ADHD against anxiety: where the mind wanders, physical symptoms,
/// impulsivity, and avoidance.
pub fn adhd_vs_anxiety(
    answers: &AnswerSet,
    scores: &ScaleScores,
    weights: &DifferentialWeights,
) -> DifferentialJudgment {
    let random_thoughts = answers.value(ids::MIND_RANDOM_THOUGHTS);
    let worries = answers.value(ids::MIND_FULL_OF_WORRIES);
    let physical = answers.value(ids::PHYSICAL_ANXIETY_SYMPTOMS);
    let impulsivity = answers.value(ids::IMPULSIVITY_SCORE);
    let avoidance = answers.value(ids::AVOIDANCE_BEHAVIORS);

    let endorsed = |v: f64| v >= weights.endorsed_min;
    let mut adhd = 0.0;
    let mut anxiety = 0.0;

    if endorsed(random_thoughts) {
        adhd += weights.random_thoughts;
    }
    if endorsed(worries) {
        anxiety += weights.worry_content;
    }
    if endorsed(physical) {
        anxiety += weights.physical_anxiety;
    }
    if endorsed(impulsivity) {
        adhd += weights.impulsivity;
    }
    if endorsed(avoidance) {
        anxiety += weights.avoidance;
    }

    let (adhd_bonus, anxiety_bonus) =
        scale_lead(f64::from(scores.asrs_screening), scores.gad7_total, weights);
    adhd += adhd_bonus;
    anxiety += anxiety_bonus;

    let present = |v: f64| v >= weights.present_min;
    let indicators = vec![
        format!(
            "Thought pattern: {}",
            if endorsed(random_thoughts) { "random" } else { "worry-focused" }
        ),
        format!("Physical anxiety symptoms: {}", yes_no(present(physical))),
        format!("Impulsivity present: {}", yes_no(present(impulsivity))),
    ];

    decide(Condition::Anxiety, adhd, anxiety, indicators, weights)
}

/// Bonus for whichever scale clearly leads. The ASRS side uses the Part A
/// screening count, not the full total.
fn scale_lead(asrs: f64, rival: f64, weights: &DifferentialWeights) -> (f64, f64) {
    if asrs > rival * weights.scale_lead_ratio {
        (weights.scale_lead_bonus, 0.0)
    } else if rival > asrs * weights.scale_lead_ratio {
        (0.0, weights.scale_lead_bonus)
    } else {
        (0.0, 0.0)
    }
}

fn decide(
    rival: Condition,
    adhd_weight: f64,
    rival_weight: f64,
    indicators: Vec<String>,
    weights: &DifferentialWeights,
) -> DifferentialJudgment {
    let contested = |losing: f64| {
        if losing > weights.contested_weight {
            Confidence::Moderate
        } else {
            Confidence::High
        }
    };

    let (leaning, confidence) = if adhd_weight > rival_weight * weights.decision_ratio {
        (Leaning::Adhd, contested(rival_weight))
    } else if rival_weight > adhd_weight * weights.decision_ratio {
        (Leaning::Rival, contested(adhd_weight))
    } else {
        (Leaning::Comorbid, Confidence::Moderate)
    };

    tracing::debug!(
        rival = %rival,
        adhd_weight,
        rival_weight,
        leaning = ?leaning,
        "differential decided"
    );

    DifferentialJudgment {
        rival,
        leaning,
        adhd_weight,
        rival_weight,
        confidence,
        indicators,
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
