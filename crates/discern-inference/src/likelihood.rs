//! Likelihood calculator: scale-score base values adjusted by the rule
//! judgments through sequential multipliers, clamped last.

use discern_core::models::judgment::{
    Confidence, DifferentialJudgment, ImpairmentJudgment, OnsetJudgment,
};
use discern_core::models::likelihood::{Condition, ConditionLikelihood};
use discern_core::models::scores::ScaleScores;

use crate::config::LikelihoodFactors;

pub fn adhd(
    scores: &ScaleScores,
    onset: &OnsetJudgment,
    impairment: &ImpairmentJudgment,
    vs_depression: &DifferentialJudgment,
    vs_anxiety: &DifferentialJudgment,
    factors: &LikelihoodFactors,
) -> ConditionLikelihood {
    let mut value = if scores.asrs_screening >= factors.asrs_high_min {
        factors.asrs_high_base
    } else if scores.asrs_screening >= factors.asrs_possible_min {
        factors.asrs_possible_base
    } else {
        factors.asrs_low_base
    };

    // Childhood onset is required, so a missing onset is a near-veto.
    let onset_note = if !onset.criterion_met {
        value *= factors.onset_veto;
        "Adult onset makes ADHD very unlikely"
    } else if onset.score >= factors.early_onset_score_min {
        value *= factors.early_onset_boost;
        "Early childhood onset supports ADHD"
    } else {
        "Childhood onset reported but needs verification"
    };

    if !impairment.criterion_met {
        value *= factors.impairment_penalty;
    }

    if vs_depression.favors_rival() {
        value *= factors.depression_favored_penalty;
    } else if vs_depression.favors_adhd() {
        value *= factors.adhd_over_depression_boost;
    }

    if vs_anxiety.favors_rival() {
        value *= factors.anxiety_favored_penalty;
    } else if vs_anxiety.favors_adhd() {
        value *= factors.adhd_over_anxiety_boost;
    }

    finish(
        Condition::Adhd,
        value,
        vec![
            format!("ASRS screening: {}", scores.asrs_interpretation),
            format!("Childhood onset: {}", onset.interpretation),
            format!("Cross-situational impairment: {}", impairment.interpretation),
            format!("Onset assessment: {onset_note}"),
        ],
        factors,
    )
}

pub fn depression(
    scores: &ScaleScores,
    differential: &DifferentialJudgment,
    factors: &LikelihoodFactors,
) -> ConditionLikelihood {
    let base = factors.depression_bases.base_for(scores.phq9_total);
    finish(
        Condition::Depression,
        adjust_for_differential(base, differential, factors),
        vec![
            format!(
                "PHQ-9 score: {} ({})",
                scores.phq9_total, scores.phq9_severity
            ),
            format!("Differential analysis: {}", differential.primary_label()),
        ],
        factors,
    )
}

pub fn anxiety(
    scores: &ScaleScores,
    differential: &DifferentialJudgment,
    factors: &LikelihoodFactors,
) -> ConditionLikelihood {
    let base = factors.anxiety_bases.base_for(scores.gad7_total);
    finish(
        Condition::Anxiety,
        adjust_for_differential(base, differential, factors),
        vec![
            format!("GAD-7 score: {} ({})", scores.gad7_total, scores.gad7_severity),
            format!("Differential analysis: {}", differential.primary_label()),
        ],
        factors,
    )
}

/// Human-readable reading of a likelihood value.
pub fn interpret(value: f64, condition: Condition) -> String {
    if value >= 0.75 {
        format!("High likelihood of {condition} - strong evidence from multiple sources")
    } else if value >= 0.60 {
        format!("Moderate-high likelihood of {condition} - consistent pattern observed")
    } else if value >= 0.40 {
        format!("Moderate likelihood of {condition} - mixed evidence")
    } else if value >= 0.25 {
        format!("Low-moderate likelihood of {condition} - some evidence present")
    } else {
        format!("Low likelihood of {condition} - limited supporting evidence")
    }
}

fn adjust_for_differential(
    base: f64,
    differential: &DifferentialJudgment,
    factors: &LikelihoodFactors,
) -> f64 {
    if differential.favors_rival() {
        base * factors.rival_favored_boost
    } else if differential.favors_adhd() {
        base * factors.adhd_favored_penalty
    } else {
        base
    }
}

fn finish(
    condition: Condition,
    raw: f64,
    contributing_factors: Vec<String>,
    factors: &LikelihoodFactors,
) -> ConditionLikelihood {
    let value = raw.clamp(0.0, 1.0);
    let confidence = if value >= factors.confident_above || value <= factors.confident_below {
        Confidence::High
    } else {
        Confidence::Moderate
    };

    tracing::debug!(condition = %condition, raw, value, "likelihood computed");

    ConditionLikelihood {
        condition,
        value,
        confidence,
        contributing_factors,
        interpretation: interpret(value, condition),
    }
}
