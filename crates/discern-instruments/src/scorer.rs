//! Scale scorer: raw answers to instrument totals and severity bands.
//!
//! Missing items contribute zero. Nothing here can fail.

use discern_core::models::answer_set::AnswerSet;
use discern_core::models::scores::{AnxietySeverity, AsrsScreening, DepressionSeverity, ScaleScores};
use discern_core::models::symptoms::{Presentation, SymptomProfile};

use crate::instruments::{asrs, gad7, phq9};
use crate::Instrument;

/// ASRS Part A items must be rated at least "Sometimes" to count.
const ASRS_SCREEN_ITEM_MIN: f64 = 2.0;

/// An ASRS item counts as an endorsed DSM-5 symptom from "Often" upward.
const SYMPTOM_ENDORSED_MIN: f64 = 3.0;

pub fn score(answers: &AnswerSet) -> ScaleScores {
    let asrs_screening = answers.count_at_least(&asrs::PART_A, ASRS_SCREEN_ITEM_MIN);
    let phq9_total = phq9::Phq9.total(answers);
    let gad7_total = gad7::Gad7.total(answers);

    ScaleScores {
        asrs_total: asrs::Asrs.total(answers),
        asrs_screening,
        asrs_interpretation: asrs_screening_band(asrs_screening),
        phq9_total,
        phq9_severity: phq9_severity(phq9_total),
        gad7_total,
        gad7_severity: gad7_severity(gad7_total),
    }
}

pub fn asrs_screening_band(screening: u32) -> AsrsScreening {
    match screening {
        4.. => AsrsScreening::HighlyConsistent,
        2..=3 => AsrsScreening::Possible,
        _ => AsrsScreening::BelowThreshold,
    }
}

pub fn phq9_severity(total: f64) -> DepressionSeverity {
    if total >= 20.0 {
        DepressionSeverity::Severe
    } else if total >= 15.0 {
        DepressionSeverity::ModeratelySevere
    } else if total >= 10.0 {
        DepressionSeverity::Moderate
    } else if total >= 5.0 {
        DepressionSeverity::Mild
    } else {
        DepressionSeverity::Minimal
    }
}

pub fn gad7_severity(total: f64) -> AnxietySeverity {
    if total >= 15.0 {
        AnxietySeverity::Severe
    } else if total >= 10.0 {
        AnxietySeverity::Moderate
    } else if total >= 5.0 {
        AnxietySeverity::Mild
    } else {
        AnxietySeverity::Minimal
    }
}

/// DSM-5 symptom count needed per domain: 5 from age 17, otherwise 6.
pub fn required_symptom_count(age: u32) -> u32 {
    if age >= 17 { 5 } else { 6 }
}

/// Count endorsed inattentive and hyperactive-impulsive ASRS symptoms and
/// map them to a DSM-5 presentation for the respondent's age group.
pub fn symptom_profile(answers: &AnswerSet, age: u32) -> SymptomProfile {
    let inattentive_count = answers.count_at_least(&asrs::INATTENTIVE, SYMPTOM_ENDORSED_MIN);
    let hyperactive_impulsive_count =
        answers.count_at_least(&asrs::HYPERACTIVE_IMPULSIVE, SYMPTOM_ENDORSED_MIN);
    let required_count = required_symptom_count(age);

    let presentation = match (
        inattentive_count >= required_count,
        hyperactive_impulsive_count >= required_count,
    ) {
        (true, true) => Presentation::Combined,
        (true, false) => Presentation::PredominantlyInattentive,
        (false, true) => Presentation::PredominantlyHyperactiveImpulsive,
        (false, false) => Presentation::BelowThreshold,
    };

    SymptomProfile {
        inattentive_count,
        hyperactive_impulsive_count,
        required_count,
        presentation,
    }
}
