use discern_core::models::answer_set::AnswerSet;
use discern_core::models::scores::{AnxietySeverity, AsrsScreening, DepressionSeverity};
use discern_core::models::symptoms::Presentation;
use discern_instruments::instruments::{asrs, gad7, phq9};
use discern_instruments::scorer::{self, score, symptom_profile};
use discern_instruments::Instrument;
use proptest::prelude::*;

fn all(ids: &[&str], value: f64) -> AnswerSet {
    ids.iter().map(|id| (*id, value)).collect()
}

#[test]
fn empty_answers_score_zero() {
    let scores = score(&AnswerSet::new());
    assert_eq!(scores.asrs_total, 0.0);
    assert_eq!(scores.asrs_screening, 0);
    assert_eq!(scores.asrs_interpretation, AsrsScreening::BelowThreshold);
    assert_eq!(scores.phq9_total, 0.0);
    assert_eq!(scores.phq9_severity, DepressionSeverity::Minimal);
    assert_eq!(scores.gad7_total, 0.0);
    assert_eq!(scores.gad7_severity, AnxietySeverity::Minimal);
}

#[test]
fn asrs_screening_counts_part_a_items_at_two_or_more() {
    let mut answers = all(&asrs::PART_A, 1.0);
    answers.insert("asrs_1", 2.0);
    answers.insert("asrs_2", 4.0);
    // Part B items never count toward the screener.
    answers.insert("asrs_7", 4.0);

    let scores = score(&answers);
    assert_eq!(scores.asrs_screening, 2);
    assert_eq!(scores.asrs_interpretation, AsrsScreening::Possible);
    assert_eq!(scores.asrs_total, 4.0 + 2.0 + 4.0 + 1.0 * 4.0);
}

#[test]
fn asrs_screening_bands() {
    assert_eq!(scorer::asrs_screening_band(6), AsrsScreening::HighlyConsistent);
    assert_eq!(scorer::asrs_screening_band(4), AsrsScreening::HighlyConsistent);
    assert_eq!(scorer::asrs_screening_band(3), AsrsScreening::Possible);
    assert_eq!(scorer::asrs_screening_band(2), AsrsScreening::Possible);
    assert_eq!(scorer::asrs_screening_band(1), AsrsScreening::BelowThreshold);
}

#[test]
fn phq9_band_lower_bounds_are_inclusive() {
    assert_eq!(scorer::phq9_severity(4.0), DepressionSeverity::Minimal);
    assert_eq!(scorer::phq9_severity(5.0), DepressionSeverity::Mild);
    assert_eq!(scorer::phq9_severity(10.0), DepressionSeverity::Moderate);
    assert_eq!(scorer::phq9_severity(15.0), DepressionSeverity::ModeratelySevere);
    assert_eq!(scorer::phq9_severity(19.0), DepressionSeverity::ModeratelySevere);
    assert_eq!(scorer::phq9_severity(20.0), DepressionSeverity::Severe);
}

#[test]
fn gad7_band_lower_bounds_are_inclusive() {
    assert_eq!(scorer::gad7_severity(4.0), AnxietySeverity::Minimal);
    assert_eq!(scorer::gad7_severity(5.0), AnxietySeverity::Mild);
    assert_eq!(scorer::gad7_severity(10.0), AnxietySeverity::Moderate);
    assert_eq!(scorer::gad7_severity(15.0), AnxietySeverity::Severe);
}

#[test]
fn maximal_phq9_is_severe_depression() {
    let scores = score(&all(&phq9::ITEMS, 3.0));
    assert_eq!(scores.phq9_total, 27.0);
    assert_eq!(scores.phq9_severity.label(), "Severe depression");
}

#[test]
fn maximum_totals_match_instrument_definitions() {
    assert_eq!(asrs::Asrs.max_total(), 72.0);
    assert_eq!(phq9::Phq9.max_total(), 27.0);
    assert_eq!(gad7::Gad7.max_total(), 21.0);
}

#[test]
fn symptom_threshold_depends_on_age() {
    assert_eq!(scorer::required_symptom_count(17), 5);
    assert_eq!(scorer::required_symptom_count(16), 6);
}

#[test]
fn symptom_profile_maps_domains_to_presentation() {
    let answers = all(&asrs::INATTENTIVE, 3.0);
    let adult = symptom_profile(&answers, 30);
    assert_eq!(adult.inattentive_count, 9);
    assert_eq!(adult.hyperactive_impulsive_count, 0);
    assert_eq!(adult.presentation, Presentation::PredominantlyInattentive);

    let mut answers = all(&asrs::HYPERACTIVE_IMPULSIVE[..5], 4.0);
    answers.merge(all(&asrs::INATTENTIVE[..5], 3.0));
    assert_eq!(symptom_profile(&answers, 30).presentation, Presentation::Combined);
    assert_eq!(symptom_profile(&answers, 15).presentation, Presentation::BelowThreshold);
}

fn in_range_answers() -> impl Strategy<Value = AnswerSet> {
    (
        proptest::collection::vec(0u8..=4, 18),
        proptest::collection::vec(0u8..=3, 9),
        proptest::collection::vec(0u8..=3, 7),
    )
        .prop_map(|(a, p, g)| {
            let mut answers = AnswerSet::new();
            for (id, v) in asrs::PART_A.iter().chain(asrs::PART_B.iter()).zip(a) {
                answers.insert(*id, f64::from(v));
            }
            for (id, v) in phq9::ITEMS.iter().zip(p) {
                answers.insert(*id, f64::from(v));
            }
            for (id, v) in gad7::ITEMS.iter().zip(g) {
                answers.insert(*id, f64::from(v));
            }
            answers
        })
}

proptest! {
    #[test]
    fn totals_stay_within_instrument_range(answers in in_range_answers()) {
        let scores = score(&answers);
        prop_assert!((0.0..=72.0).contains(&scores.asrs_total));
        prop_assert!(scores.asrs_screening <= 6);
        prop_assert!((0.0..=27.0).contains(&scores.phq9_total));
        prop_assert!((0.0..=21.0).contains(&scores.gad7_total));
    }

    #[test]
    fn raising_a_part_a_item_never_lowers_screening(
        answers in in_range_answers(),
        item in 0usize..6,
        bump in 1u8..=4,
    ) {
        let before = score(&answers).asrs_screening;
        let id = asrs::PART_A[item];
        let mut raised = answers.clone();
        raised.insert(id, (answers.value(id) + f64::from(bump)).min(4.0));
        prop_assert!(score(&raised).asrs_screening >= before);
    }
}
