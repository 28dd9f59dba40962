//! Question catalog: the pages of the questionnaire and the typed answer
//! each question accepts.
//!
//! Raw submissions are validated here, once, and lowered to the numeric
//! [`AnswerSet`] the scorer and inference engine operate on.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use discern_core::models::answer_set::AnswerSet;

use crate::error::InstrumentError;
use crate::instruments::{asrs, gad7, phq9};
use crate::scoring::{ScoreRange, ScoreType, ValidationError};
use crate::Instrument;

/// Question ids read by the rule evaluator outside the three instruments.
pub mod ids {
    pub const CHILDHOOD_SYMPTOMS: &str = "childhood_symptoms";
    pub const SYMPTOM_ONSET_AGE: &str = "symptom_onset_age";
    pub const CHILDHOOD_IMPAIRMENT: &str = "childhood_impairment";
    pub const REPORT_CARD_COMMENTS: &str = "report_card_comments";

    pub const WORK_IMPAIRMENT: &str = "work_impairment";
    pub const HOME_IMPAIRMENT: &str = "home_impairment";
    pub const SOCIAL_IMPAIRMENT: &str = "social_impairment";
    pub const RELATIONSHIP_IMPAIRMENT: &str = "relationship_impairment";

    pub const LIFELONG_SYMPTOMS: &str = "lifelong_symptoms";
    pub const EPISODIC_SYMPTOMS: &str = "episodic_symptoms";
    pub const ANHEDONIA: &str = "anhedonia";
    pub const DEPRESSED_MOOD: &str = "depressed_mood";
    pub const RESTLESSNESS: &str = "restlessness";
    pub const ANXIETY_LEVEL: &str = "anxiety_level";
    pub const CONCENTRATION_WORSE_WHEN_SAD: &str = "concentration_worse_when_sad";

    pub const MIND_RANDOM_THOUGHTS: &str = "mind_random_thoughts";
    pub const MIND_FULL_OF_WORRIES: &str = "mind_full_of_worries";
    pub const PHYSICAL_ANXIETY_SYMPTOMS: &str = "physical_anxiety_symptoms";
    pub const IMPULSIVITY_SCORE: &str = "impulsivity_score";
    pub const AVOIDANCE_BEHAVIORS: &str = "avoidance_behaviors";

    /// The four life contexts checked for cross-situational impairment.
    pub const IMPAIRMENT_CONTEXTS: [&str; 4] = [
        WORK_IMPAIRMENT,
        HOME_IMPAIRMENT,
        SOCIAL_IMPAIRMENT,
        RELATIONSHIP_IMPAIRMENT,
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub score_type: ScoreType,
    pub range: ScoreRange,
    /// Label for the low and high ends of a rating scale.
    pub anchors: Option<(String, String)>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Page {
    pub page_number: u32,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
    pub progress_percentage: u32,
}

/// A validated answer, typed by the kind of question it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Likert(u8),
    Age(u8),
    Flag(bool),
}

impl Answer {
    /// Numeric form consumed by the scorer.
    pub fn numeric(self) -> f64 {
        match self {
            Answer::Likert(v) | Answer::Age(v) => f64::from(v),
            Answer::Flag(true) => 1.0,
            Answer::Flag(false) => 0.0,
        }
    }
}

static PAGES: LazyLock<Vec<Page>> = LazyLock::new(build_pages);

pub fn pages() -> &'static [Page] {
    &PAGES
}

pub fn total_pages() -> u32 {
    PAGES.len() as u32
}

pub fn page(page_number: u32) -> Result<&'static Page, InstrumentError> {
    PAGES
        .iter()
        .find(|p| p.page_number == page_number)
        .ok_or(InstrumentError::UnknownPage(page_number))
}

pub fn question(id: &str) -> Option<&'static Question> {
    PAGES.iter().flat_map(|p| &p.questions).find(|q| q.id == id)
}

/// Parse one raw JSON value against the question it answers.
///
/// Numbers may arrive as JSON numbers or numeric strings (HTML form posts);
/// flags accept booleans or 0/1.
pub fn parse_answer(
    question: &Question,
    raw: &serde_json::Value,
) -> Result<Answer, ValidationError> {
    let invalid = |detail: String| ValidationError {
        question_id: question.id.clone(),
        message: format!("{}: {detail}", question.id),
    };

    if question.score_type == ScoreType::Flag {
        return match raw {
            serde_json::Value::Bool(b) => Ok(Answer::Flag(*b)),
            _ => match numeric(raw) {
                Some(v) if v == 0.0 || v == 1.0 => Ok(Answer::Flag(v == 1.0)),
                _ => Err(invalid(format!("expected yes/no, got {raw}"))),
            },
        };
    }

    let value = numeric(raw).ok_or_else(|| invalid(format!("expected a number, got {raw}")))?;
    if !question.range.contains(value) {
        return Err(invalid(format!(
            "{value} is outside range [{}, {}]",
            question.range.min, question.range.max
        )));
    }

    // In range and within tolerance of an integer step.
    let whole = value.round() as u8;
    Ok(match question.score_type {
        ScoreType::Age => Answer::Age(whole),
        _ => Answer::Likert(whole),
    })
}

/// Validate a raw submission against the catalog.
///
/// Every problem is collected so the caller can report them together.
/// Unknown question ids are rejected.
pub fn validate_submission(
    raw: &BTreeMap<String, serde_json::Value>,
) -> Result<AnswerSet, InstrumentError> {
    let mut answers = AnswerSet::new();
    let mut errors = Vec::new();

    for (id, value) in raw {
        let Some(question) = question(id) else {
            errors.push(ValidationError {
                question_id: id.clone(),
                message: format!("{id}: unknown question"),
            });
            continue;
        };
        match parse_answer(question, value) {
            Ok(answer) => {
                answers.insert(id.clone(), answer.numeric());
            }
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(answers)
    } else {
        Err(InstrumentError::InvalidAnswers(errors))
    }
}

fn numeric(raw: &serde_json::Value) -> Option<f64> {
    match raw {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn likert(id: &str, text: &str, range: ScoreRange, low: &str, high: &str) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        score_type: ScoreType::Rating,
        range,
        anchors: Some((low.to_string(), high.to_string())),
    }
}

fn severity(id: &str, text: &str) -> Question {
    likert(id, text, ScoreRange::LIKERT_0_4, "Not at all", "Severely")
}

fn agreement(id: &str, text: &str) -> Question {
    likert(id, text, ScoreRange::LIKERT_0_4, "Not at all", "Very much")
}

fn instrument_questions<I: Instrument>(
    instrument: &I,
    domain_id: Option<&str>,
    anchors: (&str, &str),
) -> Vec<Question> {
    instrument
        .domains()
        .iter()
        .filter(|d| domain_id.is_none_or(|id| d.id == id))
        .flat_map(|d| &d.items)
        .map(|item| likert(&item.id, &item.text, item.range, anchors.0, anchors.1))
        .collect()
}

fn build_pages() -> Vec<Page> {
    use self::ids::*;

    const FREQUENCY: (&str, &str) = ("Never", "Very often");
    const LAST_TWO_WEEKS: (&str, &str) = ("Not at all", "Nearly every day");

    let sections: Vec<(&str, &str, Vec<Question>)> = vec![
        (
            "Developmental History",
            "ADHD is a developmental condition. These questions ask about your childhood experiences.",
            vec![
                agreement(
                    CHILDHOOD_SYMPTOMS,
                    "Did you have significant attention, hyperactivity, or impulsivity problems as a child (before age 12)?",
                ),
                Question {
                    id: SYMPTOM_ONSET_AGE.to_string(),
                    text: "At what age did you first notice these difficulties?".to_string(),
                    score_type: ScoreType::Age,
                    range: ScoreRange::AGE,
                    anchors: None,
                },
                severity(
                    CHILDHOOD_IMPAIRMENT,
                    "How much did these problems affect your school performance or behavior as a child?",
                ),
                Question {
                    id: REPORT_CARD_COMMENTS.to_string(),
                    text: "Did teachers comment on report cards about attention problems, not listening, not finishing work, or being disruptive?".to_string(),
                    score_type: ScoreType::Flag,
                    range: ScoreRange::FLAG,
                    anchors: None,
                },
            ],
        ),
        (
            "Attention & Focus",
            "These questions ask about common difficulties with attention and organization.",
            instrument_questions(&asrs::Asrs, Some("part_a"), FREQUENCY),
        ),
        (
            "Activity & Impulsivity",
            "These questions ask about hyperactivity, restlessness, and impulsivity.",
            instrument_questions(&asrs::Asrs, Some("part_b"), FREQUENCY),
        ),
        (
            "Mood Assessment",
            "Difficulties with focus can sometimes be related to mood. Please answer based on the last 2 weeks.",
            instrument_questions(&phq9::Phq9, None, LAST_TWO_WEEKS),
        ),
        (
            "Anxiety Assessment",
            "Anxiety can also affect concentration. Please answer based on the last 2 weeks.",
            instrument_questions(&gad7::Gad7, None, LAST_TWO_WEEKS),
        ),
        (
            "Impact on Daily Life",
            "These questions help us understand how symptoms affect your daily functioning.",
            vec![
                severity(
                    WORK_IMPAIRMENT,
                    "How much do these symptoms interfere with your work or academic performance?",
                ),
                severity(
                    HOME_IMPAIRMENT,
                    "How much do these symptoms interfere with managing household responsibilities?",
                ),
                severity(
                    SOCIAL_IMPAIRMENT,
                    "How much do these symptoms interfere with your social life or friendships?",
                ),
                severity(
                    RELATIONSHIP_IMPAIRMENT,
                    "How much do these symptoms affect your close relationships?",
                ),
            ],
        ),
        (
            "Detailed Patterns",
            "These final questions help distinguish between different causes of your symptoms.",
            vec![
                agreement(
                    LIFELONG_SYMPTOMS,
                    "Have these difficulties been present for as long as you can remember (lifelong)?",
                ),
                agreement(
                    EPISODIC_SYMPTOMS,
                    "Do your symptoms come and go in episodes (weeks or months of feeling bad, then feeling normal)?",
                ),
                agreement(
                    CONCENTRATION_WORSE_WHEN_SAD,
                    "Is your concentration significantly worse ONLY when you are feeling down or depressed?",
                ),
                agreement(
                    ANHEDONIA,
                    "Have you lost interest or pleasure in activities you used to enjoy?",
                ),
                agreement(
                    DEPRESSED_MOOD,
                    "Do you feel sad, empty, or hopeless most of the day?",
                ),
                agreement(
                    MIND_RANDOM_THOUGHTS,
                    "When your mind wanders, does it jump to random, unrelated thoughts (e.g., 'squirrel!', 'did I leave the stove on?')?",
                ),
                agreement(
                    MIND_FULL_OF_WORRIES,
                    "When your mind wanders, is it usually filled with specific worries about the future or bad things happening?",
                ),
                agreement(
                    RESTLESSNESS,
                    "Does moving around or fidgeting make you feel better/calmer?",
                ),
                agreement(
                    ANXIETY_LEVEL,
                    "How anxious or tense do you feel on a typical day?",
                ),
                agreement(
                    PHYSICAL_ANXIETY_SYMPTOMS,
                    "Do you often feel physical tension, racing heart, or 'butterflies' in your stomach?",
                ),
                agreement(
                    IMPULSIVITY_SCORE,
                    "Do you act on impulse without thinking through the consequences, across many areas of life?",
                ),
                agreement(
                    AVOIDANCE_BEHAVIORS,
                    "Do you avoid situations, places, or tasks because they make you anxious?",
                ),
            ],
        ),
    ];

    let total = sections.len() as u32;
    sections
        .into_iter()
        .zip(1..)
        .map(|((title, description, questions), page_number)| Page {
            page_number,
            title: title.to_string(),
            description: description.to_string(),
            questions,
            progress_percentage: page_number * 100 / total,
        })
        .collect()
}
