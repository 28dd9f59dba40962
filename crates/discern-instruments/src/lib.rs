//! discern-instruments
//!
//! Screening instrument definitions (ASRS v1.1, PHQ-9, GAD-7), the question
//! catalog the questionnaire is built from, answer validation at the
//! boundary, and the scale scorer. Pure data and arithmetic, no I/O.

pub mod catalog;
pub mod error;
pub mod instruments;
pub mod scorer;
pub mod scoring;

use discern_core::models::answer_set::AnswerSet;
use scoring::{Domain, Item, ValidationError};

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "asrs", "phq9").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "ASRS v1.1", "PHQ-9").
    fn name(&self) -> &str;

    /// The item groups this instrument is made of.
    fn domains(&self) -> &[Domain];

    fn items(&self) -> Vec<&Item> {
        self.domains().iter().flat_map(|d| &d.items).collect()
    }

    /// Sum of all item values, with unanswered items contributing zero.
    fn total(&self, answers: &AnswerSet) -> f64 {
        self.items().iter().map(|item| answers.value(&item.id)).sum()
    }

    /// Highest total reachable with in-range answers.
    fn max_total(&self) -> f64 {
        self.items().iter().map(|item| item.range.max).sum()
    }

    /// Check answered items against their ranges. Unanswered items are fine.
    fn validate_answers(&self, answers: &AnswerSet) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for item in self.items() {
            if let Some((_, value)) = answers.iter().find(|(id, _)| *id == item.id)
                && !item.range.contains(value)
            {
                errors.push(ValidationError {
                    question_id: item.id.clone(),
                    message: format!(
                        "{}: item {} score {} is outside range [{}, {}]",
                        self.name(),
                        item.id,
                        value,
                        item.range.min,
                        item.range.max,
                    ),
                });
            }
        }
        errors
    }

    /// Format item answers as Markdown for inclusion in a report.
    fn to_structured_input(&self, answers: &AnswerSet) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for domain in self.domains() {
            output.push_str(&format!("### {}\n", domain.name));
            for item in &domain.items {
                output.push_str(&format!("- {}: {}\n", item.text, answers.value(&item.id)));
            }
            output.push('\n');
        }
        output.push_str(&format!(
            "**Total**: {} / {}\n",
            self.total(answers),
            self.max_total()
        ));
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::asrs::Asrs),
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
