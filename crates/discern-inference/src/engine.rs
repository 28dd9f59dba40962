use discern_core::models::answer_set::AnswerSet;
use discern_core::models::evaluation::EvaluationResult;
use discern_core::models::judgment::Judgments;
use discern_core::models::user::UserContext;
use discern_instruments::scorer;

use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::recommend::RecommendationInputs;
use crate::{likelihood, narrative, pattern, recommend, rules};

pub const DISCLAIMER: &str = "**IMPORTANT DISCLAIMER**: This screening tool is for educational and informational \
purposes only. It is NOT a diagnostic instrument and cannot replace a comprehensive \
evaluation by a qualified mental health professional. If you are experiencing \
distress, difficulty functioning, or thoughts of self-harm, please seek immediate \
professional help. Contact a mental health provider, your primary care physician, \
or crisis services if needed.";

/// The scoring and inference pipeline. Holds only a validated config, so a
/// single instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full pipeline. Total for any answer set: missing answers fall
    /// back to their defaults and nothing here fails.
    pub fn evaluate(&self, answers: &AnswerSet, user: &UserContext) -> EvaluationResult {
        let cfg = &self.config;

        let scale_scores = scorer::score(answers);
        let symptom_profile = scorer::symptom_profile(answers, user.age);
        tracing::debug!(
            asrs_screening = scale_scores.asrs_screening,
            phq9_total = scale_scores.phq9_total,
            gad7_total = scale_scores.gad7_total,
            "scales scored"
        );

        let judgments = Judgments {
            onset: rules::evaluate_onset(answers, &cfg.onset),
            impairment: rules::evaluate_impairment(answers, &cfg.impairment),
            adhd_vs_depression: rules::adhd_vs_depression(answers, &scale_scores, &cfg.differential),
            adhd_vs_anxiety: rules::adhd_vs_anxiety(answers, &scale_scores, &cfg.differential),
        };
        tracing::debug!(
            onset_criterion = judgments.onset.criterion_met,
            impairment_criterion = judgments.impairment.criterion_met,
            "rules evaluated"
        );

        let adhd_likelihood = likelihood::adhd(
            &scale_scores,
            &judgments.onset,
            &judgments.impairment,
            &judgments.adhd_vs_depression,
            &judgments.adhd_vs_anxiety,
            &cfg.likelihood,
        );
        let depression_likelihood =
            likelihood::depression(&scale_scores, &judgments.adhd_vs_depression, &cfg.likelihood);
        let anxiety_likelihood =
            likelihood::anxiety(&scale_scores, &judgments.adhd_vs_anxiety, &cfg.likelihood);

        let (pattern, pattern_description) = pattern::classify(
            adhd_likelihood.value,
            depression_likelihood.value,
            anxiety_likelihood.value,
            &cfg.thresholds,
        );

        let recommendations = recommend::recommendations(
            &RecommendationInputs {
                adhd: &adhd_likelihood,
                depression: &depression_likelihood,
                anxiety: &anxiety_likelihood,
                scores: &scale_scores,
                onset: &judgments.onset,
            },
            &cfg.recommendations,
        );

        let narrative = narrative::build(&scale_scores, &judgments, &symptom_profile, pattern);

        tracing::info!(
            pattern = %pattern,
            adhd = adhd_likelihood.value,
            depression = depression_likelihood.value,
            anxiety = anxiety_likelihood.value,
            recommendations = recommendations.len(),
            "evaluation complete"
        );

        EvaluationResult {
            scale_scores,
            symptom_profile,
            judgments,
            adhd_likelihood,
            depression_likelihood,
            anxiety_likelihood,
            pattern,
            pattern_description: pattern_description.to_string(),
            narrative,
            recommendations,
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}
