//! Engine configuration: every threshold, weight, and multiplier the
//! inference pipeline applies, in one auditable structure.
//!
//! Defaults reproduce the published heuristics. A JSON file may override
//! any subset of fields; omitted fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    pub config_version: u32,
    pub thresholds: PatternThresholds,
    pub onset: OnsetRules,
    pub impairment: ImpairmentRules,
    pub differential: DifferentialWeights,
    pub likelihood: LikelihoodFactors,
    pub recommendations: RecommendationThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            thresholds: PatternThresholds::default(),
            onset: OnsetRules::default(),
            impairment: ImpairmentRules::default(),
            differential: DifferentialWeights::default(),
            likelihood: LikelihoodFactors::default(),
            recommendations: RecommendationThresholds::default(),
        }
    }
}

/// Likelihood cut-points used by the pattern classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternThresholds {
    /// Strong evidence.
    pub high: f64,
    /// Clinically significant.
    pub moderate: f64,
    /// Subclinical.
    pub low: f64,
}

impl Default for PatternThresholds {
    fn default() -> Self {
        Self {
            high: 0.7,
            moderate: 0.5,
            low: 0.3,
        }
    }
}

impl PatternThresholds {
    pub fn new(high: f64, moderate: f64, low: f64) -> Result<Self, ConfigError> {
        let thresholds = Self {
            high,
            moderate,
            low,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Require `0 <= low < moderate < high <= 1`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Self {
            high,
            moderate,
            low,
        } = *self;

        if ![high, moderate, low]
            .iter()
            .all(|t| t.is_finite() && (0.0..=1.0).contains(t))
        {
            return Err(ConfigError::InvalidThresholds(format!(
                "all thresholds must lie in [0, 1] (high={high}, moderate={moderate}, low={low})"
            )));
        }
        if !(low < moderate && moderate < high) {
            return Err(ConfigError::InvalidThresholds(format!(
                "expected low < moderate < high (high={high}, moderate={moderate}, low={low})"
            )));
        }
        Ok(())
    }
}

/// Childhood onset (Criterion B) evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnsetRules {
    /// Onset age assumed when the question was not answered.
    pub default_onset_age: f64,
    pub early_onset_age: f64,
    /// Latest onset age that satisfies Criterion B.
    pub criterion_onset_age: f64,
    pub adolescent_onset_age: f64,
    pub early_score: f64,
    pub childhood_score: f64,
    pub adolescent_score: f64,
    pub adult_score: f64,
    pub childhood_impairment_min: f64,
    pub childhood_impairment_bonus: f64,
}

impl Default for OnsetRules {
    fn default() -> Self {
        Self {
            default_onset_age: 18.0,
            early_onset_age: 7.0,
            criterion_onset_age: 12.0,
            adolescent_onset_age: 17.0,
            early_score: 3.0,
            childhood_score: 2.0,
            adolescent_score: 0.5,
            adult_score: 0.0,
            childhood_impairment_min: 3.0,
            childhood_impairment_bonus: 0.5,
        }
    }
}

/// Cross-situational impairment (Criterion C) evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpairmentRules {
    /// Minimum rating for a context to count as impaired.
    pub significant_min: f64,
    pub criterion_contexts: u32,
    pub pervasive_contexts: u32,
}

impl Default for ImpairmentRules {
    fn default() -> Self {
        Self {
            significant_min: 2.0,
            criterion_contexts: 2,
            pervasive_contexts: 3,
        }
    }
}

/// Weights for the ADHD-vs-depression and ADHD-vs-anxiety differentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifferentialWeights {
    /// Rating at which a differentiating item is endorsed.
    pub endorsed_min: f64,
    /// Rating at which a symptom is reported as present in the narrative.
    pub present_min: f64,
    /// Restlessness only counts toward ADHD below this anxiety rating.
    pub calm_anxiety_max: f64,

    pub lifelong_pattern: f64,
    pub episodic_pattern: f64,
    pub mood_symptoms: f64,
    pub restlessness: f64,
    pub mood_linked_concentration: f64,
    pub mood_linked_adhd_penalty: f64,

    pub random_thoughts: f64,
    pub worry_content: f64,
    pub physical_anxiety: f64,
    pub impulsivity: f64,
    pub avoidance: f64,

    /// One scale must exceed the other by this ratio to earn the bonus.
    pub scale_lead_ratio: f64,
    pub scale_lead_bonus: f64,
    /// The winning weight must exceed the other by this ratio.
    pub decision_ratio: f64,
    /// A losing weight above this makes the call contested.
    pub contested_weight: f64,
}

impl Default for DifferentialWeights {
    fn default() -> Self {
        Self {
            endorsed_min: 3.0,
            present_min: 2.0,
            calm_anxiety_max: 2.0,
            lifelong_pattern: 2.0,
            episodic_pattern: 2.0,
            mood_symptoms: 1.5,
            restlessness: 1.2,
            mood_linked_concentration: 1.0,
            mood_linked_adhd_penalty: 0.5,
            random_thoughts: 1.5,
            worry_content: 1.5,
            physical_anxiety: 1.2,
            impulsivity: 1.3,
            avoidance: 1.0,
            scale_lead_ratio: 1.5,
            scale_lead_bonus: 1.0,
            decision_ratio: 1.3,
            contested_weight: 2.0,
        }
    }
}

/// Base likelihood by scale-score band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityBases {
    pub severe_min: f64,
    pub moderate_min: f64,
    pub mild_min: f64,
    pub severe: f64,
    pub moderate: f64,
    pub mild: f64,
    pub minimal: f64,
}

impl Default for SeverityBases {
    fn default() -> Self {
        Self {
            severe_min: 15.0,
            moderate_min: 10.0,
            mild_min: 5.0,
            severe: 0.80,
            moderate: 0.65,
            mild: 0.40,
            minimal: 0.10,
        }
    }
}

impl SeverityBases {
    pub fn base_for(&self, total: f64) -> f64 {
        if total >= self.severe_min {
            self.severe
        } else if total >= self.moderate_min {
            self.moderate
        } else if total >= self.mild_min {
            self.mild
        } else {
            self.minimal
        }
    }
}

/// Base values and multiplicative adjustments for the three likelihoods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LikelihoodFactors {
    pub asrs_high_min: u32,
    pub asrs_possible_min: u32,
    pub asrs_high_base: f64,
    pub asrs_possible_base: f64,
    pub asrs_low_base: f64,

    /// Applied when Criterion B is not met.
    pub onset_veto: f64,
    pub early_onset_score_min: f64,
    pub early_onset_boost: f64,
    /// Applied when Criterion C is not met.
    pub impairment_penalty: f64,
    pub depression_favored_penalty: f64,
    pub adhd_over_depression_boost: f64,
    pub anxiety_favored_penalty: f64,
    pub adhd_over_anxiety_boost: f64,

    pub depression_bases: SeverityBases,
    pub anxiety_bases: SeverityBases,
    /// Applied to depression/anxiety when their differential favors them.
    pub rival_favored_boost: f64,
    /// Applied to depression/anxiety when their differential favors ADHD.
    pub adhd_favored_penalty: f64,

    /// Values at or above this, or at or below `confident_below`, are
    /// reported with high confidence.
    pub confident_above: f64,
    pub confident_below: f64,
}

impl Default for LikelihoodFactors {
    fn default() -> Self {
        Self {
            asrs_high_min: 4,
            asrs_possible_min: 2,
            asrs_high_base: 0.75,
            asrs_possible_base: 0.50,
            asrs_low_base: 0.15,
            onset_veto: 0.2,
            early_onset_score_min: 2.5,
            early_onset_boost: 1.3,
            impairment_penalty: 0.5,
            depression_favored_penalty: 0.6,
            adhd_over_depression_boost: 1.2,
            anxiety_favored_penalty: 0.7,
            adhd_over_anxiety_boost: 1.1,
            depression_bases: SeverityBases::default(),
            anxiety_bases: SeverityBases::default(),
            rival_favored_boost: 1.3,
            adhd_favored_penalty: 0.6,
            confident_above: 0.7,
            confident_below: 0.3,
        }
    }
}

/// Likelihood cut-offs that trigger condition-specific recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationThresholds {
    pub adhd_min: f64,
    pub depression_min: f64,
    pub anxiety_min: f64,
    /// PHQ-9 total that turns the depression advice urgent.
    pub urgent_phq9_min: f64,
    pub comorbid_adhd_min: f64,
    pub comorbid_other_min: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            adhd_min: 0.5,
            depression_min: 0.6,
            anxiety_min: 0.6,
            urgent_phq9_min: 15.0,
            comorbid_adhd_min: 0.5,
            comorbid_other_min: 0.5,
        }
    }
}

impl EngineConfig {
    /// Reject configurations the pipeline cannot apply meaningfully.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;

        let l = &self.likelihood;
        let d = &self.differential;
        let positive = [
            ("likelihood.onset_veto", l.onset_veto),
            ("likelihood.early_onset_boost", l.early_onset_boost),
            ("likelihood.impairment_penalty", l.impairment_penalty),
            ("likelihood.depression_favored_penalty", l.depression_favored_penalty),
            ("likelihood.adhd_over_depression_boost", l.adhd_over_depression_boost),
            ("likelihood.anxiety_favored_penalty", l.anxiety_favored_penalty),
            ("likelihood.adhd_over_anxiety_boost", l.adhd_over_anxiety_boost),
            ("likelihood.rival_favored_boost", l.rival_favored_boost),
            ("likelihood.adhd_favored_penalty", l.adhd_favored_penalty),
            ("differential.scale_lead_ratio", d.scale_lead_ratio),
            ("differential.decision_ratio", d.decision_ratio),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue { name, value });
            }
        }

        let unit = [
            ("likelihood.asrs_high_base", l.asrs_high_base),
            ("likelihood.asrs_possible_base", l.asrs_possible_base),
            ("likelihood.asrs_low_base", l.asrs_low_base),
            ("likelihood.depression_bases.severe", l.depression_bases.severe),
            ("likelihood.depression_bases.moderate", l.depression_bases.moderate),
            ("likelihood.depression_bases.mild", l.depression_bases.mild),
            ("likelihood.depression_bases.minimal", l.depression_bases.minimal),
            ("likelihood.anxiety_bases.severe", l.anxiety_bases.severe),
            ("likelihood.anxiety_bases.moderate", l.anxiety_bases.moderate),
            ("likelihood.anxiety_bases.mild", l.anxiety_bases.mild),
            ("likelihood.anxiety_bases.minimal", l.anxiety_bases.minimal),
            ("likelihood.confident_above", l.confident_above),
            ("likelihood.confident_below", l.confident_below),
        ];
        for (name, value) in unit {
            if !(value.is_finite() && (0.0..=1.0).contains(&value)) {
                return Err(ConfigError::InvalidValue { name, value });
            }
        }

        let weights = [
            ("differential.lifelong_pattern", d.lifelong_pattern),
            ("differential.episodic_pattern", d.episodic_pattern),
            ("differential.mood_symptoms", d.mood_symptoms),
            ("differential.restlessness", d.restlessness),
            ("differential.mood_linked_concentration", d.mood_linked_concentration),
            ("differential.mood_linked_adhd_penalty", d.mood_linked_adhd_penalty),
            ("differential.random_thoughts", d.random_thoughts),
            ("differential.worry_content", d.worry_content),
            ("differential.physical_anxiety", d.physical_anxiety),
            ("differential.impulsivity", d.impulsivity),
            ("differential.avoidance", d.avoidance),
            ("differential.scale_lead_bonus", d.scale_lead_bonus),
            ("differential.contested_weight", d.contested_weight),
            ("onset.childhood_impairment_bonus", self.onset.childhood_impairment_bonus),
        ];
        for (name, value) in weights {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidValue { name, value });
            }
        }

        Ok(())
    }

    /// Parse a JSON config, migrating older versions before deserializing.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let json: serde_json::Value = serde_json::from_str(contents)?;
        let on_disk_version = json
            .get("config_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0);

        let migrated = migrate(json, on_disk_version)?;
        let config: EngineConfig = serde_json::from_value(migrated)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&contents)?;
        tracing::info!(path = %path.display(), version = config.config_version, "engine config loaded");
        Ok(config)
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u64) -> Result<serde_json::Value, ConfigError> {
    if from_version > u64::from(CURRENT_VERSION) {
        return Err(ConfigError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    let obj = json.as_object_mut().ok_or(ConfigError::NotAnObject)?;

    // v0 → v1: stamp the version; field shape is unchanged.
    if from_version < 1 {
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated engine config v0 → v1");
    }

    Ok(json)
}
