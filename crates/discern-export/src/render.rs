use serde::Serialize;
use tera::{Context, Tera};

use discern_core::models::evaluation::EvaluationResult;
use discern_core::models::likelihood::ConditionLikelihood;
use discern_core::models::recommendation::Priority;
use discern_core::models::session::SessionRecord;
use discern_instruments::instruments::{asrs::Asrs, gad7::Gad7, phq9::Phq9};
use discern_instruments::{Instrument, all_instruments};

use crate::error::ExportError;

pub const REPORT_TEMPLATE_NAME: &str = "report.md";

/// Built-in report layout. Uses the Markdown subset [`crate::docx`] understands.
pub const REPORT_TEMPLATE: &str = r#"# Screening Report

**Name**: {{ name }}
**Age**: {{ age }}
**Session**: {{ session_id }}
**Generated**: {{ generated_at }}

## Scale Scores

{% for scale in scales -%}
- **{{ scale.name }}**: {{ scale.total }} / {{ scale.max }} ({{ scale.band }})
{% endfor %}
## Condition Likelihoods

{% for l in likelihoods -%}
### {{ l.condition }}: {{ l.percent }}% ({{ l.confidence }} confidence)
{{ l.interpretation }}
{% for factor in l.factors -%}
- {{ factor }}
{% endfor %}
{% endfor -%}
## Overall Pattern

**{{ pattern_description }}**

{{ narrative }}
## Recommendations

{% for r in recommendations -%}
**{{ loop.index }}. {{ r.title }}** ({{ r.priority }} priority)
{{ r.description }}
- Rationale: {{ r.rationale }}

{% endfor -%}
---
# Item Responses

{{ item_responses }}
> {{ disclaimer }}
"#;

/// Render any serializable value through a raw Tera template. The value's
/// fields become the template context variables.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    value: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(value)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    Ok(tera.render(template_name, &context)?)
}

/// Render the built-in report for one evaluated session.
pub fn render_report(
    session: &SessionRecord,
    result: &EvaluationResult,
    generated_at: jiff::Timestamp,
) -> Result<String, ExportError> {
    let context = ReportContext::new(session, result, generated_at);
    render_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE, &context)
}

/// Template-facing view of a result: labels instead of enum tags and
/// percentages instead of raw fractions.
#[derive(Debug, Serialize)]
pub struct ReportContext {
    pub name: String,
    pub age: u32,
    pub session_id: String,
    pub generated_at: String,
    pub scales: Vec<ScaleRow>,
    pub likelihoods: Vec<LikelihoodRow>,
    pub pattern_description: String,
    pub narrative: String,
    pub recommendations: Vec<RecommendationRow>,
    pub item_responses: String,
    pub disclaimer: String,
}

#[derive(Debug, Serialize)]
pub struct ScaleRow {
    pub name: String,
    pub total: f64,
    pub max: f64,
    pub band: String,
}

#[derive(Debug, Serialize)]
pub struct LikelihoodRow {
    pub condition: String,
    pub percent: u32,
    pub confidence: String,
    pub interpretation: String,
    pub factors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationRow {
    pub title: String,
    pub priority: &'static str,
    pub description: String,
    pub rationale: String,
}

impl ReportContext {
    pub fn new(
        session: &SessionRecord,
        result: &EvaluationResult,
        generated_at: jiff::Timestamp,
    ) -> Self {
        let scores = &result.scale_scores;
        let scales = vec![
            ScaleRow::new(
                &Asrs,
                scores.asrs_total,
                format!(
                    "{}; {} of 6 screening items",
                    scores.asrs_interpretation, scores.asrs_screening
                ),
            ),
            ScaleRow::new(&Phq9, scores.phq9_total, scores.phq9_severity.to_string()),
            ScaleRow::new(&Gad7, scores.gad7_total, scores.gad7_severity.to_string()),
        ];

        let likelihoods = [
            &result.adhd_likelihood,
            &result.depression_likelihood,
            &result.anxiety_likelihood,
        ]
        .into_iter()
        .map(LikelihoodRow::from)
        .collect();

        let recommendations = result
            .recommendations
            .iter()
            .map(|r| RecommendationRow {
                title: r.title.clone(),
                priority: priority_label(r.priority),
                description: r.description.clone(),
                rationale: r.rationale.clone(),
            })
            .collect();

        Self {
            name: format!("{} {}", session.user.first_name, session.user.last_name),
            age: session.user.age,
            session_id: session.id.to_string(),
            generated_at: generated_at.strftime("%Y-%m-%d %H:%M UTC").to_string(),
            scales,
            likelihoods,
            pattern_description: result.pattern_description.clone(),
            narrative: result.narrative.to_markdown(),
            recommendations,
            item_responses: all_instruments()
                .iter()
                .map(|i| i.to_structured_input(&session.answers))
                .collect::<Vec<_>>()
                .join("\n"),
            disclaimer: result.disclaimer.clone(),
        }
    }
}

impl ScaleRow {
    fn new(instrument: &dyn Instrument, total: f64, band: String) -> Self {
        Self {
            name: instrument.name().to_string(),
            total,
            max: instrument.max_total(),
            band,
        }
    }
}

impl From<&ConditionLikelihood> for LikelihoodRow {
    fn from(l: &ConditionLikelihood) -> Self {
        Self {
            condition: l.condition.to_string(),
            percent: (l.value * 100.0).round() as u32,
            confidence: l.confidence.to_string(),
            interpretation: l.interpretation.clone(),
            factors: l.contributing_factors.clone(),
        }
    }
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "high",
        Priority::Moderate => "moderate",
        Priority::Low => "low",
    }
}
