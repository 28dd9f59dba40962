//! Pattern classifier: a priority-ordered decision table over the three
//! likelihoods.

use discern_core::models::pattern::DiagnosticPattern;

use crate::config::PatternThresholds;

/// Classify the likelihood triple. Always returns exactly one pattern with
/// its fixed description.
///
/// When two or more conditions reach `moderate` but none reaches `high`,
/// pairs are tried as ADHD+depression, then ADHD+anxiety, then
/// depression+anxiety, and the first match wins. With all three at
/// moderate, anxiety is not reflected in the pattern.
pub fn classify(
    adhd: f64,
    depression: f64,
    anxiety: f64,
    thresholds: &PatternThresholds,
) -> (DiagnosticPattern, &'static str) {
    use DiagnosticPattern::*;

    let high = thresholds.high;
    let moderate = thresholds.moderate;

    if adhd >= high && depression >= high && anxiety >= high {
        return (
            ComplexComorbid,
            "Complex comorbid presentation requiring comprehensive evaluation",
        );
    }

    if adhd >= high {
        return if depression >= moderate {
            (AdhdWithDepression, "ADHD with comorbid depressive symptoms")
        } else if anxiety >= moderate {
            (AdhdWithAnxiety, "ADHD with comorbid anxiety")
        } else {
            (
                AdhdPredominant,
                "ADHD presentation without significant comorbidity",
            )
        };
    }

    if depression >= high {
        return if anxiety >= moderate {
            (DepressionWithAnxiety, "Depression with comorbid anxiety")
        } else {
            (DepressionPredominant, "Primary depressive disorder")
        };
    }

    if anxiety >= high {
        return (AnxietyPredominant, "Primary anxiety disorder");
    }

    let at_moderate = [adhd, depression, anxiety]
        .iter()
        .filter(|&&v| v >= moderate)
        .count();

    if at_moderate >= 2 {
        return if adhd >= moderate && depression >= moderate {
            (
                AdhdWithDepression,
                "Possible ADHD and depression - further evaluation needed",
            )
        } else if adhd >= moderate && anxiety >= moderate {
            (
                AdhdWithAnxiety,
                "Possible ADHD and anxiety - further evaluation needed",
            )
        } else {
            (DepressionWithAnxiety, "Possible depression and anxiety")
        };
    }

    if adhd >= moderate {
        (
            AdhdPredominant,
            "Possible ADHD - clinical evaluation recommended",
        )
    } else if depression >= moderate {
        (
            DepressionPredominant,
            "Possible depression - clinical evaluation recommended",
        )
    } else if anxiety >= moderate {
        (
            AnxietyPredominant,
            "Possible anxiety - clinical evaluation recommended",
        )
    } else {
        (
            UnclearSubclinical,
            "Subclinical symptoms - monitoring may be appropriate",
        )
    }
}
