use crate::Instrument;
use crate::scoring::{Domain, ScoreRange, ScoreType, rating_item};

pub const ITEMS: [&str; 7] = [
    "gad7_1", "gad7_2", "gad7_3", "gad7_4", "gad7_5", "gad7_6", "gad7_7",
];

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items rated 0–3 over the last two weeks. Total 0–21.
pub struct Gad7;

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let texts = [
                "Feeling nervous, anxious, or on edge",
                "Not being able to stop or control worrying",
                "Worrying too much about different things",
                "Trouble relaxing",
                "Being so restless that it's hard to sit still",
                "Becoming easily annoyed or irritable",
                "Feeling afraid, as if something awful might happen",
            ];

            vec![Domain {
                id: "gad7_items".to_string(),
                name: "GAD-7 Items".to_string(),
                items: ITEMS
                    .iter()
                    .zip(texts)
                    .map(|(id, text)| rating_item(id, text, ScoreRange::LIKERT_0_3))
                    .collect(),
                composite_score_type: Some(ScoreType::Raw),
                composite_range: Some(ScoreRange {
                    min: 0.0,
                    max: 21.0,
                    step: Some(1.0),
                }),
                description: Some("0-4: minimal, 5-9: mild, 10-14: moderate, 15-21: severe".to_string()),
            }]
        });
        &DOMAINS
    }
}
