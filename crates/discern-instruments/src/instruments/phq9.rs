use crate::Instrument;
use crate::scoring::{Domain, ScoreRange, ScoreType, rating_item};

pub const ITEMS: [&str; 9] = [
    "phq9_1", "phq9_2", "phq9_3", "phq9_4", "phq9_5", "phq9_6", "phq9_7", "phq9_8", "phq9_9",
];

/// PHQ-9: Patient Health Questionnaire, depression module.
/// 9 items rated 0–3 over the last two weeks. Total 0–27.
pub struct Phq9;

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let texts = [
                "Little interest or pleasure in doing things",
                "Feeling down, depressed, or hopeless",
                "Trouble falling or staying asleep, or sleeping too much",
                "Feeling tired or having little energy",
                "Poor appetite or overeating",
                "Feeling bad about yourself - or that you are a failure or have let yourself or your family down",
                "Trouble concentrating on things, such as reading the newspaper or watching television",
                "Moving or speaking so slowly that other people could have noticed. Or the opposite - being so fidgety or restless that you have been moving around a lot more than usual",
                "Thoughts that you would be better off dead, or of hurting yourself",
            ];

            vec![Domain {
                id: "phq9_items".to_string(),
                name: "PHQ-9 Items".to_string(),
                items: ITEMS
                    .iter()
                    .zip(texts)
                    .map(|(id, text)| rating_item(id, text, ScoreRange::LIKERT_0_3))
                    .collect(),
                composite_score_type: Some(ScoreType::Raw),
                composite_range: Some(ScoreRange {
                    min: 0.0,
                    max: 27.0,
                    step: Some(1.0),
                }),
                description: Some(
                    "0-4: minimal, 5-9: mild, 10-14: moderate, 15-19: moderately severe, 20-27: severe"
                        .to_string(),
                ),
            }]
        });
        &DOMAINS
    }
}
