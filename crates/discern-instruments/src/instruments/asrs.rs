use crate::Instrument;
use crate::scoring::{Domain, ScoreRange, ScoreType, rating_item};

/// Part A: the six-item screener, most predictive of ADHD.
pub const PART_A: [&str; 6] = ["asrs_1", "asrs_2", "asrs_3", "asrs_4", "asrs_5", "asrs_6"];

pub const PART_B: [&str; 12] = [
    "asrs_7", "asrs_8", "asrs_9", "asrs_10", "asrs_11", "asrs_12", "asrs_13", "asrs_14",
    "asrs_15", "asrs_16", "asrs_17", "asrs_18",
];

/// Items mapping to DSM-5 Criterion A1 (inattention).
pub const INATTENTIVE: [&str; 9] = [
    "asrs_1", "asrs_2", "asrs_3", "asrs_4", "asrs_7", "asrs_8", "asrs_9", "asrs_10", "asrs_11",
];

/// Items mapping to DSM-5 Criterion A2 (hyperactivity-impulsivity).
pub const HYPERACTIVE_IMPULSIVE: [&str; 9] = [
    "asrs_5", "asrs_6", "asrs_12", "asrs_13", "asrs_14", "asrs_15", "asrs_16", "asrs_17",
    "asrs_18",
];

/// ASRS v1.1: WHO Adult ADHD Self-Report Scale.
/// 18 items rated 0–4 (Never, Rarely, Sometimes, Often, Very Often).
/// Part A screens positive when 4+ of its 6 items are rated 2 or higher.
pub struct Asrs;

impl Instrument for Asrs {
    fn id(&self) -> &str {
        "asrs"
    }

    fn name(&self) -> &str {
        "ASRS v1.1"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let part_a = [
                "How often do you have trouble wrapping up the final details of a project, once the challenging parts have been done?",
                "How often do you have difficulty getting things in order when you have to do a task that requires organization?",
                "How often do you have problems remembering appointments or obligations?",
                "When you have a task that requires a lot of thought, how often do you avoid or delay getting started?",
                "How often do you fidget or squirm with your hands or feet when you have to sit down for a long time?",
                "How often do you feel overly active and compelled to do things, like you were driven by a motor?",
            ];
            let part_b = [
                "How often do you make careless mistakes when you have to work on a boring or difficult project?",
                "How often do you have difficulty keeping your attention when you are doing boring or repetitive work?",
                "How often do you have difficulty concentrating on what people say to you, even when they are speaking to you directly?",
                "How often do you misplace or have difficulty finding things at home or at work?",
                "How often are you distracted by activity or noise around you?",
                "How often do you leave your seat in meetings or other situations in which you are expected to remain seated?",
                "How often do you feel restless or fidgety?",
                "How often do you have difficulty unwinding and relaxing when you have time to yourself?",
                "How often do you find yourself talking too much when you are in social situations?",
                "When you're in a conversation, how often do you find yourself finishing the sentences of the people you are talking to, before they can finish them themselves?",
                "How often do you have difficulty waiting your turn in situations when turn taking is required?",
                "How often do you interrupt others when they are busy?",
            ];

            vec![
                Domain {
                    id: "part_a".to_string(),
                    name: "Part A".to_string(),
                    items: PART_A
                        .iter()
                        .zip(part_a)
                        .map(|(id, text)| rating_item(id, text, ScoreRange::LIKERT_0_4))
                        .collect(),
                    composite_score_type: Some(ScoreType::Raw),
                    composite_range: Some(ScoreRange {
                        min: 0.0,
                        max: 24.0,
                        step: Some(1.0),
                    }),
                    description: Some(
                        "Screener: 4+ items rated Sometimes or more is highly consistent with ADHD"
                            .to_string(),
                    ),
                },
                Domain {
                    id: "part_b".to_string(),
                    name: "Part B".to_string(),
                    items: PART_B
                        .iter()
                        .zip(part_b)
                        .map(|(id, text)| rating_item(id, text, ScoreRange::LIKERT_0_4))
                        .collect(),
                    composite_score_type: Some(ScoreType::Raw),
                    composite_range: Some(ScoreRange {
                        min: 0.0,
                        max: 48.0,
                        step: Some(1.0),
                    }),
                    description: None,
                },
            ]
        });
        &DOMAINS
    }
}
