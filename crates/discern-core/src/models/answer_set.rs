use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Numeric answers keyed by question id.
///
/// Absent keys read as `0.0` ("not endorsed") so partial submissions still
/// score. Values are not clamped here; range checks happen when raw
/// submissions are validated against the question catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerSet(BTreeMap<String, f64>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `id`, or `0.0` when unanswered.
    pub fn value(&self, id: &str) -> f64 {
        self.value_or(id, 0.0)
    }

    /// Value for `id`, or `default` when unanswered.
    pub fn value_or(&self, id: &str, default: f64) -> f64 {
        self.0.get(id).copied().unwrap_or(default)
    }

    pub fn insert(&mut self, id: impl Into<String>, value: f64) -> Option<f64> {
        self.0.insert(id.into(), value)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overwrite existing answers with those in `other`.
    pub fn merge(&mut self, other: AnswerSet) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of the values for `ids`, treating missing ids as zero.
    pub fn sum(&self, ids: &[&str]) -> f64 {
        ids.iter().map(|id| self.value(id)).sum()
    }

    /// Number of `ids` whose value is at least `min`.
    pub fn count_at_least(&self, ids: &[&str], min: f64) -> u32 {
        ids.iter().filter(|id| self.value(id) >= min).count() as u32
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
