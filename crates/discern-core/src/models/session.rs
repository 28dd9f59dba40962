use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer_set::AnswerSet;
use super::user::UserInfo;

/// Per-user questionnaire state, kept for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionRecord {
    pub id: Uuid,
    pub user: UserInfo,
    pub answers: AnswerSet,
    pub current_page: u32,
    pub completed: bool,
    pub created_at: jiff::Timestamp,
    pub last_activity: jiff::Timestamp,
}

impl SessionRecord {
    pub fn new(user: UserInfo, now: jiff::Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            answers: AnswerSet::new(),
            current_page: 0,
            completed: false,
            created_at: now,
            last_activity: now,
        }
    }

    /// Whether the record has been idle for longer than `ttl`.
    pub fn is_expired(&self, now: jiff::Timestamp, ttl: jiff::SignedDuration) -> bool {
        now.duration_since(self.last_activity) > ttl
    }
}
