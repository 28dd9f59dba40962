pub mod evaluation;
pub mod health;
pub mod instruments;
pub mod questionnaire;
pub mod registration;

use serde::Deserialize;
use uuid::Uuid;

/// `?session_id=` query parameter shared by the session-scoped routes.
#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    pub session_id: Uuid,
}
