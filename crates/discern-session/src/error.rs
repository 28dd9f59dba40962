use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session not found: {id}")]
    NotFound { id: Uuid },

    #[error("session expired: {id}")]
    Expired { id: Uuid },
}
