use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;
use uuid::Uuid;

use discern_core::models::user::UserInfo;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub success: bool,
    pub session_id: Uuid,
    pub message: &'static str,
}

/// Validate the user's details and open a questionnaire session.
pub async fn start(
    State(state): State<AppState>,
    body: Result<Json<UserInfo>, JsonRejection>,
) -> Result<Json<RegistrationResponse>, ApiError> {
    let Json(user) = body?;
    let user = user.validated()?;
    let session = state.sessions.create(user);

    Ok(Json(RegistrationResponse {
        success: true,
        session_id: session.id,
        message: "Registration successful",
    }))
}
