use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::Serialize;
use uuid::Uuid;

use discern_core::models::evaluation::EvaluationResult;
use discern_core::models::session::SessionRecord;

use super::SessionQuery;
use crate::error::ApiError;
use crate::state::AppState;

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub result: EvaluationResult,
    pub session_id: Uuid,
    pub timestamp: jiff::Timestamp,
}

/// Evaluate a completed session.
pub async fn analyze(
    State(state): State<AppState>,
    query: Result<Query<SessionQuery>, QueryRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Query(SessionQuery { session_id }) = query?;
    let session = completed_session(&state, session_id)?;

    let result = state
        .engine
        .evaluate(&session.answers, &session.user.context());

    Ok(Json(AnalyzeResponse {
        result,
        session_id,
        timestamp: jiff::Timestamp::now(),
    }))
}

/// Evaluate a completed session and return the report as a DOCX download.
pub async fn report(
    State(state): State<AppState>,
    query: Result<Query<SessionQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(SessionQuery { session_id }) = query?;
    let session = completed_session(&state, session_id)?;

    let result = state
        .engine
        .evaluate(&session.answers, &session.user.context());
    let bytes = discern_export::report_docx(
        &session,
        &result,
        jiff::Timestamp::now(),
        &state.report_styles,
    )?;

    let disposition = format!("attachment; filename=\"screening-report-{session_id}.docx\"");
    Ok((
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

fn completed_session(state: &AppState, session_id: Uuid) -> Result<SessionRecord, ApiError> {
    let session = state
        .sessions
        .get(session_id)
        .ok_or_else(ApiError::session_not_found)?;

    if !session.completed {
        tracing::warn!(%session_id, "evaluation requested before completion");
        return Err(ApiError::BadRequest("Questionnaire not completed".to_string()));
    }
    Ok(session)
}
