use std::collections::BTreeMap;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use serde::Serialize;

use discern_instruments::catalog::{self, Page};

use super::SessionQuery;
use crate::error::ApiError;
use crate::state::AppState;

/// Fetch one page of questions and record it as the session's position.
pub async fn get_page(
    State(state): State<AppState>,
    Path(page_number): Path<u32>,
    query: Result<Query<SessionQuery>, QueryRejection>,
) -> Result<Json<Page>, ApiError> {
    let Query(SessionQuery { session_id }) = query?;
    let mut session = state
        .sessions
        .get(session_id)
        .ok_or_else(ApiError::session_not_found)?;

    let page = catalog::page(page_number)?;

    session.current_page = page_number;
    state.sessions.save(session)?;

    tracing::debug!(%session_id, page_number, questions = page.questions.len(), "page served");
    Ok(Json(page.clone()))
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: &'static str,
    pub answers_recorded: usize,
}

/// Validate submitted answers against the catalog, merge them into the
/// session, and mark the questionnaire complete. Any invalid answer rejects
/// the whole submission.
pub async fn submit(
    State(state): State<AppState>,
    query: Result<Query<SessionQuery>, QueryRejection>,
    body: Result<Json<BTreeMap<String, serde_json::Value>>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let Query(SessionQuery { session_id }) = query?;
    let Json(raw) = body?;

    let mut session = state
        .sessions
        .get(session_id)
        .ok_or_else(ApiError::session_not_found)?;

    let answers = catalog::validate_submission(&raw)?;
    let answers_recorded = answers.len();
    session.answers.merge(answers);
    session.completed = true;
    state.sessions.save(session)?;

    tracing::info!(%session_id, answers_recorded, "questionnaire completed");
    Ok(Json(SubmitResponse {
        success: true,
        message: "Questionnaire completed",
        answers_recorded,
    }))
}

#[derive(Debug, Serialize)]
pub struct Progress {
    pub current_page: u32,
    pub total_pages: u32,
    pub progress_percentage: f64,
    pub completed: bool,
}

pub async fn progress(
    State(state): State<AppState>,
    query: Result<Query<SessionQuery>, QueryRejection>,
) -> Result<Json<Progress>, ApiError> {
    let Query(SessionQuery { session_id }) = query?;
    let session = state
        .sessions
        .get(session_id)
        .ok_or_else(ApiError::session_not_found)?;

    let total_pages = catalog::total_pages();
    Ok(Json(Progress {
        current_page: session.current_page,
        total_pages,
        progress_percentage: f64::from(session.current_page) / f64::from(total_pages) * 100.0,
        completed: session.completed,
    }))
}
