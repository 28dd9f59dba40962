//! discern-server
//!
//! axum HTTP host for the screening questionnaire: registration, paged
//! questions, submission, evaluation, and report export.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

pub use state::AppState;

/// Build the application router over the given state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/registration/start", post(routes::registration::start))
        .route(
            "/questionnaire/page/{page_number}",
            get(routes::questionnaire::get_page),
        )
        .route("/questionnaire/submit", post(routes::questionnaire::submit))
        .route("/questionnaire/progress", get(routes::questionnaire::progress))
        .route("/evaluation/analyze", post(routes::evaluation::analyze))
        .route("/evaluation/report", get(routes::evaluation::report))
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        );

    Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(axum_mw::from_fn(middleware::audit::audit_log)),
        )
        .with_state(state)
}
