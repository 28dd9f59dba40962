use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use discern_inference::Engine;
use discern_server::{AppState, router};
use discern_session::MemorySessionStore;

fn app() -> Router {
    let sessions = Arc::new(MemorySessionStore::new(jiff::SignedDuration::from_secs(3600)));
    router(AppState::new(sessions, Engine::default()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn register(app: &Router) -> String {
    let (status, body) = send_json(
        app,
        post(
            "/api/registration/start",
            json!({ "first_name": "  Jordan ", "last_name": "Lee", "age": 27 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    body["session_id"].as_str().unwrap().to_string()
}

fn adhd_answers() -> Value {
    let mut answers = serde_json::Map::new();
    for i in 1..=18 {
        answers.insert(format!("asrs_{i}"), json!(4));
    }
    for i in 1..=9 {
        answers.insert(format!("phq9_{i}"), json!(0));
    }
    for i in 1..=7 {
        answers.insert(format!("gad7_{i}"), json!(0));
    }
    answers.insert("symptom_onset_age".into(), json!(5));
    answers.insert("childhood_symptoms".into(), json!(4));
    answers.insert("report_card_comments".into(), json!(true));
    for id in [
        "work_impairment",
        "home_impairment",
        "social_impairment",
        "relationship_impairment",
    ] {
        answers.insert(id.into(), json!("4"));
    }
    Value::Object(answers)
}

#[tokio::test]
async fn health_reports_version() {
    let (status, body) = send_json(&app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn full_questionnaire_flow() {
    let app = app();
    let session_id = register(&app).await;

    let (status, page) =
        send_json(&app, get(&format!("/api/questionnaire/page/2?session_id={session_id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["page_number"], 2);
    assert_eq!(page["questions"].as_array().unwrap().len(), 6);

    let (status, progress) =
        send_json(&app, get(&format!("/api/questionnaire/progress?session_id={session_id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(progress["current_page"], 2);
    assert_eq!(progress["total_pages"], 7);
    assert_eq!(progress["completed"], false);

    let (status, submitted) = send_json(
        &app,
        post(
            &format!("/api/questionnaire/submit?session_id={session_id}"),
            adhd_answers(),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(submitted["answers_recorded"], 41);

    let (status, result) = send_json(
        &app,
        post(
            &format!("/api/evaluation/analyze?session_id={session_id}"),
            json!({}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["session_id"], session_id.as_str());
    assert_eq!(result["pattern"], "adhd_predominant");
    assert_eq!(result["adhd_likelihood"]["value"], 1.0);
    assert_eq!(result["scale_scores"]["asrs_screening"], 6);
    assert!(result["timestamp"].is_string());
    assert!(result["disclaimer"].as_str().unwrap().contains("NOT a diagnostic"));

    let response = app
        .clone()
        .oneshot(get(&format!("/api/evaluation/report?session_id={session_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn invalid_registration_is_rejected() {
    let app = app();
    let (status, body) = send_json(
        &app,
        post(
            "/api/registration/start",
            json!({ "first_name": "A", "last_name": "B", "age": 9 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("age"));

    let (status, body) = send_json(
        &app,
        post("/api/registration/start", json!({ "first_name": "A" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unknown_session_is_not_found() {
    let app = app();
    let missing = uuid::Uuid::new_v4();
    for uri in [
        format!("/api/questionnaire/page/1?session_id={missing}"),
        format!("/api/questionnaire/progress?session_id={missing}"),
    ] {
        let (status, body) = send_json(&app, get(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], "Session not found. Please restart.");
    }

    let (status, _) = send_json(
        &app,
        post(&format!("/api/evaluation/analyze?session_id={missing}"), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_session_id_is_bad_request() {
    let (status, body) =
        send_json(&app(), get("/api/questionnaire/progress?session_id=not-a-uuid")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn out_of_range_page_is_not_found() {
    let app = app();
    let session_id = register(&app).await;
    let (status, body) =
        send_json(&app, get(&format!("/api/questionnaire/page/8?session_id={session_id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "page 8 does not exist");
}

#[tokio::test]
async fn evaluation_requires_a_completed_questionnaire() {
    let app = app();
    let session_id = register(&app).await;
    let (status, body) = send_json(
        &app,
        post(
            &format!("/api/evaluation/analyze?session_id={session_id}"),
            json!({}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Questionnaire not completed");

    let (status, _) = send(
        &app,
        get(&format!("/api/evaluation/report?session_id={session_id}")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_answers_are_all_reported_and_nothing_is_saved() {
    let app = app();
    let session_id = register(&app).await;
    let (status, body) = send_json(
        &app,
        post(
            &format!("/api/questionnaire/submit?session_id={session_id}"),
            json!({ "asrs_1": 5, "phq9_1": 4, "favourite_colour": 2, "gad7_1": 1 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("3 invalid answer(s)"), "{error}");
    assert!(error.contains("asrs_1"));
    assert!(error.contains("phq9_1"));
    assert!(error.contains("favourite_colour"));

    let (_, progress) =
        send_json(&app, get(&format!("/api/questionnaire/progress?session_id={session_id}"))).await;
    assert_eq!(progress["completed"], false);
}

#[tokio::test]
async fn instruments_are_listed() {
    let app = app();
    let (status, body) = send_json(&app, get("/api/instruments")).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["asrs", "phq9", "gad7"]);

    let (status, detail) = send_json(&app, get("/api/instruments/phq9")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["max_total"], 27.0);

    let (status, _) = send_json(&app, get("/api/instruments/bdi")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
