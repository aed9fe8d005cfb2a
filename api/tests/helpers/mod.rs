#![allow(dead_code)]

use api::routes::{docs::docs_routes, routes};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
    response::Response,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use util::{config::AppConfig, state::AppState};

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-token-generation";

/// Points the global config at test values. Tests touching tokens must
/// call this before issuing or verifying one.
pub fn init_test_config() {
    unsafe {
        std::env::set_var("DATABASE_PATH", "sqlite::memory:");
        std::env::set_var("JWT_SECRET", TEST_JWT_SECRET);
        std::env::set_var("JWT_DURATION_MINUTES", "60");
    }
    AppConfig::reset();
}

/// Builds the full application router on top of the given connection,
/// mirroring the production router minus the socket-level layers.
pub fn make_app(db: DatabaseConnection) -> Router {
    Router::new()
        .nest("/api", routes(AppState::new(db)))
        .merge(docs_routes())
}

pub async fn get_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    payload: &Value,
) -> Response {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn send_get(app: &Router, uri: &str) -> Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn send_get_auth(app: &Router, uri: &str, auth_header: &str) -> Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header("Authorization", auth_header)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn send_delete(app: &Router, uri: &str) -> Response {
    let req = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

/// Creates a cohort through the API and returns its id.
pub async fn create_cohort(app: &Router, slug: &str) -> i64 {
    let payload = serde_json::json!({
        "cohortSlug": slug,
        "cohortName": "FT Web Dev - Paris",
        "program": "Web Dev",
        "format": "Full Time",
        "campus": "Paris",
        "startDate": "2026-01-15T09:00:00Z",
        "inProgress": false,
        "programManager": "Sally Daher",
        "leadTeacher": "Florian Aube",
        "totalHours": 360
    });
    let response = send_json(app, "POST", "/api/cohorts", &payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    get_json_body(response).await["data"]["id"].as_i64().unwrap()
}

/// Creates a student through the API and returns its id.
pub async fn create_student(app: &Router, email: &str, cohort_id: Option<i64>) -> i64 {
    let payload = serde_json::json!({
        "firstName": "Christine",
        "lastName": "Clarke",
        "email": email,
        "phone": "123-456-7890",
        "linkedinUrl": "https://linkedin.com/in/christineclarke",
        "languages": ["English", "Spanish"],
        "program": "Web Dev",
        "background": "Biology",
        "image": "https://i.imgur.com/r8bo8u7.png",
        "cohort": cohort_id
    });
    let response = send_json(app, "POST", "/api/students", &payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    get_json_body(response).await["data"]["id"].as_i64().unwrap()
}
