//! Student creation route.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::student::Model as StudentModel;
use util::state::AppState;

use crate::response::{ApiResponse, internal_error};
use crate::routes::common::JsonBody;
use crate::routes::students::common::{StudentRequest, StudentResponse};

/// POST /api/students
///
/// Create a new student from the full field set.
///
/// ### Responses
/// - `201 Created` — the created student
/// - `400 Bad Request` — missing field
/// - `500 Internal Server Error`
pub async fn create_student(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<StudentRequest>,
) -> impl IntoResponse {
    match StudentModel::create(state.db(), req.into()).await {
        Ok(student) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(StudentResponse::from(student)),
                "Student created successfully",
            )),
        ),
        Err(e) => internal_error::<Option<StudentResponse>>(e),
    }
}
