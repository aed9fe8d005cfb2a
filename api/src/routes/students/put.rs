//! Student edit route.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::student::Model as StudentModel;
use util::state::AppState;

use crate::response::{ApiResponse, internal_error};
use crate::routes::common::{JsonBody, parse_record_id};
use crate::routes::students::common::{StudentRequest, StudentResponse};

/// PUT /api/students/{student_id}
///
/// Full-replace update: every field is taken from the request body, so a
/// caller omitting an optional field resets it. Returns the post-update
/// record; an absent id answers `200` with `data: null`, mirroring the
/// GET-by-id behavior.
pub async fn edit_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    JsonBody(req): JsonBody<StudentRequest>,
) -> impl IntoResponse {
    let Some(id) = parse_record_id(&student_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Option<StudentResponse>>::error(format!(
                "No such student with id: {student_id}"
            ))),
        );
    };

    match StudentModel::edit(state.db(), id, req.into()).await {
        Ok(student) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                student.map(StudentResponse::from),
                "Student updated successfully",
            )),
        ),
        Err(e) => internal_error(e),
    }
}
