//! Student deletion route.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::student::Model as StudentModel;
use util::state::AppState;

use crate::response::{ApiResponse, internal_error};
use crate::routes::common::parse_record_id;

/// DELETE /api/students/{student_id}
///
/// Deletes the student. Answers `204` with no body whether or not a
/// matching record existed.
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Response {
    let Some(id) = parse_record_id(&student_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Option<()>>::error(format!(
                "No such student with id: {student_id}"
            ))),
        )
            .into_response();
    };

    match StudentModel::delete_by_id(state.db(), id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => internal_error::<Option<()>>(e).into_response(),
    }
}
