//! Student retrieval routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::student::Model as StudentModel;
use util::state::AppState;

use crate::response::{ApiResponse, internal_error};
use crate::routes::common::parse_record_id;
use crate::routes::students::common::{PopulatedStudentResponse, StudentResponse};

/// GET /api/students
///
/// List all students. Each record carries its cohort populated into the
/// full cohort document when the reference resolves; a dangling or absent
/// reference yields `cohort: null`.
pub async fn get_students(State(state): State<AppState>) -> impl IntoResponse {
    match StudentModel::get_all_with_cohorts(state.db()).await {
        Ok(students) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                students
                    .into_iter()
                    .map(PopulatedStudentResponse::from)
                    .collect::<Vec<_>>(),
                "Students retrieved successfully",
            )),
        ),
        Err(e) => internal_error::<Vec<PopulatedStudentResponse>>(e),
    }
}

/// GET /api/students/{student_id}
///
/// Fetch a single student by id. A malformed id answers `404` before any
/// store query; a well-formed id with no matching record answers `200`
/// with `data: null` — current behavior, kept as-is.
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> impl IntoResponse {
    let Some(id) = parse_record_id(&student_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Option<StudentResponse>>::error(format!(
                "No such student with id: {student_id}"
            ))),
        );
    };

    match StudentModel::get_by_id(state.db(), id).await {
        Ok(student) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                student.map(StudentResponse::from),
                "Student retrieved successfully",
            )),
        ),
        Err(e) => internal_error(e),
    }
}

/// GET /api/students/cohort/{cohort_id}
///
/// List the students whose cohort reference equals the given id. The same
/// id-validation-first pattern applies; an empty cohort is an empty list,
/// not an error.
pub async fn get_students_by_cohort(
    State(state): State<AppState>,
    Path(cohort_id): Path<String>,
) -> impl IntoResponse {
    let Some(id) = parse_record_id(&cohort_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Vec<StudentResponse>>::error(format!(
                "No such cohort with id: {cohort_id}"
            ))),
        );
    };

    match StudentModel::get_by_cohort(state.db(), id).await {
        Ok(students) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                students
                    .into_iter()
                    .map(StudentResponse::from)
                    .collect::<Vec<_>>(),
                "Students retrieved successfully",
            )),
        ),
        Err(e) => internal_error(e),
    }
}
