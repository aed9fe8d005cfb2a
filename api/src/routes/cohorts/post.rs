//! Cohort creation route.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::cohort::Model as CohortModel;
use util::state::AppState;

use crate::response::{ApiResponse, internal_error, is_unique_violation};
use crate::routes::cohorts::common::{CohortRequest, CohortResponse};
use crate::routes::common::JsonBody;

/// POST /api/cohorts
///
/// Create a new cohort from the full field set.
///
/// ### Responses
/// - `201 Created` — the created cohort
/// - `400 Bad Request` — missing field or duplicate slug
/// - `500 Internal Server Error`
pub async fn create_cohort(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CohortRequest>,
) -> impl IntoResponse {
    match CohortModel::create(state.db(), req.into()).await {
        Ok(cohort) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(CohortResponse::from(cohort)),
                "Cohort created successfully",
            )),
        ),
        Err(e) if is_unique_violation(&e, "cohorts.cohort_slug") => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Option<CohortResponse>>::error(
                "A cohort with this slug already exists",
            )),
        ),
        Err(e) => internal_error(e),
    }
}
