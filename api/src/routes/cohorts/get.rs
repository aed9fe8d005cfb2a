//! Cohort retrieval routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::cohort::Model as CohortModel;
use util::state::AppState;

use crate::response::{ApiResponse, internal_error};
use crate::routes::cohorts::common::CohortResponse;
use crate::routes::common::parse_record_id;

/// GET /api/cohorts
///
/// List all cohorts.
pub async fn get_cohorts(State(state): State<AppState>) -> impl IntoResponse {
    match CohortModel::get_all(state.db()).await {
        Ok(cohorts) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                cohorts
                    .into_iter()
                    .map(CohortResponse::from)
                    .collect::<Vec<_>>(),
                "Cohorts retrieved successfully",
            )),
        ),
        Err(e) => internal_error::<Vec<CohortResponse>>(e),
    }
}

/// GET /api/cohorts/{cohort_id}
///
/// Fetch a single cohort by id. A malformed id answers `404` before any
/// store query. A well-formed id with no matching record still answers
/// `200` with `data: null` — current behavior, kept as-is.
pub async fn get_cohort(
    State(state): State<AppState>,
    Path(cohort_id): Path<String>,
) -> impl IntoResponse {
    let Some(id) = parse_record_id(&cohort_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Option<CohortResponse>>::error(format!(
                "No such cohort with id: {cohort_id}"
            ))),
        );
    };

    match CohortModel::get_by_id(state.db(), id).await {
        Ok(cohort) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                cohort.map(CohortResponse::from),
                "Cohort retrieved successfully",
            )),
        ),
        Err(e) => internal_error(e),
    }
}
