//! Cohort edit route.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::cohort::Model as CohortModel;
use util::state::AppState;

use crate::response::{ApiResponse, internal_error, is_unique_violation};
use crate::routes::cohorts::common::{CohortRequest, CohortResponse};
use crate::routes::common::{JsonBody, parse_record_id};

/// PUT /api/cohorts/{cohort_id}
///
/// Full-replace update: every field is taken from the request body, so a
/// caller omitting an optional field resets it. Returns the post-update
/// record; an absent id answers `200` with `data: null`, mirroring the
/// GET-by-id behavior.
pub async fn edit_cohort(
    State(state): State<AppState>,
    Path(cohort_id): Path<String>,
    JsonBody(req): JsonBody<CohortRequest>,
) -> impl IntoResponse {
    let Some(id) = parse_record_id(&cohort_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Option<CohortResponse>>::error(format!(
                "No such cohort with id: {cohort_id}"
            ))),
        );
    };

    match CohortModel::edit(state.db(), id, req.into()).await {
        Ok(cohort) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                cohort.map(CohortResponse::from),
                "Cohort updated successfully",
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
