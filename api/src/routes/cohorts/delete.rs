//! Cohort deletion route.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::cohort::Model as CohortModel;
use util::state::AppState;

use crate::response::{ApiResponse, internal_error};
use crate::routes::common::parse_record_id;

/// DELETE /api/cohorts/{cohort_id}
///
/// Deletes the cohort and, in the same transaction, every student whose
/// cohort reference points at it. Answers `204` with no body whether or
/// not a matching cohort existed.
pub async fn delete_cohort(
    State(state): State<AppState>,
    Path(cohort_id): Path<String>,
) -> Response {
    let Some(id) = parse_record_id(&cohort_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Option<()>>::error(format!(
                "No such cohort with id: {cohort_id}"
            ))),
        )
            .into_response();
    };

    match CohortModel::delete_cascade(state.db(), id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => internal_error::<Option<()>>(e).into_response(),
    }
}
