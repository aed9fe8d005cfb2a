//! Identity endpoint for authenticated callers.

use axum::{Extension, Json, response::IntoResponse};

use crate::auth::guards::CurrentUser;
use crate::response::ApiResponse;
use crate::routes::auth::common::UserResponse;

/// GET /api/me
///
/// Returns the identity attached by the access guard. Reaching this
/// handler implies the bearer token verified and the user still exists.
pub async fn me(Extension(CurrentUser(user)): Extension<CurrentUser>) -> impl IntoResponse {
    Json(ApiResponse::success(
        UserResponse::from(user),
        "Authenticated user retrieved",
    ))
}
