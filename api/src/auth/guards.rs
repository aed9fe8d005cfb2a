use axum::{
    Json,
    body::Body,
    extract::{FromRequestParts, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use db::models::user::Model as UserModel;
use util::state::AppState;

use crate::auth::claims::AuthUser;
use crate::response::{ApiResponse, Empty};

/// The user record a passing guard attaches to the request, with the
/// password hash excluded from anything serialized downstream.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserModel);

/// Guard for protected routes.
///
/// Verifies the bearer token, then confirms the user it names still exists.
/// A token stays valid until natural expiry, except that a deleted user is
/// rejected here even with a well-formed token. On success the user record
/// is inserted into the request extensions for downstream handlers.
pub async fn allow_authenticated(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (mut parts, body) = req.into_parts();

    let user = AuthUser::from_request_parts(&mut parts, &())
        .await
        .map_err(|(status, msg)| (status, Json(ApiResponse::error(msg))))?;

    let record = UserModel::get_by_email(state.db(), &user.0.sub)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "User lookup failed during auth");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Internal Server Error")),
            )
        })?
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Unauthorised user")),
            )
        })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user);
    req.extensions_mut().insert(CurrentUser(record));

    Ok(next.run(req).await)
}
