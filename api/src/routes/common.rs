use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

use crate::response::{ApiResponse, Empty};

/// JSON request-body extractor with a uniform rejection.
///
/// Wraps `axum::Json` so a missing or malformed body (including absent
/// required fields) answers `400` in the standard envelope instead of
/// axum's default `422` plain-text rejection.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = (StatusCode, Json<ApiResponse<Empty>>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(rejection.body_text())),
            )),
        }
    }
}

/// Parses a path segment as a record id.
///
/// Handlers answer `404` for malformed ids before touching the store, so
/// an invalid id never reaches the database layer.
pub fn parse_record_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}
