use axum::{Json, http::StatusCode};
use serde::Serialize;

/// Standardized API response wrapper for all outgoing JSON responses.
///
/// This struct enforces a consistent response structure across all endpoints:
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "message": "Some message"
/// }
/// ```
///
/// - `T` is the type of the `data` payload.
/// - `success` is a boolean indicating operation status.
/// - `message` provides a human-readable context string.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Constructs an error response with a message and default `data`.
    ///
    /// # Requires
    /// - `T` must implement `Default`, since error responses do not include useful data.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}

/// Placeholder payload for responses that carry no data.
#[derive(Serialize, Default)]
pub struct Empty;

/// Central responder for unhandled store or runtime failures.
///
/// Logs the real cause server-side and answers with a generic message so
/// internal detail (query text, stack traces) never reaches a client.
pub fn internal_error<T>(e: impl std::fmt::Display) -> (StatusCode, Json<ApiResponse<T>>)
where
    T: Serialize + Default,
{
    tracing::error!(error = %e, "Request failed with internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error("Internal Server Error")),
    )
}

/// Returns true when the error is a unique-constraint violation on the
/// given `table.column` pair.
pub fn is_unique_violation(e: &sea_orm::DbErr, constraint: &str) -> bool {
    e.to_string()
        .contains(&format!("UNIQUE constraint failed: {constraint}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let resp = ApiResponse::success(3, "done");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 3);
        assert_eq!(json["message"], "done");
    }

    #[test]
    fn error_envelope_uses_default_data() {
        let resp = ApiResponse::<Option<i32>>::error("nope");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["data"], serde_json::Value::Null);
        assert_eq!(json["message"], "nope");
    }

    #[test]
    fn unique_violation_matches_constraint() {
        let err = sea_orm::DbErr::Custom(
            "error returned from database: UNIQUE constraint failed: users.email".into(),
        );
        assert!(is_unique_violation(&err, "users.email"));
        assert!(!is_unique_violation(&err, "cohorts.cohort_slug"));
    }
}
