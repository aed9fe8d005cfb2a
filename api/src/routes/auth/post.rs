//! Signup and login handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use db::models::user::Model as UserModel;
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

use crate::auth::generate_jwt;
use crate::response::{ApiResponse, internal_error, is_unique_violation};
use crate::routes::auth::common::UserResponse;
use crate::routes::common::JsonBody;

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(required(message = "name is required"))]
    pub name: Option<String>,

    #[validate(required(message = "email is required"))]
    pub email: Option<String>,

    #[validate(required(message = "password is required"))]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required(message = "email is required"))]
    pub email: Option<String>,

    #[validate(required(message = "password is required"))]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub auth_token: String,
}

/// POST /api/signup
///
/// Register a new user.
///
/// ### Request Body
/// ```json
/// { "name": "Ada Lovelace", "email": "ada@example.com", "password": "secret" }
/// ```
///
/// ### Responses
/// - `201 Created` — the created user, password hash stripped
/// - `400 Bad Request` — missing field or email already registered
/// - `500 Internal Server Error`
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SignupRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<UserResponse>::error(error_message)),
        );
    }

    // Presence is guaranteed by the validator above.
    let name = req.name.unwrap_or_default();
    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    match UserModel::get_by_email(state.db(), &email).await {
        Ok(Some(_)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<UserResponse>::error("email is already used")),
            );
        }
        Ok(None) => {}
        Err(e) => return internal_error(e),
    }

    match UserModel::create(state.db(), &name, &email, &password).await {
        Ok(user) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "User registered successfully",
            )),
        ),
        // A concurrent signup can still hit the unique index between the
        // lookup above and the insert.
        Err(e) if is_unique_violation(&e, "users.email") => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<UserResponse>::error("email is already used")),
        ),
        Err(e) => internal_error(e),
    }
}

/// POST /api/login
///
/// Authenticate an existing user and issue a bearer token.
///
/// ### Request Body
/// ```json
/// { "email": "ada@example.com", "password": "secret" }
/// ```
///
/// ### Responses
/// - `200 OK` — `{ "authToken": "..." }`
/// - `400 Bad Request` — missing field
/// - `401 Unauthorized` — the same "Invalid credentials" message whether
///   the email is unknown or the password is wrong
/// - `500 Internal Server Error`
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<LoginResponse>::error(error_message)),
        );
    }

    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    match UserModel::verify_credentials(state.db(), &email, &password).await {
        Ok(Some(user)) => {
            let (token, _expiry) = generate_jwt(&user.email);
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    LoginResponse { auth_token: token },
                    "Login successful",
                )),
            )
        }
        Ok(None) => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<LoginResponse>::error("Invalid credentials")),
        ),
        Err(e) => internal_error(e),
    }
}
