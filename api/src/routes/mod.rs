//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness probe (public)
//! - `/signup`, `/login`, `/me` → authentication endpoints (`/me` guarded)
//! - `/cohorts` → cohort CRUD
//! - `/students` → student CRUD, including lookup by cohort
//!
//! Unmatched paths fall through to a uniform JSON 404.
//!
//! The static `/docs` page is the one exception to the JSON-only rule;
//! it is mounted alongside this group at the top level, not under `/api`.

use axum::{Json, Router, http::StatusCode};
use util::state::AppState;

use crate::response::{ApiResponse, Empty};
use crate::routes::{
    auth::auth_routes, cohorts::cohorts_routes, health::health_routes, students::students_routes,
};

pub mod auth;
pub mod cohorts;
pub mod common;
pub mod docs;
pub mod health;
pub mod students;

/// Builds the complete application router for all HTTP endpoints.
///
/// `/me` is the only guarded route; every CRUD route is public, matching
/// the documented surface.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .merge(auth_routes(app_state.clone()))
        .nest("/cohorts", cohorts_routes())
        .nest("/students", students_routes())
        .fallback(not_found)
        .with_state(app_state)
}

/// Uniform 404 for unmatched `/api/...` paths.
async fn not_found() -> (StatusCode, Json<ApiResponse<Empty>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error("Route not found")),
    )
}
