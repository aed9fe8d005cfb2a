//! # Cohorts Routes Module
//!
//! Defines and wires up routes for the `/api/cohorts` endpoint group.
//!
//! ## Structure
//! - `post.rs`   — POST handler (create cohort)
//! - `get.rs`    — GET handlers (list cohorts, fetch by id)
//! - `put.rs`    — PUT handler (full-replace edit)
//! - `delete.rs` — DELETE handler (cascading delete)
//! - `common.rs` — request/response DTOs shared by the handlers

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use util::state::AppState;

use delete::delete_cohort;
use get::{get_cohort, get_cohorts};
use post::create_cohort;
use put::edit_cohort;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds and returns the `/cohorts` route group.
///
/// Routes:
/// - `GET    /cohorts`      → list all cohorts
/// - `POST   /cohorts`      → create a new cohort
/// - `GET    /cohorts/{id}` → get a single cohort by ID
/// - `PUT    /cohorts/{id}` → replace cohort details
/// - `DELETE /cohorts/{id}` → delete a cohort and its students
pub fn cohorts_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_cohorts))
        .route("/", post(create_cohort))
        .route("/{cohort_id}", get(get_cohort))
        .route("/{cohort_id}", put(edit_cohort))
        .route("/{cohort_id}", delete(delete_cohort))
}
