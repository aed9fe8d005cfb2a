//! # Students Routes Module
//!
//! Defines and wires up routes for the `/api/students` endpoint group.
//!
//! ## Structure
//! - `post.rs`   — POST handler (create student)
//! - `get.rs`    — GET handlers (list with populated cohorts, fetch by id,
//!   list by cohort)
//! - `put.rs`    — PUT handler (full-replace edit)
//! - `delete.rs` — DELETE handler
//! - `common.rs` — request/response DTOs shared by the handlers

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use util::state::AppState;

use delete::delete_student;
use get::{get_student, get_students, get_students_by_cohort};
use post::create_student;
use put::edit_student;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds and returns the `/students` route group.
///
/// Routes:
/// - `GET    /students`                    → list all students, cohorts populated
/// - `POST   /students`                    → create a new student
/// - `GET    /students/cohort/{cohort_id}` → list students of one cohort
/// - `GET    /students/{student_id}`       → get a single student by ID
/// - `PUT    /students/{student_id}`       → replace student details
/// - `DELETE /students/{student_id}`       → delete a student
pub fn students_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_students))
        .route("/", post(create_student))
        .route("/cohort/{cohort_id}", get(get_students_by_cohort))
        .route("/{student_id}", get(get_student))
        .route("/{student_id}", put(edit_student))
        .route("/{student_id}", delete(delete_student))
}
