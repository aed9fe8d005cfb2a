//! # Auth Routes Module
//!
//! Defines and wires up the authentication endpoints:
//! - `POST /signup` — create an account
//! - `POST /login`  — exchange credentials for a bearer token
//! - `GET  /me`     — identity of the caller (guarded)

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use util::state::AppState;

use crate::auth::guards::allow_authenticated;
use get::me;
use post::{login, signup};

pub mod common;
pub mod get;
pub mod post;

/// Builds the auth route group. Only `/me` sits behind the access guard;
/// signup and login are necessarily public.
pub fn auth_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route(
            "/me",
            get(me).route_layer(from_fn_with_state(app_state, allow_authenticated)),
        )
}
