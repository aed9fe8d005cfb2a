//! Application state container shared across Axum route handlers and middleware.
//!
//! Holds the database connection behind a cheaply clonable handle. The state is
//! constructed once at startup (or per test) and injected via Axum's `State<T>`
//! extractor, so handlers never reach for process-wide globals.

use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` with the given database connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
