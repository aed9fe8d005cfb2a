use axum::{Router, response::Html, routing::get};

/// Builds the `/docs` route group. The documentation page is the one
/// HTML response the server produces; everything under `/api` is JSON.
pub fn docs_routes() -> Router {
    Router::new().route("/docs", get(docs_page))
}

/// GET /docs
///
/// Serves the static API documentation page, embedded at compile time.
async fn docs_page() -> Html<&'static str> {
    Html(include_str!("../../assets/docs.html"))
}
