pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::markdown::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Headroom over the markdown limit for JSON escaping and the envelope.
const BODY_LIMIT_SLACK: usize = 64 * 1024;

/// Request bodies may carry a full-size document after JSON escaping, so the
/// payload check in the handler stays the one callers actually hit.
fn body_limit(max_markdown_bytes: usize) -> usize {
    max_markdown_bytes
        .saturating_mul(2)
        .saturating_add(BODY_LIMIT_SLACK)
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = body_limit(state.config.max_markdown_bytes);
    Router::new()
        .route("/health", get(health::health_handler))
        // Markdown API
        .route(
            "/api/v1/markdown/parse",
            post(handlers::handle_parse_markdown),
        )
        .route(
            "/api/v1/markdown/generate",
            post(handlers::handle_generate_markdown),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
