pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::analysis::handlers::handle_analyze;
use crate::errors::AppError;
use crate::extraction::handlers::{handle_parse_document, handle_upload_document};
use crate::state::AppState;

/// Base64 inflates uploads by a third; this leaves room for ~7 MB documents.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analyze", post(handle_analyze))
        // Document API
        .route("/api/v1/documents/parse", post(handle_parse_document))
        .route("/api/v1/documents/upload", post(handle_upload_document))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
