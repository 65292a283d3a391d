use crate::state::AppState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};

pub mod dto;
pub mod handler;
pub mod service;

// Media uploads are large; axum's 2MB default would reject them.
const UPLOAD_BODY_LIMIT: usize = 1024 * 1024 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(handler::upload_file))
        .route("/list", get(handler::list_files))
        .route("/download/{*key}", get(handler::download_file))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}
