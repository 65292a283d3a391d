use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};

pub mod dto;
pub mod error;
pub mod extractor;
pub mod handler;
pub mod model;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/start", post(handler::start_transcription))
        .route("/status/{job_id}", get(handler::get_job_status))
        .route("/result/{job_id}", get(handler::get_job_result))
}
