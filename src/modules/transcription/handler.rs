use super::dto::{
    JobStatusResponse, ResultQuery, StartTranscriptionRequest, StartTranscriptionResponse,
    TranscriptResponse,
};
use super::model::TranscriptOutcome;
use super::service::{MAX_RESULT_WAIT, TranscriptionService};
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::time::Duration;
use validator::Validate;

/// Start a transcription job for an existing stored object
#[utoipa::path(
    post,
    path = "/api/v1/transcribe/start",
    request_body = StartTranscriptionRequest,
    responses(
        (status = 202, description = "Job accepted", body = ApiResponse<StartTranscriptionResponse>),
        (status = 400, description = "Bad Request"),
        (status = 502, description = "Provider rejected the job")
    ),
    tag = "Transcription"
)]
pub async fn start_transcription(
    State(state): State<AppState>,
    Json(payload): Json<StartTranscriptionRequest>,
) -> impl IntoResponse {
    if let Err(e) = payload.validate() {
        return ApiError(e.to_string(), StatusCode::BAD_REQUEST).into_response();
    }

    match TranscriptionService::start(&state, &payload.source_key).await {
        Ok(res) => ApiSuccess(
            ApiResponse::success(res, "Transcription job started"),
            StatusCode::ACCEPTED,
        )
        .into_response(),
        Err(e) => ApiError(e.to_string(), e.status_code()).into_response(),
    }
}

/// Check the current state of a transcription job
#[utoipa::path(
    get,
    path = "/api/v1/transcribe/status/{job_id}",
    params(
        ("job_id" = String, Path, description = "Transcription job id")
    ),
    responses(
        (status = 200, description = "Current job state", body = ApiResponse<JobStatusResponse>),
        (status = 404, description = "Job not found"),
        (status = 502, description = "Provider error")
    ),
    tag = "Transcription"
)]
pub async fn get_job_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> impl IntoResponse {
    match TranscriptionService::check_status(&state, &job_id).await {
        Ok(status) => ApiSuccess(
            ApiResponse::success(JobStatusResponse::from(status), "Job status retrieved"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError(e.to_string(), e.status_code()).into_response(),
    }
}

/// Fetch the transcript of a completed job. An unfinished job answers 200
/// with a "not ready" body rather than an error.
#[utoipa::path(
    get,
    path = "/api/v1/transcribe/result/{job_id}",
    params(
        ("job_id" = String, Path, description = "Transcription job id"),
        ResultQuery
    ),
    responses(
        (status = 200, description = "Transcript, or not-ready state", body = ApiResponse<TranscriptResponse>),
        (status = 404, description = "Job not found"),
        (status = 502, description = "Provider or artifact error")
    ),
    tag = "Transcription"
)]
pub async fn get_job_result(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    Query(query): Query<ResultQuery>,
) -> impl IntoResponse {
    if let Some(secs) = query.wait_seconds {
        let budget = Duration::from_secs(secs).min(MAX_RESULT_WAIT);
        if let Err(e) = TranscriptionService::wait_for_completion(&state, &job_id, budget).await {
            return ApiError(e.to_string(), e.status_code()).into_response();
        }
    }

    match TranscriptionService::get_result(&state, &job_id).await {
        Ok(outcome) => {
            let message = match &outcome {
                TranscriptOutcome::Completed { .. } => "Transcript retrieved",
                TranscriptOutcome::NotReady { .. } => "Transcript not ready yet",
            };
            ApiSuccess(
                ApiResponse::success(TranscriptResponse::from(outcome), message),
                StatusCode::OK,
            )
            .into_response()
        }
        Err(e) => ApiError(e.to_string(), e.status_code()).into_response(),
    }
}
