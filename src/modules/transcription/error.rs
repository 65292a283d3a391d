use axum::http::StatusCode;
use thiserror::Error;

/// Failures of the transcription pipeline. Provider messages are kept
/// verbatim so callers can tell transient causes from permanent ones.
#[derive(Debug, Error)]
pub enum TranscriptionError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("transcription job not found: {0}")]
    JobNotFound(String),

    #[error("transcription provider rejected the job: {0}")]
    Submission(String),

    #[error("failed to fetch transcript artifact: {0}")]
    Fetch(String),

    #[error("failed to parse transcript artifact: {0}")]
    Parse(String),

    #[error("inconsistent provider state: {0}")]
    InconsistentState(String),

    #[error("transcription provider error: {0}")]
    Provider(String),
}

impl TranscriptionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TranscriptionError::Validation(_) => StatusCode::BAD_REQUEST,
            TranscriptionError::JobNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds_map_to_http_statuses() {
        assert_eq!(
            TranscriptionError::Validation("blank".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TranscriptionError::JobNotFound("job-1".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            TranscriptionError::Fetch("timed out".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            TranscriptionError::InconsistentState("no uri".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn provider_message_is_preserved() {
        let err = TranscriptionError::Submission("quota exceeded".into());
        assert!(err.to_string().contains("quota exceeded"));
    }
}
