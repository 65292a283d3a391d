use super::model::{JobState, JobStatus, TranscriptOutcome};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StartTranscriptionRequest {
    #[validate(length(min = 1, message = "source_key is required"))]
    pub source_key: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StartTranscriptionResponse {
    pub job_id: String,
    pub media_uri: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct JobStatusResponse {
    pub state: JobState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_artifact_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

impl From<JobStatus> for JobStatusResponse {
    fn from(status: JobStatus) -> Self {
        Self {
            state: status.state,
            result_artifact_uri: status.result_artifact_uri,
            failure_reason: status.failure_reason,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TranscriptResponse {
    pub state: JobState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<TranscriptOutcome> for TranscriptResponse {
    fn from(outcome: TranscriptOutcome) -> Self {
        match outcome {
            TranscriptOutcome::Completed { transcript } => Self {
                state: JobState::Completed,
                transcript,
                message: None,
            },
            TranscriptOutcome::NotReady { state } => Self {
                state,
                transcript: None,
                message: Some("Transcript not ready yet".to_string()),
            },
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ResultQuery {
    /// Seconds to wait for the job to finish before answering, capped
    /// server-side. Omit for an immediate answer.
    pub wait_seconds: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_source_key_fails_validation() {
        let req = StartTranscriptionRequest {
            source_key: "".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn present_source_key_passes_validation() {
        let req = StartTranscriptionRequest {
            source_key: "uploads/meeting.mp3".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn not_ready_outcome_becomes_a_plain_response() {
        let resp = TranscriptResponse::from(TranscriptOutcome::NotReady {
            state: JobState::InProgress,
        });
        assert_eq!(resp.state, JobState::InProgress);
        assert!(resp.transcript.is_none());
        assert_eq!(resp.message.as_deref(), Some("Transcript not ready yet"));
    }

    #[test]
    fn completed_outcome_without_text_is_still_completed() {
        let resp = TranscriptResponse::from(TranscriptOutcome::Completed { transcript: None });
        assert_eq!(resp.state, JobState::Completed);
        assert!(resp.transcript.is_none());
        assert!(resp.message.is_none());
    }

    #[test]
    fn completed_outcome_carries_the_text() {
        let resp = TranscriptResponse::from(TranscriptOutcome::Completed {
            transcript: Some("hello world".to_string()),
        });
        assert_eq!(resp.transcript.as_deref(), Some("hello world"));
    }
}
