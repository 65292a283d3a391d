use aws_sdk_transcribe::types::{TranscriptionJob, TranscriptionJobStatus};
use serde::Serialize;
use utoipa::ToSchema;

/// Provider-owned job state as observed by this service. Transitions are
/// Queued → InProgress → Completed | Failed; terminal states never regress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum JobState {
    Queued,
    InProgress,
    Completed,
    Failed,
}

impl JobState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Completed | JobState::Failed)
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            JobState::Queued => "Queued",
            JobState::InProgress => "InProgress",
            JobState::Completed => "Completed",
            JobState::Failed => "Failed",
        };
        f.write_str(label)
    }
}

impl From<&TranscriptionJobStatus> for JobState {
    fn from(status: &TranscriptionJobStatus) -> Self {
        match status {
            TranscriptionJobStatus::Queued => JobState::Queued,
            TranscriptionJobStatus::InProgress => JobState::InProgress,
            TranscriptionJobStatus::Completed => JobState::Completed,
            TranscriptionJobStatus::Failed => JobState::Failed,
            // Statuses this build does not know are observed as still running.
            _ => JobState::InProgress,
        }
    }
}

/// Media format submitted to the provider, derived from the object key's
/// file extension. Unknown extensions submit as mp3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFormat {
    Mp3,
    Mp4,
    Wav,
    Flac,
    M4a,
}

impl MediaFormat {
    pub fn from_key(key: &str) -> Self {
        let lower = key.to_lowercase();
        if lower.ends_with(".mp4") {
            MediaFormat::Mp4
        } else if lower.ends_with(".wav") {
            MediaFormat::Wav
        } else if lower.ends_with(".flac") {
            MediaFormat::Flac
        } else if lower.ends_with(".m4a") {
            MediaFormat::M4a
        } else {
            MediaFormat::Mp3
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaFormat::Mp3 => "mp3",
            MediaFormat::Mp4 => "mp4",
            MediaFormat::Wav => "wav",
            MediaFormat::Flac => "flac",
            MediaFormat::M4a => "m4a",
        }
    }
}

/// One observation of a job, translated out of the provider's field names.
/// The artifact uri is populated only for Completed jobs and the failure
/// reason only for Failed ones.
#[derive(Debug, Clone)]
pub struct JobStatus {
    pub state: JobState,
    pub result_artifact_uri: Option<String>,
    pub failure_reason: Option<String>,
}

impl From<&TranscriptionJob> for JobStatus {
    fn from(job: &TranscriptionJob) -> Self {
        let state = job
            .transcription_job_status()
            .map(JobState::from)
            .unwrap_or(JobState::InProgress);

        let result_artifact_uri = if state == JobState::Completed {
            job.transcript()
                .and_then(|t| t.transcript_file_uri())
                .map(str::to_string)
        } else {
            None
        };

        let failure_reason = if state == JobState::Failed {
            job.failure_reason().map(str::to_string)
        } else {
            None
        };

        Self {
            state,
            result_artifact_uri,
            failure_reason,
        }
    }
}

/// Outcome of a result lookup. A job that has not finished yet is a normal
/// value here, never an error.
#[derive(Debug)]
pub enum TranscriptOutcome {
    Completed { transcript: Option<String> },
    NotReady { state: JobState },
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_transcribe::types::Transcript;

    #[test]
    fn media_format_is_derived_from_extension_case_insensitively() {
        assert_eq!(MediaFormat::from_key("a.MP3"), MediaFormat::Mp3);
        assert_eq!(MediaFormat::from_key("meeting.mp4"), MediaFormat::Mp4);
        assert_eq!(MediaFormat::from_key("a.wav"), MediaFormat::Wav);
        assert_eq!(MediaFormat::from_key("a.FLAC"), MediaFormat::Flac);
        assert_eq!(MediaFormat::from_key("uploads/x.m4a"), MediaFormat::M4a);
    }

    #[test]
    fn media_format_defaults_to_mp3() {
        assert_eq!(MediaFormat::from_key("a"), MediaFormat::Mp3);
        assert_eq!(MediaFormat::from_key("archive.zip"), MediaFormat::Mp3);
        assert_eq!(MediaFormat::from_key(""), MediaFormat::Mp3);
    }

    #[test]
    fn provider_states_translate() {
        assert_eq!(
            JobState::from(&TranscriptionJobStatus::Queued),
            JobState::Queued
        );
        assert_eq!(
            JobState::from(&TranscriptionJobStatus::InProgress),
            JobState::InProgress
        );
        assert_eq!(
            JobState::from(&TranscriptionJobStatus::Completed),
            JobState::Completed
        );
        assert_eq!(
            JobState::from(&TranscriptionJobStatus::Failed),
            JobState::Failed
        );
    }

    #[test]
    fn unknown_provider_state_is_observed_as_in_progress() {
        let unknown = TranscriptionJobStatus::from("SOMETHING_NEW");
        assert_eq!(JobState::from(&unknown), JobState::InProgress);
    }

    #[test]
    fn terminal_states() {
        assert!(JobState::Completed.is_terminal());
        assert!(JobState::Failed.is_terminal());
        assert!(!JobState::Queued.is_terminal());
        assert!(!JobState::InProgress.is_terminal());
    }

    #[test]
    fn completed_job_carries_artifact_uri() {
        let job = TranscriptionJob::builder()
            .transcription_job_status(TranscriptionJobStatus::Completed)
            .transcript(
                Transcript::builder()
                    .transcript_file_uri("https://example.com/artifact.json")
                    .build(),
            )
            .build();

        let status = JobStatus::from(&job);
        assert_eq!(status.state, JobState::Completed);
        assert_eq!(
            status.result_artifact_uri.as_deref(),
            Some("https://example.com/artifact.json")
        );
        assert!(status.failure_reason.is_none());
    }

    #[test]
    fn non_terminal_job_carries_no_artifact_uri() {
        let job = TranscriptionJob::builder()
            .transcription_job_status(TranscriptionJobStatus::InProgress)
            .transcript(
                Transcript::builder()
                    .transcript_file_uri("https://example.com/early.json")
                    .build(),
            )
            .build();

        let status = JobStatus::from(&job);
        assert_eq!(status.state, JobState::InProgress);
        assert!(status.result_artifact_uri.is_none());
    }

    #[test]
    fn failed_job_carries_failure_reason() {
        let job = TranscriptionJob::builder()
            .transcription_job_status(TranscriptionJobStatus::Failed)
            .failure_reason("The media format is not supported")
            .build();

        let status = JobStatus::from(&job);
        assert_eq!(status.state, JobState::Failed);
        assert_eq!(
            status.failure_reason.as_deref(),
            Some("The media format is not supported")
        );
        assert!(status.result_artifact_uri.is_none());
    }
}
