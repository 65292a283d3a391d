use super::dto::StartTranscriptionResponse;
use super::error::TranscriptionError;
use super::model::{JobState, JobStatus, MediaFormat, TranscriptOutcome};
use crate::state::AppState;
use std::time::Duration;
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

const INITIAL_POLL_DELAY: Duration = Duration::from_secs(2);
const MAX_POLL_DELAY: Duration = Duration::from_secs(30);

/// Upper bound a single result request may spend waiting on the provider.
pub const MAX_RESULT_WAIT: Duration = Duration::from_secs(600);

pub struct TranscriptionService;

impl TranscriptionService {
    /// Job names combine a timestamp with a random component so concurrent
    /// submissions never collide on the provider side.
    pub fn generate_job_name() -> String {
        let random = Uuid::new_v4().as_simple().to_string();
        format!(
            "transcribe-{}-{}",
            OffsetDateTime::now_utc().unix_timestamp(),
            &random[..8]
        )
    }

    /// Submits one transcription job for a stored object. Two calls with the
    /// same key create two independent jobs.
    pub async fn start(
        state: &AppState,
        source_key: &str,
    ) -> Result<StartTranscriptionResponse, TranscriptionError> {
        if source_key.trim().is_empty() {
            return Err(TranscriptionError::Validation(
                "source_key must not be blank".to_string(),
            ));
        }

        let format = MediaFormat::from_key(source_key);
        let job_id = Self::generate_job_name();
        let media_uri = format!("s3://{}/{}", state.config.s3_bucket, source_key);

        state
            .transcribe
            .start_job(&job_id, &media_uri, format.as_str(), &state.config.language_code)
            .await
            .map_err(|e| TranscriptionError::Submission(e.to_string()))?;

        info!("Started transcription job {} for {}", job_id, media_uri);

        Ok(StartTranscriptionResponse { job_id, media_uri })
    }

    /// Single status query against provider ground truth. Never waits.
    pub async fn check_status(
        state: &AppState,
        job_id: &str,
    ) -> Result<JobStatus, TranscriptionError> {
        if job_id.trim().is_empty() {
            return Err(TranscriptionError::Validation(
                "job_id must not be blank".to_string(),
            ));
        }

        let job = state.transcribe.get_job(job_id).await.map_err(|e| match e {
            aws_sdk_transcribe::Error::NotFoundException(_) => {
                TranscriptionError::JobNotFound(job_id.to_string())
            }
            other => TranscriptionError::Provider(other.to_string()),
        })?;

        let job = job.ok_or_else(|| {
            TranscriptionError::Provider(format!(
                "provider returned no description for job {}",
                job_id
            ))
        })?;

        Ok(JobStatus::from(&job))
    }

    /// Re-fetches status and, for completed jobs, pulls the transcript out
    /// of the completion artifact. Nothing is cached between calls.
    pub async fn get_result(
        state: &AppState,
        job_id: &str,
    ) -> Result<TranscriptOutcome, TranscriptionError> {
        let status = Self::check_status(state, job_id).await?;

        if status.state != JobState::Completed {
            return Ok(TranscriptOutcome::NotReady {
                state: status.state,
            });
        }

        let artifact_uri = status.result_artifact_uri.ok_or_else(|| {
            TranscriptionError::InconsistentState(format!(
                "job {} is Completed but the provider returned no transcript uri",
                job_id
            ))
        })?;

        let transcript = state.extractor.fetch_transcript(&artifact_uri).await?;
        Ok(TranscriptOutcome::Completed { transcript })
    }

    /// Polls with bounded exponential backoff until the job reaches a
    /// terminal state or the wait budget runs out, returning the last
    /// observed status either way.
    pub async fn wait_for_completion(
        state: &AppState,
        job_id: &str,
        max_wait: Duration,
    ) -> Result<JobStatus, TranscriptionError> {
        let deadline = tokio::time::Instant::now() + max_wait;
        let mut delay = INITIAL_POLL_DELAY;

        loop {
            let status = Self::check_status(state, job_id).await?;
            if status.state.is_terminal() {
                return Ok(status);
            }

            if tokio::time::Instant::now() + delay > deadline {
                info!(
                    "Job {} still {} after waiting {:?}",
                    job_id, status.state, max_wait
                );
                return Ok(status);
            }

            tokio::time::sleep(delay).await;
            delay = next_poll_delay(delay);
        }
    }
}

fn next_poll_delay(current: Duration) -> Duration {
    (current * 2).min(MAX_POLL_DELAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn job_names_have_the_expected_shape() {
        let name = TranscriptionService::generate_job_name();
        let parts: Vec<&str> = name.splitn(3, '-').collect();

        assert_eq!(parts[0], "transcribe");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 8);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn job_names_are_unique_across_repeated_calls() {
        let names: HashSet<String> = (0..1000)
            .map(|_| TranscriptionService::generate_job_name())
            .collect();
        assert_eq!(names.len(), 1000);
    }

    #[test]
    fn poll_delay_doubles_up_to_the_cap() {
        let mut delay = INITIAL_POLL_DELAY;
        delay = next_poll_delay(delay);
        assert_eq!(delay, Duration::from_secs(4));
        delay = next_poll_delay(delay);
        assert_eq!(delay, Duration::from_secs(8));
        delay = next_poll_delay(delay);
        assert_eq!(delay, Duration::from_secs(16));
        delay = next_poll_delay(delay);
        assert_eq!(delay, MAX_POLL_DELAY);
        delay = next_poll_delay(delay);
        assert_eq!(delay, MAX_POLL_DELAY);
    }
}
