use super::error::TranscriptionError;
use std::time::Duration;
use tracing::info;
use url::Url;

// The artifact host may be slow or unreachable; bound both phases so a
// result call can never hang.
const ARTIFACT_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const ARTIFACT_READ_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches completion artifacts (JSON documents on a possibly time-limited
/// https location) and pulls the plain-text transcript out of them.
#[derive(Clone)]
pub struct TranscriptExtractor {
    http: reqwest::Client,
}

impl TranscriptExtractor {
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(ARTIFACT_CONNECT_TIMEOUT)
            .timeout(ARTIFACT_READ_TIMEOUT)
            .build()
            .expect("Failed to build artifact HTTP client");

        Self { http }
    }

    pub async fn fetch_transcript(
        &self,
        artifact_uri: &str,
    ) -> Result<Option<String>, TranscriptionError> {
        let url = Url::parse(artifact_uri).map_err(|e| {
            TranscriptionError::Fetch(format!("invalid artifact uri {}: {}", artifact_uri, e))
        })?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| TranscriptionError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranscriptionError::Fetch(format!(
                "artifact host returned {}",
                status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TranscriptionError::Fetch(e.to_string()))?;

        info!("Fetched transcript artifact ({} bytes)", body.len());
        extract_transcript_text(&body)
    }
}

/// Pulls the first entry of `results.transcripts` out of an artifact body.
/// An empty or missing array means the job produced no transcript, which is
/// a defined outcome, not an error.
pub fn extract_transcript_text(body: &[u8]) -> Result<Option<String>, TranscriptionError> {
    let document: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| TranscriptionError::Parse(e.to_string()))?;

    let first_entry = document
        .get("results")
        .and_then(|results| results.get("transcripts"))
        .and_then(|transcripts| transcripts.as_array())
        .and_then(|transcripts| transcripts.first());

    Ok(first_entry
        .and_then(|entry| entry.get("transcript"))
        .and_then(|text| text.as_str())
        .map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_transcript_entry() {
        let body = br#"{
            "jobName": "transcribe-1700000000-ab12cd34",
            "results": {
                "transcripts": [
                    {"transcript": "hello world"},
                    {"transcript": "ignored second entry"}
                ]
            }
        }"#;

        let text = extract_transcript_text(body).unwrap();
        assert_eq!(text.as_deref(), Some("hello world"));
    }

    #[test]
    fn empty_transcripts_array_is_absent_text_not_an_error() {
        let body = br#"{"results": {"transcripts": []}}"#;
        assert_eq!(extract_transcript_text(body).unwrap(), None);
    }

    #[test]
    fn missing_results_is_absent_text_not_an_error() {
        let body = br#"{"jobName": "x"}"#;
        assert_eq!(extract_transcript_text(body).unwrap(), None);
    }

    #[test]
    fn entry_without_transcript_field_is_absent_text() {
        let body = br#"{"results": {"transcripts": [{"confidence": "0.9"}]}}"#;
        assert_eq!(extract_transcript_text(body).unwrap(), None);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = extract_transcript_text(b"not json at all").unwrap_err();
        assert!(matches!(err, TranscriptionError::Parse(_)));
    }
}
