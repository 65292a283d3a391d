use crate::config::settings::AppConfig;
use aws_sdk_transcribe::Client;
use aws_sdk_transcribe::config::timeout::TimeoutConfig;
use aws_sdk_transcribe::config::{BehaviorVersion, Builder, Credentials, Region};
use aws_sdk_transcribe::types::{LanguageCode, Media, MediaFormat, TranscriptionJob};
use std::time::Duration;
use tracing::info;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const OPERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin wrapper over the remote transcription provider. Job state lives
/// entirely on the provider side; this client only starts jobs and reads
/// their current description.
#[derive(Clone)]
pub struct TranscribeService {
    pub client: Client,
}

impl TranscribeService {
    pub fn new(config: &AppConfig) -> Self {
        let credentials = Credentials::new(
            &config.aws_access_key,
            &config.aws_secret_key,
            None,
            None,
            "static",
        );

        let timeouts = TimeoutConfig::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .operation_timeout(OPERATION_TIMEOUT)
            .build();

        let conf = Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.aws_region.clone()))
            .credentials_provider(credentials)
            .timeout_config(timeouts)
            .build();

        let client = Client::from_conf(conf);

        info!(
            "✅ Transcription provider client ready (region: {})",
            config.aws_region
        );

        Self { client }
    }

    pub async fn start_job(
        &self,
        job_name: &str,
        media_uri: &str,
        media_format: &str,
        language_code: &str,
    ) -> Result<(), aws_sdk_transcribe::Error> {
        let media = Media::builder().media_file_uri(media_uri).build();

        self.client
            .start_transcription_job()
            .transcription_job_name(job_name)
            .language_code(LanguageCode::from(language_code))
            .media_format(MediaFormat::from(media_format))
            .media(media)
            .send()
            .await?;

        Ok(())
    }

    /// Re-fetches the provider's current description of a job. Returns None
    /// when the provider answers without a job body.
    pub async fn get_job(
        &self,
        job_name: &str,
    ) -> Result<Option<TranscriptionJob>, aws_sdk_transcribe::Error> {
        let resp = self
            .client
            .get_transcription_job()
            .transcription_job_name(job_name)
            .send()
            .await?;

        Ok(resp.transcription_job)
    }
}
