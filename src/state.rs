use crate::config::settings::AppConfig;
use crate::infrastructure::storage::s3::StorageService;
use crate::infrastructure::transcribe::client::TranscribeService;
use crate::modules::transcription::extractor::TranscriptExtractor;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub storage: StorageService,
    pub transcribe: TranscribeService,
    pub extractor: TranscriptExtractor,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        storage: StorageService,
        transcribe: TranscribeService,
        extractor: TranscriptExtractor,
    ) -> Self {
        Self {
            config,
            storage,
            transcribe,
            extractor,
        }
    }
}
