use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::files::handler::upload_file,
        crate::modules::files::handler::list_files,
        crate::modules::files::handler::download_file,
        crate::modules::transcription::handler::start_transcription,
        crate::modules::transcription::handler::get_job_status,
        crate::modules::transcription::handler::get_job_result,
    ),
    components(
        schemas(
            crate::modules::files::dto::UploadResponse,
            crate::modules::files::dto::FileListResponse,
            crate::modules::transcription::dto::StartTranscriptionRequest,
            crate::modules::transcription::dto::StartTranscriptionResponse,
            crate::modules::transcription::dto::JobStatusResponse,
            crate::modules::transcription::dto::TranscriptResponse,
            crate::modules::transcription::model::JobState,
        )
    ),
    tags(
        (name = "Files", description = "Media file storage"),
        (name = "Transcription", description = "Asynchronous transcription jobs")
    )
)]
pub struct ApiDoc;
