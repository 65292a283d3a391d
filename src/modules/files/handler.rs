use super::dto::{FileListResponse, UploadResponse};
use super::service::FileService;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::common::upload::stream_to_store;
use crate::infrastructure::storage::s3::StorageError;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Multipart, Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tokio_util::io::ReaderStream;
use tracing::info;

/// Upload a media file
/// The multipart `file` field is streamed straight to the object store.
#[utoipa::path(
    post,
    path = "/api/v1/files/upload",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File stored", body = ApiResponse<UploadResponse>),
        (status = 400, description = "Bad Request"),
        (status = 500, description = "Upload failed")
    ),
    tag = "Files"
)]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    while let Some(field) = multipart.next_field().await.unwrap_or(None) {
        let name = field.name().unwrap_or("").to_string();

        if name == "file" {
            let file_name = field.file_name().unwrap_or("upload.bin").to_string();
            let key = FileService::generate_key(&state.config.upload_prefix, &file_name);
            info!("Storing {} as {}", file_name, key);

            return match stream_to_store(&state.storage, field, key.clone()).await {
                Ok(_location) => ApiSuccess(
                    ApiResponse::success(UploadResponse { key }, "File uploaded successfully"),
                    StatusCode::CREATED,
                )
                .into_response(),
                Err(e) => ApiError(
                    format!("Upload failed: {}", e),
                    StatusCode::INTERNAL_SERVER_ERROR,
                )
                .into_response(),
            };
        }
    }

    ApiError(
        "No file field found in multipart request".to_string(),
        StatusCode::BAD_REQUEST,
    )
    .into_response()
}

/// List stored media files
#[utoipa::path(
    get,
    path = "/api/v1/files/list",
    responses(
        (status = 200, description = "Stored keys", body = ApiResponse<FileListResponse>),
        (status = 502, description = "Store error")
    ),
    tag = "Files"
)]
pub async fn list_files(State(state): State<AppState>) -> impl IntoResponse {
    match FileService::list(&state).await {
        Ok(files) => ApiSuccess(
            ApiResponse::success(FileListResponse { files }, "Files retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError(e.to_string(), StatusCode::BAD_GATEWAY).into_response(),
    }
}

/// Download a stored file
/// Streams the object from the store with an attachment disposition.
#[utoipa::path(
    get,
    path = "/api/v1/files/download/{key}",
    params(
        ("key" = String, Path, description = "Full object key, e.g. uploads/abc_meeting.mp3")
    ),
    responses(
        (status = 200, description = "Raw file bytes"),
        (status = 404, description = "File not found"),
        (status = 502, description = "Store error")
    ),
    tag = "Files"
)]
pub async fn download_file(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    let object = match FileService::download(&state, &key).await {
        Ok(o) => o,
        Err(StorageError::NotFound(_)) => {
            return ApiError(format!("File not found: {}", key), StatusCode::NOT_FOUND)
                .into_response();
        }
        Err(e) => return ApiError(e.to_string(), StatusCode::BAD_GATEWAY).into_response(),
    };

    let content_type = object
        .content_type()
        .map(str::to_string)
        .unwrap_or_else(|| mime_guess::from_path(&key).first_or_octet_stream().to_string());

    let file_name = key.rsplit('/').next().unwrap_or(&key);

    let mut builder = axum::response::Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        );

    if let Some(length) = object.content_length() {
        builder = builder.header(header::CONTENT_LENGTH, length);
    }

    let stream = ReaderStream::new(object.body.into_async_read());
    let body = Body::from_stream(stream);

    builder
        .body(body)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
