use crate::infrastructure::storage::s3::StorageService;
use anyhow::{Result, anyhow};
use axum::{body::Bytes, extract::multipart::Field};
use futures_util::StreamExt;
use tracing::{error, info};

// S3 rejects multipart parts under 5MB (except the last). Buffer a bit above.
const MIN_PART_SIZE: usize = 6 * 1024 * 1024;

pub struct MultipartUploader<'a> {
    store: &'a StorageService,
    key: String,
    upload_id: String,
    parts: Vec<aws_sdk_s3::types::CompletedPart>,
    part_number: i32,
    buffer: Vec<u8>,
    total_bytes: u64,
}

impl<'a> MultipartUploader<'a> {
    pub async fn new(store: &'a StorageService, key: String, content_type: &str) -> Result<Self> {
        let upload_id = store
            .create_multipart_upload(&key, content_type)
            .await
            .map_err(|e| anyhow!("Failed to initiate upload: {}", e))?;

        Ok(Self {
            store,
            key,
            upload_id,
            parts: Vec::new(),
            part_number: 1,
            buffer: Vec::with_capacity(MIN_PART_SIZE),
            total_bytes: 0,
        })
    }

    pub async fn write_chunk(&mut self, chunk: Bytes) -> Result<()> {
        self.total_bytes += chunk.len() as u64;
        self.buffer.extend_from_slice(&chunk);

        if self.buffer.len() >= MIN_PART_SIZE {
            self.flush_part().await?;
        }

        Ok(())
    }

    async fn flush_part(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let body = Bytes::from(std::mem::take(&mut self.buffer));
        self.buffer.reserve(MIN_PART_SIZE);

        let part = self
            .store
            .upload_part(&self.key, &self.upload_id, self.part_number, body)
            .await
            .map_err(|e| anyhow!("Failed to upload part {}: {}", self.part_number, e))?;

        self.parts.push(part);
        self.part_number += 1;

        Ok(())
    }

    pub async fn finish(mut self) -> Result<String> {
        // Whatever remains in the buffer goes out as the final (possibly
        // undersized) part.
        if !self.buffer.is_empty() {
            self.flush_part().await?;
        }

        let location = self
            .store
            .complete_multipart_upload(&self.key, &self.upload_id, self.parts)
            .await
            .map_err(|e| anyhow!("Failed to complete upload: {}", e))?;

        info!("Uploaded {} bytes to {}", self.total_bytes, self.key);
        Ok(location)
    }

    pub async fn abort(&self) -> Result<()> {
        self.store
            .abort_multipart_upload(&self.key, &self.upload_id)
            .await
            .map_err(|e| anyhow!("Failed to abort upload: {}", e))
    }
}

fn is_supported_media(content_type: &str) -> bool {
    content_type.starts_with("audio/")
        || content_type.starts_with("video/")
        || content_type == "application/octet-stream"
}

/// Streams a multipart field into the object store. Files that fit under the
/// first part boundary go out as a single put; larger ones switch to a
/// multipart upload that is aborted if the client stream breaks.
pub async fn stream_to_store(
    store: &StorageService,
    mut field: Field<'_>,
    key: String,
) -> Result<String> {
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    if !is_supported_media(&content_type) {
        return Err(anyhow!(
            "Invalid content type {}: only audio/* and video/* uploads are accepted",
            content_type
        ));
    }

    let mut head: Vec<u8> = Vec::new();
    let mut uploader: Option<MultipartUploader<'_>> = None;

    while let Some(chunk) = field.next().await {
        let chunk = match chunk {
            Ok(c) => c,
            Err(e) => {
                error!("Stream error: {}", e);
                if let Some(u) = &uploader {
                    u.abort().await?;
                }
                return Err(anyhow!("Stream interrupted"));
            }
        };

        if let Some(u) = uploader.as_mut() {
            if let Err(e) = u.write_chunk(chunk).await {
                error!("Upload error: {}", e);
                u.abort().await?;
                return Err(e);
            }
            continue;
        }

        head.extend_from_slice(&chunk);
        if head.len() >= MIN_PART_SIZE {
            let mut u = MultipartUploader::new(store, key.clone(), &content_type).await?;
            let buffered = Bytes::from(std::mem::take(&mut head));
            if let Err(e) = u.write_chunk(buffered).await {
                error!("Upload error: {}", e);
                u.abort().await?;
                return Err(e);
            }
            uploader = Some(u);
        }
    }

    match uploader {
        Some(u) => u.finish().await,
        None => {
            let size = head.len();
            store
                .put_object(&key, Bytes::from(head), &content_type)
                .await
                .map_err(|e| anyhow!("Failed to store object: {}", e))?;

            info!("Uploaded {} bytes to {}", size, key);
            Ok(format!("{}/{}", store.bucket, key))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_audio_and_video_content_types() {
        assert!(is_supported_media("audio/mpeg"));
        assert!(is_supported_media("audio/wav"));
        assert!(is_supported_media("video/mp4"));
        assert!(is_supported_media("application/octet-stream"));
    }

    #[test]
    fn rejects_non_media_content_types() {
        assert!(!is_supported_media("text/html"));
        assert!(!is_supported_media("image/png"));
        assert!(!is_supported_media("application/json"));
    }
}
