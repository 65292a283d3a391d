use crate::config::env::{self, EnvKey};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub aws_region: String,
    pub s3_bucket: String,
    /// Custom endpoint for S3-compatible stores (MinIO, localstack).
    pub s3_endpoint: Option<String>,
    pub aws_access_key: String,
    pub aws_secret_key: String,
    pub language_code: String,
    pub upload_prefix: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, std::env::VarError> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            aws_region: env::get_or(EnvKey::AwsRegion, "ap-south-1"),
            s3_bucket: env::get(EnvKey::S3Bucket)?,
            s3_endpoint: env::get(EnvKey::S3Endpoint).ok(),
            aws_access_key: env::get(EnvKey::AwsAccessKey)?,
            aws_secret_key: env::get(EnvKey::AwsSecretKey)?,
            language_code: env::get_or(EnvKey::LanguageCode, "en-US"),
            upload_prefix: env::get_or(EnvKey::UploadPrefix, "uploads/"),
        })
    }
}
