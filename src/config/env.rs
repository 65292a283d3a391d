use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    AwsRegion,
    S3Bucket,
    S3Endpoint,
    AwsAccessKey,
    AwsSecretKey,
    LanguageCode,
    UploadPrefix,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::AwsRegion => "AWS_REGION",
            EnvKey::S3Bucket => "S3_BUCKET",
            EnvKey::S3Endpoint => "S3_ENDPOINT",
            EnvKey::AwsAccessKey => "AWS_ACCESS_KEY_ID",
            EnvKey::AwsSecretKey => "AWS_SECRET_ACCESS_KEY",
            EnvKey::LanguageCode => "TRANSCRIBE_LANGUAGE_CODE",
            EnvKey::UploadPrefix => "UPLOAD_PREFIX",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
