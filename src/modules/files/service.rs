use crate::infrastructure::storage::s3::StorageError;
use crate::state::AppState;
use aws_sdk_s3::operation::get_object::GetObjectOutput;
use uuid::Uuid;

pub struct FileService;

impl FileService {
    /// Store keys are `{prefix}{uuid}_{original name}` so uploads of the
    /// same file never collide.
    pub fn generate_key(prefix: &str, original_name: &str) -> String {
        format!(
            "{}{}_{}",
            prefix,
            Uuid::new_v4(),
            Self::sanitize_file_name(original_name)
        )
    }

    fn sanitize_file_name(name: &str) -> String {
        let cleaned: String = name
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if cleaned.is_empty() {
            "upload.bin".to_string()
        } else {
            cleaned
        }
    }

    pub async fn list(state: &AppState) -> Result<Vec<String>, StorageError> {
        state
            .storage
            .list_objects(&state.config.upload_prefix)
            .await
    }

    pub async fn download(state: &AppState, key: &str) -> Result<GetObjectOutput, StorageError> {
        state.storage.get_object(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_carry_the_prefix_and_original_name() {
        let key = FileService::generate_key("uploads/", "meeting.mp3");
        assert!(key.starts_with("uploads/"));
        assert!(key.ends_with("_meeting.mp3"));
    }

    #[test]
    fn keys_are_unique_for_the_same_file_name() {
        let keys: HashSet<String> = (0..100)
            .map(|_| FileService::generate_key("uploads/", "meeting.mp3"))
            .collect();
        assert_eq!(keys.len(), 100);
    }

    #[test]
    fn file_names_are_sanitized() {
        let key = FileService::generate_key("uploads/", "team sync (aug).mp3");
        assert!(key.ends_with("_team_sync__aug_.mp3"));
    }

    #[test]
    fn empty_file_name_gets_a_placeholder() {
        let key = FileService::generate_key("uploads/", "");
        assert!(key.ends_with("_upload.bin"));
    }
}
