use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ENV;

/// Durable image reference produced by the upload service. Persisted
/// verbatim on works and admin settings; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ImageDescriptor {
    #[validate(length(min = 1, message = "Image url cannot be empty"))]
    pub url: String,
    #[validate(range(min = 1, message = "Image width must be positive"))]
    pub width: i32,
    #[validate(range(min = 1, message = "Image height must be positive"))]
    pub height: i32,
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub max_file_size: usize,
    pub allowed_mime_types: Vec<String>,
    pub upload_dir: String,
    pub base_url: String,
}

impl UploadConfig {
    pub fn from_env() -> Self {
        Self {
            max_file_size: ENV.max_upload_bytes,
            upload_dir: ENV.upload_dir.clone(),
            base_url: ENV.upload_base_url.clone(),
            ..Self::default()
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024, // 10MB
            allowed_mime_types: vec![
                "image/jpeg".to_string(),
                "image/png".to_string(),
                "image/gif".to_string(),
                "image/webp".to_string(),
            ],
            upload_dir: "./uploads".to_string(),
            base_url: "/uploads".to_string(),
        }
    }
}
