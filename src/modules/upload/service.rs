use std::path::Path;

use image::GenericImageView;
use uuid::Uuid;

use crate::api::error;
use crate::modules::upload::model::{ImageDescriptor, UploadConfig};

#[derive(Clone)]
pub struct UploadService {
    config: UploadConfig,
}

impl UploadService {
    pub fn new(config: UploadConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(UploadConfig::default())
    }

    /// Validate file type and size
    fn validate_file(&self, file_size: usize, mime_type: &str) -> Result<(), error::SystemError> {
        if file_size == 0 {
            return Err(error::SystemError::bad_request("Uploaded file is empty"));
        }

        if file_size > self.config.max_file_size {
            return Err(error::SystemError::bad_request(format!(
                "File size exceeds maximum allowed size of {} bytes",
                self.config.max_file_size
            )));
        }

        if !self.config.allowed_mime_types.contains(&mime_type.to_string()) {
            return Err(error::SystemError::bad_request(format!(
                "File type '{}' is not allowed",
                mime_type
            )));
        }

        Ok(())
    }

    /// Generate unique filename, keeping the original extension when present
    /// and falling back to one guessed from the MIME type.
    fn generate_filename(&self, original_filename: &str, mime_type: &str) -> String {
        let extension = Path::new(original_filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_string)
            .or_else(|| {
                mime_guess::get_mime_extensions_str(mime_type)
                    .and_then(|exts| exts.first())
                    .map(|ext| (*ext).to_string())
            });

        let uuid = Uuid::now_v7();
        match extension {
            Some(ext) => format!("{}.{}", uuid, ext),
            None => uuid.to_string(),
        }
    }

    /// Decode just enough of the blob to learn its pixel dimensions.
    fn probe_dimensions(&self, bytes: &[u8]) -> Result<(u32, u32), error::SystemError> {
        let decoded = image::load_from_memory(bytes).map_err(|err| {
            log::warn!("Rejected upload, not a decodable image: {:?}", err);
            error::SystemError::bad_request("File is not a decodable image")
        })?;
        Ok(decoded.dimensions())
    }

    /// Save file to disk
    async fn save_file(&self, filename: &str, bytes: &[u8]) -> Result<(), error::SystemError> {
        tokio::fs::create_dir_all(&self.config.upload_dir).await?;

        let file_path = format!("{}/{}", self.config.upload_dir, filename);
        tokio::fs::write(&file_path, bytes).await?;

        Ok(())
    }

    /// Store an uploaded blob and return its durable descriptor. The
    /// descriptor is the only form in which an image may reach the
    /// repositories.
    pub async fn store(
        &self,
        original_filename: String,
        bytes: Vec<u8>,
        mime_type: String,
    ) -> Result<ImageDescriptor, error::SystemError> {
        self.validate_file(bytes.len(), &mime_type)?;

        let (width, height) = self.probe_dimensions(&bytes)?;

        let filename = self.generate_filename(&original_filename, &mime_type);
        self.save_file(&filename, &bytes).await?;

        let url = format!("{}/{}", self.config.base_url, filename);
        log::info!("Stored upload {} ({}x{})", url, width, height);

        Ok(ImageDescriptor { url, width: width as i32, height: height as i32 })
    }
}
