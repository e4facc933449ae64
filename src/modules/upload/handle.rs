use actix_multipart::Multipart;
use actix_web::{post, web};
use futures_util::TryStreamExt;

use crate::api::error;
use crate::modules::upload::model::ImageDescriptor;
use crate::modules::upload::service::UploadService;

/// Accepts one multipart `file` field and hands it to the upload service.
#[post("/upload")]
pub async fn upload_image(
    mut payload: Multipart,
    service: web::Data<UploadService>,
) -> Result<web::Json<ImageDescriptor>, error::Error> {
    while let Some(mut field) =
        payload.try_next().await.map_err(|_| error::Error::bad_request("Malformed multipart payload"))?
    {
        let (name, filename) = {
            let content_disposition = field
                .content_disposition()
                .ok_or_else(|| error::Error::bad_request("Missing content disposition"))?;
            (
                content_disposition.get_name().map(str::to_string),
                content_disposition.get_filename().map(str::to_string),
            )
        };

        if name.as_deref() != Some("file") {
            continue;
        }

        let filename = filename.ok_or_else(|| error::Error::bad_request("Missing filename"))?;

        let mime_type = field
            .content_type()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(|_| error::Error::InternalServer)? {
            bytes.extend_from_slice(&chunk);
        }

        let descriptor = service.store(filename, bytes, mime_type).await?;
        return Ok(web::Json(descriptor));
    }

    Err(error::Error::bad_request("No file found in request"))
}
