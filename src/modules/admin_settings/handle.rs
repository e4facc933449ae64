use actix_multipart::Multipart;
use actix_web::{get, post, web};
use futures_util::TryStreamExt;

use crate::api::error;
use crate::modules::admin_settings::model::AdminSettingsResponse;
use crate::modules::admin_settings::service::AdminSettingsService;
use crate::modules::upload::service::UploadService;

#[get("")]
pub async fn get_admin_details(
    settings_service: web::Data<AdminSettingsService>,
) -> Result<web::Json<AdminSettingsResponse>, error::Error> {
    let settings = settings_service.get().await?;
    Ok(web::Json(settings))
}

/// Multipart form: `email`, `phone`, and optionally a new `bannerImage`
/// file. The upload happens first and its descriptor is merged into the
/// upsert; the two steps are not atomic, so a crash in between leaves an
/// unreferenced file behind.
#[post("")]
pub async fn update_admin_details(
    mut payload: Multipart,
    settings_service: web::Data<AdminSettingsService>,
    upload_service: web::Data<UploadService>,
) -> Result<web::Json<AdminSettingsResponse>, error::Error> {
    let mut email: Option<String> = None;
    let mut phone: Option<String> = None;
    let mut banner_file: Option<(String, String, Vec<u8>)> = None;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|_| error::Error::bad_request("Malformed multipart payload"))?
    {
        let (name, filename) = {
            let Some(content_disposition) = field.content_disposition() else { continue };
            (
                content_disposition.get_name().map(str::to_string),
                content_disposition.get_filename().map(str::to_string),
            )
        };
        let Some(name) = name else { continue };

        let mime_type = field
            .content_type()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(|_| error::Error::InternalServer)? {
            bytes.extend_from_slice(&chunk);
        }

        match name.as_str() {
            "email" => email = Some(text_field(bytes)?),
            "phone" => phone = Some(text_field(bytes)?),
            "bannerImage" => {
                // an empty file part means no new banner was chosen
                if !bytes.is_empty() {
                    let filename = filename.unwrap_or_else(|| "banner".to_string());
                    banner_file = Some((filename, mime_type, bytes));
                }
            }
            _ => {}
        }
    }

    let (Some(email), Some(phone)) = (email, phone) else {
        return Err(error::Error::bad_request("Email and phone are required"));
    };

    let banner = match banner_file {
        Some((filename, mime_type, bytes)) => {
            Some(upload_service.store(filename, bytes, mime_type).await?)
        }
        None => None,
    };

    let settings = settings_service.update(email, phone, banner).await?;
    Ok(web::Json(settings))
}

fn text_field(bytes: Vec<u8>) -> Result<String, error::Error> {
    String::from_utf8(bytes).map_err(|_| error::Error::bad_request("Form field is not valid UTF-8"))
}
