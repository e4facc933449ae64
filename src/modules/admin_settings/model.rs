use serde::Serialize;

use crate::modules::admin_settings::schema::AdminSettingsEntity;
use crate::modules::upload::model::ImageDescriptor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSettingsResponse {
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<ImageDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl AdminSettingsResponse {
    /// First-run state, before any update has been stored.
    pub fn unset() -> Self {
        AdminSettingsResponse {
            email: String::new(),
            phone: String::new(),
            banner_image: None,
            updated_at: None,
        }
    }
}

impl From<AdminSettingsEntity> for AdminSettingsResponse {
    fn from(entity: AdminSettingsEntity) -> Self {
        let banner_image = match (entity.banner_url, entity.banner_width, entity.banner_height) {
            (Some(url), Some(width), Some(height)) => {
                Some(ImageDescriptor { url, width, height })
            }
            _ => None,
        };

        AdminSettingsResponse {
            email: entity.email,
            phone: entity.phone,
            banner_image,
            updated_at: Some(entity.updated_at),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateAdminSettings {
    pub email: String,
    pub phone: String,
    /// `None` leaves any previously stored banner untouched.
    pub banner: Option<ImageDescriptor>,
}
