use log::info;
use std::sync::Arc;

use crate::api::error;
use crate::modules::admin_settings::model::{AdminSettingsResponse, UpdateAdminSettings};
use crate::modules::admin_settings::provider::AdminDetailsSource;
use crate::modules::admin_settings::repository::AdminSettingsRepository;
use crate::modules::upload::model::ImageDescriptor;

#[derive(Clone)]
pub struct AdminSettingsService {
    repo: Arc<dyn AdminSettingsRepository + Send + Sync>,
}

impl AdminSettingsService {
    pub fn with_dependencies(repo: Arc<dyn AdminSettingsRepository + Send + Sync>) -> Self {
        info!("AdminSettingsService initialized with dependencies");
        AdminSettingsService { repo }
    }

    /// The first-run state is a zero-value record, never an error.
    pub async fn get(&self) -> Result<AdminSettingsResponse, error::SystemError> {
        let settings = self.repo.find().await?;
        Ok(settings.map(AdminSettingsResponse::from).unwrap_or_else(AdminSettingsResponse::unset))
    }

    /// `banner` carries a descriptor only when a new image was uploaded in
    /// this call; `None` leaves the stored banner as it is.
    pub async fn update(
        &self,
        email: String,
        phone: String,
        banner: Option<ImageDescriptor>,
    ) -> Result<AdminSettingsResponse, error::SystemError> {
        if email.trim().is_empty() || phone.trim().is_empty() {
            return Err(error::SystemError::bad_request("Email and phone are required"));
        }

        let entity = self.repo.upsert(&UpdateAdminSettings { email, phone, banner }).await?;
        Ok(AdminSettingsResponse::from(entity))
    }
}

#[async_trait::async_trait]
impl AdminDetailsSource for AdminSettingsService {
    async fn fetch_details(&self) -> Result<AdminSettingsResponse, error::SystemError> {
        self.get().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::modules::admin_settings::schema::{AdminSettingsEntity, SETTINGS_DOC_TYPE};

    use super::*;

    /// In-memory upsert with the same merge rule as the SQL statement.
    struct InMemorySettingsRepo {
        row: Mutex<Option<AdminSettingsEntity>>,
    }

    impl InMemorySettingsRepo {
        fn new() -> Self {
            Self { row: Mutex::new(None) }
        }
    }

    #[async_trait::async_trait]
    impl AdminSettingsRepository for InMemorySettingsRepo {
        async fn find(&self) -> Result<Option<AdminSettingsEntity>, error::SystemError> {
            Ok(self.row.lock().unwrap().clone())
        }

        async fn upsert(
            &self,
            update: &UpdateAdminSettings,
        ) -> Result<AdminSettingsEntity, error::SystemError> {
            let mut row = self.row.lock().unwrap();
            let previous = row.clone();
            let banner = update.banner.clone();

            let entity = AdminSettingsEntity {
                doc_type: SETTINGS_DOC_TYPE.to_string(),
                email: update.email.clone(),
                phone: update.phone.clone(),
                banner_url: banner
                    .as_ref()
                    .map(|b| b.url.clone())
                    .or_else(|| previous.as_ref().and_then(|p| p.banner_url.clone())),
                banner_width: banner
                    .as_ref()
                    .map(|b| b.width)
                    .or_else(|| previous.as_ref().and_then(|p| p.banner_width)),
                banner_height: banner
                    .as_ref()
                    .map(|b| b.height)
                    .or_else(|| previous.as_ref().and_then(|p| p.banner_height)),
                updated_at: chrono::Utc::now(),
            };
            *row = Some(entity.clone());
            Ok(entity)
        }
    }

    fn service() -> AdminSettingsService {
        AdminSettingsService::with_dependencies(Arc::new(InMemorySettingsRepo::new()))
    }

    fn banner(url: &str) -> ImageDescriptor {
        ImageDescriptor { url: url.to_string(), width: 1920, height: 600 }
    }

    #[actix_web::test]
    async fn first_run_get_returns_zero_values_not_an_error() {
        let settings = service().get().await.unwrap();
        assert_eq!(settings, AdminSettingsResponse::unset());
        assert_eq!(settings.email, "");
        assert_eq!(settings.phone, "");
    }

    #[actix_web::test]
    async fn update_without_banner_preserves_the_stored_one() {
        let service = service();

        service
            .update("me@example.com".into(), "555-0100".into(), Some(banner("/uploads/a.jpg")))
            .await
            .unwrap();

        let updated =
            service.update("new@example.com".into(), "555-0199".into(), None).await.unwrap();

        assert_eq!(updated.email, "new@example.com");
        assert_eq!(updated.banner_image, Some(banner("/uploads/a.jpg")));
    }

    #[actix_web::test]
    async fn update_with_banner_replaces_it_entirely() {
        let service = service();

        service
            .update("me@example.com".into(), "555-0100".into(), Some(banner("/uploads/a.jpg")))
            .await
            .unwrap();
        let updated = service
            .update("me@example.com".into(), "555-0100".into(), Some(banner("/uploads/b.jpg")))
            .await
            .unwrap();

        assert_eq!(updated.banner_image, Some(banner("/uploads/b.jpg")));
    }

    #[actix_web::test]
    async fn update_requires_both_email_and_phone() {
        let service = service();

        let missing_phone = service.update("me@example.com".into(), "  ".into(), None).await;
        assert!(matches!(missing_phone, Err(error::SystemError::BadRequest(_))));

        let missing_email = service.update(String::new(), "555-0100".into(), None).await;
        assert!(matches!(missing_email, Err(error::SystemError::BadRequest(_))));

        // nothing was persisted by the rejected updates
        assert_eq!(service.get().await.unwrap(), AdminSettingsResponse::unset());
    }

    #[test]
    fn unset_settings_serialize_without_banner_or_timestamp_keys() {
        let value = serde_json::to_value(AdminSettingsResponse::unset()).unwrap();
        assert_eq!(value, serde_json::json!({ "email": "", "phone": "" }));
    }
}
