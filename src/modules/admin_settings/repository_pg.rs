use crate::api::error;
use crate::modules::admin_settings::{
    model::UpdateAdminSettings,
    repository::AdminSettingsRepository,
    schema::{AdminSettingsEntity, SETTINGS_DOC_TYPE},
};

#[derive(Clone)]
pub struct AdminSettingsRepositoryPg {
    pool: sqlx::PgPool,
}

impl AdminSettingsRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl AdminSettingsRepository for AdminSettingsRepositoryPg {
    async fn find(&self) -> Result<Option<AdminSettingsEntity>, error::SystemError> {
        let settings = sqlx::query_as::<_, AdminSettingsEntity>(
            "SELECT * FROM admin_settings WHERE doc_type = $1",
        )
        .bind(SETTINGS_DOC_TYPE)
        .fetch_optional(&self.pool)
        .await?;

        Ok(settings)
    }

    async fn upsert(
        &self,
        update: &UpdateAdminSettings,
    ) -> Result<AdminSettingsEntity, error::SystemError> {
        // COALESCE keeps the stored banner when the update carries none;
        // last writer wins on the overlapping fields
        let settings = sqlx::query_as::<_, AdminSettingsEntity>(
            "INSERT INTO admin_settings (doc_type, email, phone, banner_url, banner_width, banner_height, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, now()) \
             ON CONFLICT (doc_type) DO UPDATE SET \
                 email = EXCLUDED.email, \
                 phone = EXCLUDED.phone, \
                 banner_url = COALESCE(EXCLUDED.banner_url, admin_settings.banner_url), \
                 banner_width = COALESCE(EXCLUDED.banner_width, admin_settings.banner_width), \
                 banner_height = COALESCE(EXCLUDED.banner_height, admin_settings.banner_height), \
                 updated_at = now() \
             RETURNING *",
        )
        .bind(SETTINGS_DOC_TYPE)
        .bind(&update.email)
        .bind(&update.phone)
        .bind(update.banner.as_ref().map(|b| b.url.clone()))
        .bind(update.banner.as_ref().map(|b| b.width))
        .bind(update.banner.as_ref().map(|b| b.height))
        .fetch_one(&self.pool)
        .await?;

        Ok(settings)
    }
}
