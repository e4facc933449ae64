use crate::api::error;
use crate::modules::admin_settings::model::UpdateAdminSettings;
use crate::modules::admin_settings::schema::AdminSettingsEntity;

#[async_trait::async_trait]
pub trait AdminSettingsRepository {
    async fn find(&self) -> Result<Option<AdminSettingsEntity>, error::SystemError>;

    /// Upsert keyed on the singleton discriminator. A missing banner in the
    /// update must not clear a stored one.
    async fn upsert(
        &self,
        update: &UpdateAdminSettings,
    ) -> Result<AdminSettingsEntity, error::SystemError>;
}
