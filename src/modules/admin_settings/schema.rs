use sqlx::prelude::FromRow;

/// Value of the `doc_type` discriminator; at most one row carries it.
pub const SETTINGS_DOC_TYPE: &str = "admin";

#[derive(Debug, Clone, FromRow)]
pub struct AdminSettingsEntity {
    pub doc_type: String,
    pub email: String,
    pub phone: String,
    pub banner_url: Option<String>,
    pub banner_width: Option<i32>,
    pub banner_height: Option<i32>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
