use serde::{Deserialize, Serialize};
use sqlx::prelude::{FromRow, Type};
use uuid::Uuid;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Type, Serialize, Deserialize)]
#[sqlx(type_name = "work_category", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum WorkCategory {
    Photography,
    DigitalArt,
    Illustration,
}

#[derive(Debug, Clone, FromRow)]
pub struct WorkEntity {
    pub id: Uuid,
    pub title: String,
    pub category: WorkCategory,
    pub description: String,
    pub image_url: String,
    pub image_width: i32,
    pub image_height: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
