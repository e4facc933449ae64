use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::modules::gallery::Page;
use crate::modules::upload::model::ImageDescriptor;
use crate::modules::work::schema::{WorkCategory, WorkEntity};

#[derive(Deserialize, Validate)]
pub struct CreateWorkModel {
    #[validate(length(min = 3, max = 30, message = "Title must be 3-30 characters long"))]
    pub title: String,
    pub category: WorkCategory,
    #[validate(length(min = 10, max = 90, message = "Description must be 10-90 characters long"))]
    pub description: String,
    // must already have been produced by the upload service
    #[validate(nested)]
    pub image: ImageDescriptor,
}

#[derive(Debug, Clone)]
pub struct InsertWork {
    pub title: String,
    pub category: WorkCategory,
    pub description: String,
    pub image: ImageDescriptor,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    5
}

#[derive(Deserialize, Validate)]
pub struct ListWorksQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: u32,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkResponse {
    pub id: Uuid,
    pub title: String,
    pub category: WorkCategory,
    pub description: String,
    pub image: ImageDescriptor,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<WorkEntity> for WorkResponse {
    fn from(entity: WorkEntity) -> Self {
        WorkResponse {
            id: entity.id,
            title: entity.title,
            category: entity.category,
            description: entity.description,
            image: ImageDescriptor {
                url: entity.image_url,
                width: entity.image_width,
                height: entity.image_height,
            },
            created_at: entity.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorksListResponse {
    pub works: Vec<WorkResponse>,
    pub total: i64,
    pub page: u32,
    pub total_pages: u32,
}

impl From<Page<WorkResponse>> for WorksListResponse {
    fn from(page: Page<WorkResponse>) -> Self {
        WorksListResponse {
            works: page.items,
            total: page.total,
            page: page.page,
            total_pages: page.total_pages,
        }
    }
}

#[derive(Serialize)]
pub struct DeleteWorkResponse {
    pub success: bool,
}
