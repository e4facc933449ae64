use uuid::Uuid;

use crate::api::error;
use crate::modules::work::model::InsertWork;
use crate::modules::work::schema::WorkEntity;

#[async_trait::async_trait]
pub trait WorkRepository {
    /// Full collection count, recomputed on every call.
    async fn count(&self) -> Result<i64, error::SystemError>;

    /// One offset window sorted by `created_at` descending. A window past
    /// the end yields an empty vector.
    async fn find_page(&self, skip: i64, limit: i64)
        -> Result<Vec<WorkEntity>, error::SystemError>;

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<WorkEntity>, error::SystemError>;

    async fn create(&self, work: &InsertWork) -> Result<WorkEntity, error::SystemError>;

    /// Hard delete; returns whether a row was actually removed.
    async fn delete(&self, id: &Uuid) -> Result<bool, error::SystemError>;
}
