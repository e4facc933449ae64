use uuid::Uuid;

use crate::api::error;
use crate::modules::work::{
    model::InsertWork, repository::WorkRepository, schema::WorkEntity,
};

#[derive(Clone)]
pub struct WorkRepositoryPg {
    pool: sqlx::PgPool,
}

impl WorkRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl WorkRepository for WorkRepositoryPg {
    async fn count(&self) -> Result<i64, error::SystemError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM works")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn find_page(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<WorkEntity>, error::SystemError> {
        // works_created_at_idx covers this sort
        let works = sqlx::query_as::<_, WorkEntity>(
            "SELECT * FROM works ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(works)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<WorkEntity>, error::SystemError> {
        let work = sqlx::query_as::<_, WorkEntity>("SELECT * FROM works WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(work)
    }

    async fn create(&self, work: &InsertWork) -> Result<WorkEntity, error::SystemError> {
        let work = sqlx::query_as::<_, WorkEntity>(
            "INSERT INTO works (title, category, description, image_url, image_width, image_height) VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&work.title)
        .bind(work.category)
        .bind(&work.description)
        .bind(&work.image.url)
        .bind(work.image.width)
        .bind(work.image.height)
        .fetch_one(&self.pool)
        .await?;

        Ok(work)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, error::SystemError> {
        let result = sqlx::query("DELETE FROM works WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
