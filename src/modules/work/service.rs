use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::gallery::{Page, PageSource};
use crate::modules::work::model::{CreateWorkModel, InsertWork, WorkResponse};
use crate::modules::work::repository::WorkRepository;

#[derive(Clone)]
pub struct WorkService {
    repo: Arc<dyn WorkRepository + Send + Sync>,
}

impl WorkService {
    pub fn with_dependencies(repo: Arc<dyn WorkRepository + Send + Sync>) -> Self {
        info!("WorkService initialized with dependencies");
        WorkService { repo }
    }

    /// Offset listing, newest first. The count is a fresh round-trip on
    /// every call; a window past the end is an empty page, not an error.
    pub async fn list(&self, page: u32, limit: u32) -> Result<Page<WorkResponse>, error::SystemError> {
        let skip = (i64::from(page) - 1) * i64::from(limit);
        let total = self.repo.count().await?;
        let entities = self.repo.find_page(skip, i64::from(limit)).await?;

        let total_pages = ((total + i64::from(limit) - 1) / i64::from(limit)) as u32;

        Ok(Page {
            items: entities.into_iter().map(WorkResponse::from).collect(),
            total,
            page,
            total_pages,
        })
    }

    pub async fn get_by_id(&self, id: &str) -> Result<WorkResponse, error::SystemError> {
        let id = parse_work_id(id)?;

        let entity = self.repo.find_by_id(&id).await?;
        match entity {
            Some(entity) => Ok(WorkResponse::from(entity)),
            None => Err(error::SystemError::not_found("Work not found")),
        }
    }

    /// The image descriptor must already have been produced by the upload
    /// service; creation never uploads.
    pub async fn create(&self, work: CreateWorkModel) -> Result<WorkResponse, error::SystemError> {
        let insert = InsertWork {
            title: work.title,
            category: work.category,
            description: work.description,
            image: work.image,
        };

        let entity = self.repo.create(&insert).await?;
        Ok(WorkResponse::from(entity))
    }

    pub async fn delete(&self, id: &str) -> Result<(), error::SystemError> {
        let id = parse_work_id(id)?;

        if self.repo.delete(&id).await? {
            Ok(())
        } else {
            Err(error::SystemError::not_found("Work not found"))
        }
    }
}

/// Malformed identifiers are rejected here, before any store round-trip.
fn parse_work_id(id: &str) -> Result<Uuid, error::SystemError> {
    Uuid::parse_str(id).map_err(|_| error::SystemError::bad_request("Invalid work id"))
}

#[async_trait::async_trait]
impl PageSource for WorkService {
    type Item = WorkResponse;

    async fn fetch_page(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Page<WorkResponse>, error::SystemError> {
        self.list(page, limit).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::TimeZone;

    use crate::modules::upload::model::ImageDescriptor;
    use crate::modules::work::model::ListWorksQuery;
    use crate::modules::work::schema::{WorkCategory, WorkEntity};

    use super::*;

    /// In-memory stand-in for the works collection.
    struct InMemoryWorkRepo {
        works: Mutex<Vec<WorkEntity>>,
    }

    impl InMemoryWorkRepo {
        fn new() -> Self {
            Self { works: Mutex::new(Vec::new()) }
        }

        fn seeded(count: i64) -> Self {
            let repo = Self::new();
            {
                let mut works = repo.works.lock().unwrap();
                for n in 0..count {
                    works.push(entity(n));
                }
            }
            repo
        }
    }

    fn entity(n: i64) -> WorkEntity {
        WorkEntity {
            id: Uuid::now_v7(),
            title: format!("Work number {}", n),
            category: WorkCategory::Photography,
            description: format!("Description of work number {}", n),
            image_url: format!("/uploads/work-{}.jpg", n),
            image_width: 1200,
            image_height: 800,
            created_at: chrono::Utc.timestamp_opt(1_700_000_000 + n, 0).unwrap(),
        }
    }

    #[async_trait::async_trait]
    impl WorkRepository for InMemoryWorkRepo {
        async fn count(&self) -> Result<i64, error::SystemError> {
            Ok(self.works.lock().unwrap().len() as i64)
        }

        async fn find_page(
            &self,
            skip: i64,
            limit: i64,
        ) -> Result<Vec<WorkEntity>, error::SystemError> {
            let mut works = self.works.lock().unwrap().clone();
            works.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(works.into_iter().skip(skip as usize).take(limit as usize).collect())
        }

        async fn find_by_id(&self, id: &Uuid) -> Result<Option<WorkEntity>, error::SystemError> {
            Ok(self.works.lock().unwrap().iter().find(|w| w.id == *id).cloned())
        }

        async fn create(&self, work: &InsertWork) -> Result<WorkEntity, error::SystemError> {
            let mut works = self.works.lock().unwrap();
            let entity = WorkEntity {
                id: Uuid::now_v7(),
                title: work.title.clone(),
                category: work.category,
                description: work.description.clone(),
                image_url: work.image.url.clone(),
                image_width: work.image.width,
                image_height: work.image.height,
                created_at: chrono::Utc.timestamp_opt(1_700_000_000 + works.len() as i64, 0).unwrap(),
            };
            works.push(entity.clone());
            Ok(entity)
        }

        async fn delete(&self, id: &Uuid) -> Result<bool, error::SystemError> {
            let mut works = self.works.lock().unwrap();
            let before = works.len();
            works.retain(|w| w.id != *id);
            Ok(works.len() < before)
        }
    }

    fn service(repo: InMemoryWorkRepo) -> WorkService {
        WorkService::with_dependencies(Arc::new(repo))
    }

    #[actix_web::test]
    async fn seven_works_paginate_as_five_then_two_then_empty() {
        let service = service(InMemoryWorkRepo::seeded(7));

        let first = service.list(1, 5).await.unwrap();
        assert_eq!(first.items.len(), 5);
        assert_eq!(first.total, 7);
        assert_eq!(first.total_pages, 2);

        let second = service.list(2, 5).await.unwrap();
        assert_eq!(second.items.len(), 2);
        assert_eq!(second.total_pages, 2);

        // past the end: empty page, same totals, no error
        let third = service.list(3, 5).await.unwrap();
        assert!(third.items.is_empty());
        assert_eq!(third.total, 7);
        assert_eq!(third.total_pages, 2);
    }

    #[actix_web::test]
    async fn pages_never_exceed_limit_and_total_pages_is_ceiling() {
        let service = service(InMemoryWorkRepo::seeded(11));

        for (limit, expected_pages) in [(1u32, 11u32), (3, 4), (5, 3), (11, 1), (20, 1)] {
            let page = service.list(1, limit).await.unwrap();
            assert!(page.items.len() <= limit as usize);
            assert_eq!(page.total_pages, expected_pages, "limit {}", limit);
        }
    }

    #[actix_web::test]
    async fn listing_is_sorted_newest_first_across_page_boundaries() {
        let service = service(InMemoryWorkRepo::seeded(7));

        let first = service.list(1, 5).await.unwrap();
        let second = service.list(2, 5).await.unwrap();

        let mut seen = first.items.iter().map(|w| w.created_at).collect::<Vec<_>>();
        seen.extend(second.items.iter().map(|w| w.created_at));
        for pair in seen.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[actix_web::test]
    async fn empty_collection_lists_as_zero_value_page() {
        let service = service(InMemoryWorkRepo::new());

        let page = service.list(1, 5).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[actix_web::test]
    async fn created_work_carries_its_descriptor_and_created_at() {
        let service = service(InMemoryWorkRepo::new());

        let created = service
            .create(CreateWorkModel {
                title: "Dunes at dusk".to_string(),
                category: WorkCategory::Photography,
                description: "Long exposure over the northern dunes".to_string(),
                image: ImageDescriptor {
                    url: "/uploads/dunes.jpg".to_string(),
                    width: 1600,
                    height: 900,
                },
            })
            .await
            .unwrap();

        let fetched = service.get_by_id(&created.id.to_string()).await.unwrap();
        assert_eq!(fetched.title, "Dunes at dusk");
        assert_eq!(fetched.image.url, "/uploads/dunes.jpg");
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[actix_web::test]
    async fn deleted_work_is_gone_and_second_delete_reports_not_found() {
        let repo = InMemoryWorkRepo::seeded(1);
        let id = repo.works.lock().unwrap()[0].id.to_string();
        let service = service(repo);

        service.delete(&id).await.unwrap();

        assert!(matches!(
            service.get_by_id(&id).await,
            Err(error::SystemError::NotFound(_))
        ));
        assert!(matches!(service.delete(&id).await, Err(error::SystemError::NotFound(_))));
    }

    #[actix_web::test]
    async fn malformed_id_is_rejected_before_touching_the_store() {
        let service = service(InMemoryWorkRepo::new());

        assert!(matches!(
            service.get_by_id("not-a-uuid").await,
            Err(error::SystemError::BadRequest(_))
        ));
        assert!(matches!(service.delete("42").await, Err(error::SystemError::BadRequest(_))));
    }

    #[test]
    fn list_query_validation_rejects_zero_page_and_limit() {
        use validator::Validate;

        let query: ListWorksQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 5);
        assert!(query.validate().is_ok());

        let query: ListWorksQuery = serde_json::from_str(r#"{"page": 0, "limit": 5}"#).unwrap();
        assert!(query.validate().is_err());

        let query: ListWorksQuery = serde_json::from_str(r#"{"page": 1, "limit": 0}"#).unwrap();
        assert!(query.validate().is_err());
    }

    #[test]
    fn work_response_serializes_with_camel_case_wire_names() {
        let response = WorkResponse::from(entity(0));
        let value = serde_json::to_value(&response).unwrap();

        assert!(value.get("createdAt").is_some());
        assert_eq!(value["category"], "photography");
        assert_eq!(value["image"]["width"], 1200);
    }
}
