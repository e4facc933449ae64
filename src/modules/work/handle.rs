use actix_web::{delete, get, post, web};

use crate::api::error;
use crate::modules::work::model::{
    CreateWorkModel, DeleteWorkResponse, ListWorksQuery, WorkResponse, WorksListResponse,
};
use crate::modules::work::service::WorkService;
use crate::utils::{ValidatedJson, ValidatedQuery};

#[get("")]
pub async fn list_works(
    work_service: web::Data<WorkService>,
    query: ValidatedQuery<ListWorksQuery>,
) -> Result<web::Json<WorksListResponse>, error::Error> {
    let page = work_service.list(query.0.page, query.0.limit).await?;
    Ok(web::Json(WorksListResponse::from(page)))
}

#[post("")]
pub async fn create_work(
    work_service: web::Data<WorkService>,
    work_data: ValidatedJson<CreateWorkModel>,
) -> Result<web::Json<WorkResponse>, error::Error> {
    let work = work_service.create(work_data.0).await?;
    Ok(web::Json(work))
}

#[get("/{id}")]
pub async fn get_work(
    work_service: web::Data<WorkService>,
    work_id: web::Path<String>,
) -> Result<web::Json<WorkResponse>, error::Error> {
    let work = work_service.get_by_id(&work_id).await?;
    Ok(web::Json(work))
}

#[delete("/{id}")]
pub async fn delete_work(
    work_service: web::Data<WorkService>,
    work_id: web::Path<String>,
) -> Result<web::Json<DeleteWorkResponse>, error::Error> {
    work_service.delete(&work_id).await?;
    Ok(web::Json(DeleteWorkResponse { success: true }))
}
