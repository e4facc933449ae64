pub mod handle;
pub mod model;
pub mod repository;
pub mod repository_pg;
pub mod route;
pub mod schema;
pub mod service;

pub use repository::WorkRepository;
pub use repository_pg::WorkRepositoryPg;
pub use schema::{WorkCategory, WorkEntity};
pub use service::WorkService;
