pub mod handle;
pub mod model;
pub mod provider;
pub mod repository;
pub mod repository_pg;
pub mod route;
pub mod schema;
pub mod service;

pub use provider::{AdminDetailsProvider, AdminDetailsSource};
pub use repository::AdminSettingsRepository;
pub use repository_pg::AdminSettingsRepositoryPg;
pub use service::AdminSettingsService;
