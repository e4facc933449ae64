use actix_cors::Cors;
use actix_web::{self, middleware::Logger, web, App, HttpServer};
use std::sync::Arc;

use portfolio_backend::{
    configs::{connect_database, run_migrations},
    modules::{
        admin_settings::{repository_pg::AdminSettingsRepositoryPg, service::AdminSettingsService},
        contact::service::EmailService,
        upload::{model::UploadConfig, service::UploadService},
        work::{repository_pg::WorkRepositoryPg, service::WorkService},
    },
    ENV,
};

#[actix_web::get("/")]
async fn health_check() -> &'static str {
    "Server is running"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let db_pool =
        connect_database().await.map_err(|_| std::io::Error::other("Database connection error"))?;
    run_migrations(&db_pool)
        .await
        .map_err(|_| std::io::Error::other("Database migration error"))?;

    let work_repo = WorkRepositoryPg::new(db_pool.clone());
    let settings_repo = AdminSettingsRepositoryPg::new(db_pool.clone());

    let work_service = WorkService::with_dependencies(Arc::new(work_repo));
    let settings_service = AdminSettingsService::with_dependencies(Arc::new(settings_repo));
    let upload_service = UploadService::new(UploadConfig::from_env());
    let email_service =
        EmailService::from_env().map_err(|_| std::io::Error::other("SMTP transport error"))?;

    println!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(ENV.frontend_url.as_str())
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(work_service.clone()))
            .app_data(web::Data::new(settings_service.clone()))
            .app_data(web::Data::new(upload_service.clone()))
            .app_data(web::Data::new(email_service.clone()))
            .service(health_check)
            .configure(portfolio_backend::modules::work::route::configure)
            .configure(portfolio_backend::modules::admin_settings::route::configure)
            .configure(portfolio_backend::modules::contact::route::configure)
            .configure(portfolio_backend::modules::upload::route::configure)
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await
}
