mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};

use crate::application::news_service::NewsService;
use crate::data::news_repository::PostgresNewsRepository;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::database::{create_pool, run_migrations};
use crate::infrastructure::logging::init_logging;
use crate::presentation::handlers;
use crate::presentation::middleware::RequestIdMiddleware;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let config = AppConfig::from_env().expect("invalid configuration");
    let pool = create_pool(&config)
        .await
        .expect("failed to connect to database");
    run_migrations(&pool)
        .await
        .expect("failed to run migrations");

    let news_repo = Arc::new(PostgresNewsRepository::new(pool));
    let news_service = NewsService::new(news_repo);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(news_service.clone()))
            .route("/health", web::get().to(handlers::health::health))
            .service(handlers::news::scope::<PostgresNewsRepository>())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
