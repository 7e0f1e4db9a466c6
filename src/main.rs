use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

use todoist_aggregator::{
    api,
    config::Config,
    middleware::RequestMetrics,
    services::{Aggregator, TodoistClient},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!("🚀 Starting Todoist Aggregator...");
    log::info!("📡 Todoist API: {}", config.api_base);
    log::info!("👥 Collaborators project: {}", config.collaborators_project_id);
    log::info!("🔀 Fetch mode: {:?}", config.fetch_mode);

    let client = TodoistClient::new(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let aggregator = web::Data::new(Aggregator::new(Arc::new(client), &config));

    let host = config.host.clone();
    let port = config.port;
    let allowed_origins = config.cors_allowed_origins.clone();

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);
        if allowed_origins.is_empty() {
            cors = cors.allow_any_origin();
        } else {
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        App::new()
            .app_data(aggregator.clone())
            .wrap(cors)
            .wrap(RequestMetrics)
            .wrap(Logger::default())
            .configure(api::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
