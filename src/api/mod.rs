pub mod health;
pub mod metrics;
pub mod swagger;
pub mod tasks;

use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Rotas do serviço, compartilhadas pelo `main` e pelos testes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", swagger::ApiDoc::openapi()),
    )
    .route("/health", web::get().to(health::health_check))
    .route("/metrics", web::get().to(metrics::get_metrics))
    .route("/tasks", web::get().to(tasks::get_tasks));
}
