use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::services::aggregator_service::Aggregator;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub fetch_mode: String,
    pub collaborators_project_id: String,
    pub timestamp: i64,
}

/// Não consulta o Todoist; só confirma que o processo responde
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(aggregator: web::Data<Aggregator>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        fetch_mode: format!("{:?}", aggregator.fetch_mode()).to_lowercase(),
        collaborators_project_id: aggregator.collaborators_project_id().to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
