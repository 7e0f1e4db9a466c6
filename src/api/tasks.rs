use actix_web::{web, HttpResponse};

use crate::{
    models::AggregateResponse,
    services::aggregator_service::Aggregator,
    utils::AppError,
};

/// GET /tasks
/// Projetos e tarefas do Todoist em um único documento
#[utoipa::path(
    get,
    path = "/tasks",
    tag = "Tasks",
    responses(
        (status = 200, description = "Projects and tasks as returned by Todoist", body = AggregateResponse),
        (status = 500, description = "One of the Todoist fetches failed")
    )
)]
pub async fn get_tasks(aggregator: web::Data<Aggregator>) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /tasks - aggregating projects, tasks and collaborators");

    let aggregate = aggregator.aggregate().await.map_err(|e| {
        log::error!("❌ {}", e);
        e
    })?;

    if log::log_enabled!(log::Level::Debug) {
        for line in aggregate.report_lines() {
            log::debug!("{}", line);
        }
    }

    Ok(HttpResponse::Ok().json(aggregate.into_response()))
}
