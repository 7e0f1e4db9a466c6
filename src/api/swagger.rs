use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todoist Aggregator API",
        version = "0.1.0",
        description = "Projects and tasks from the Todoist REST API combined into a single document.\n\nEvery call to `/tasks` fetches projects, tasks and collaborators fresh from Todoist; if any of the three fails the request fails with 500."
    ),
    paths(
        crate::api::tasks::get_tasks,
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::AggregateResponse,
            crate::models::Project,
            crate::models::Task,
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Tasks", description = "Aggregated Todoist projects and tasks."),
        (name = "Health", description = "Health check and request counters."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/tasks"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
        assert!(paths.iter().any(|p| p.as_str() == "/metrics"));
    }
}
