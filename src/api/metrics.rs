use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static ERROR_COUNT: AtomicU64 = AtomicU64::new(0);

pub fn increment_request_count() {
    REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_error_count() {
    ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MetricsResponse {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
}

impl MetricsResponse {
    pub fn snapshot() -> Self {
        Self {
            http_requests_total: REQUEST_COUNT.load(Ordering::Relaxed),
            http_errors_total: ERROR_COUNT.load(Ordering::Relaxed),
        }
    }

    pub fn to_prometheus(&self) -> String {
        format!(
            "# HELP http_requests_total Total number of HTTP requests\n\
             # TYPE http_requests_total counter\n\
             http_requests_total {}\n\
             \n\
             # HELP http_errors_total Total number of HTTP errors\n\
             # TYPE http_errors_total counter\n\
             http_errors_total {}\n",
            self.http_requests_total, self.http_errors_total
        )
    }
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Request counters in Prometheus text format", body = String)
    )
)]
pub async fn get_metrics() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(MetricsResponse::snapshot().to_prometheus())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prometheus_format() {
        let text = MetricsResponse {
            http_requests_total: 7,
            http_errors_total: 2,
        }
        .to_prometheus();
        assert!(text.contains("http_requests_total 7\n"));
        assert!(text.contains("http_errors_total 2\n"));
        assert!(text.contains("# TYPE http_errors_total counter"));
    }

    #[test]
    fn test_counters_increase() {
        let before = MetricsResponse::snapshot();
        increment_request_count();
        increment_error_count();
        let after = MetricsResponse::snapshot();
        assert!(after.http_requests_total > before.http_requests_total);
        assert!(after.http_errors_total > before.http_errors_total);
    }
}
