//! HTTP handlers for monitoring endpoints
//!
//! Endpoints:
//! - GET /monitoring/health - Full health status (JSON)
//! - GET /monitoring/ready - 503 until startup completes
//! - GET /monitoring/metrics - Prometheus format metrics

use super::MonitoringContext;
use actix_web::{web, HttpResponse, Result as ActixResult};
use serde_json::json;

/// Health check endpoint
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2025-10-26T12:30:45Z",
///   "uptime_seconds": 123.45,
///   "version": "0.3.0"
/// }
/// ```
pub async fn health_handler(ctx: web::Data<MonitoringContext>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ctx.health_status()))
}

/// Returns 200 once startup completed, 503 before that
pub async fn ready_handler(ctx: web::Data<MonitoringContext>) -> ActixResult<HttpResponse> {
    let body = json!({
        "ready": ctx.health.is_ready(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });
    if ctx.health.is_ready() {
        Ok(HttpResponse::Ok().json(body))
    } else {
        Ok(HttpResponse::ServiceUnavailable().json(body))
    }
}

pub async fn metrics_handler() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4; charset=utf-8")
        .body(super::metrics::export_prometheus()))
}

/// Register monitoring routes under `/monitoring`
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/monitoring")
            .route("/health", web::get().to(health_handler))
            .route("/ready", web::get().to(ready_handler))
            .route("/metrics", web::get().to(metrics_handler)),
    );
}
