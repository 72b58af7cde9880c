// src/api/mod.rs
// HTTP surface of the editor: the single page, the form API and monitoring.

pub mod editor_routes;

use crate::config::ApiConfig;
use crate::model_config::EditorSession;
use crate::monitoring::{handlers as monitoring_handlers, MonitoringContext, RequestId, TraceMiddleware};
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, App, HttpMessage, HttpRequest, HttpResponse, HttpServer};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

/// Generate a short request ID for correlation
fn generate_request_id() -> String {
    Uuid::new_v4().to_string()[..8].to_string()
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    // reuse the id the trace middleware put on the response header
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_else(generate_request_id);
    warn!(
        request_id = %request_id,
        path = %req.path(),
        error = %err,
        "Rejected request body"
    );
    let response = HttpResponse::BadRequest().json(json!({
        "error": err.to_string(),
        "request_id": request_id,
    }));
    InternalError::from_response(err, response).into()
}

/// Register every route. The caller provides `web::Data<EditorSession>` and
/// `web::Data<MonitoringContext>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    monitoring_handlers::register_routes(cfg);
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/", web::get().to(editor_routes::editor_page))
        .service(
            web::scope("/api")
                .route("/form/defaults", web::get().to(editor_routes::get_defaults))
                .route("/form", web::get().to(editor_routes::get_form))
                .route("/form", web::put().to(editor_routes::replace_form))
                .route("/form/field", web::post().to(editor_routes::update_field))
                .route("/form/reset", web::post().to(editor_routes::reset_form))
                .route("/render", web::post().to(editor_routes::render))
                .route(
                    "/render/model.yaml",
                    web::post().to(editor_routes::render_model_yaml),
                )
                .route(
                    "/render/manifest.json",
                    web::post().to(editor_routes::render_manifest_json),
                ),
        );
}

/// Bind and start the HTTP server. The returned future runs until shutdown.
pub fn start_api_server(config: &ApiConfig, monitoring: MonitoringContext) -> std::io::Result<Server> {
    let session = web::Data::new(EditorSession::new());
    let monitoring = web::Data::new(monitoring);
    let bind_addr = config.bind_addr();

    let app_monitoring = monitoring.clone();
    let mut http_server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT"])
            .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .app_data(session.clone())
            .app_data(app_monitoring.clone())
            .wrap(cors)
            .wrap(TraceMiddleware::new())
            .configure(configure)
    });
    if let Some(workers) = config.workers {
        http_server = http_server.workers(workers);
    }

    let server = http_server.bind(&bind_addr)?.run();
    monitoring.startup_complete();
    info!(addr = %bind_addr, "Editor listening on http://{}", bind_addr);
    Ok(server)
}
