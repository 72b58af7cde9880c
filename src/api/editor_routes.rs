// src/api/editor_routes.rs
// Form editing and artifact rendering endpoints.

use crate::model_config::{self, EditorSession, FieldUpdate, FormState, RenderedFiles};
use crate::monitoring::metrics;
use actix_web::{web, Error, HttpResponse};
use serde::Serialize;
use tracing::info;

const EDITOR_PAGE: &str = include_str!("../../assets/editor.html");

pub const MODEL_YAML: &str = "model.yaml";
pub const MANIFEST_JSON: &str = "manifest.json";

/// Current record plus the artifacts derived from it
#[derive(Serialize)]
pub struct EditorSnapshot<'a> {
    pub state: &'a FormState,
    pub files: RenderedFiles,
}

fn render_files(state: &FormState) -> RenderedFiles {
    let files = model_config::render(state);
    metrics::record_render(MODEL_YAML);
    metrics::record_render(MANIFEST_JSON);
    crate::log_render!(MODEL_YAML, files.model_yaml.len());
    crate::log_render!(MANIFEST_JSON, files.manifest_json.len());
    files
}

fn snapshot_response(state: &FormState) -> HttpResponse {
    HttpResponse::Ok().json(EditorSnapshot {
        state,
        files: render_files(state),
    })
}

/// GET /
pub async fn editor_page() -> Result<HttpResponse, Error> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(EDITOR_PAGE))
}

/// GET /api/form/defaults
pub async fn get_defaults() -> Result<HttpResponse, Error> {
    Ok(HttpResponse::Ok().json(FormState::default()))
}

/// GET /api/form
pub async fn get_form(session: web::Data<EditorSession>) -> Result<HttpResponse, Error> {
    let state = session.snapshot();
    Ok(snapshot_response(&state))
}

/// PUT /api/form
pub async fn replace_form(
    session: web::Data<EditorSession>,
    body: web::Json<FormState>,
) -> Result<HttpResponse, Error> {
    let state = session.replace(body.into_inner());
    info!(model = %format!("{}/{}", state.publisher, state.model_name), "Form replaced");
    Ok(snapshot_response(&state))
}

/// POST /api/form/field
pub async fn update_field(
    session: web::Data<EditorSession>,
    body: web::Json<FieldUpdate>,
) -> Result<HttpResponse, Error> {
    let update = body.into_inner();
    let field = update.field_name();
    metrics::record_field_update(field);
    tracing::debug!(field, "Applying field update");

    let state = session.apply(update);
    Ok(snapshot_response(&state))
}

/// POST /api/form/reset
pub async fn reset_form(session: web::Data<EditorSession>) -> Result<HttpResponse, Error> {
    let state = session.reset();
    info!("Form reset to defaults");
    Ok(snapshot_response(&state))
}

/// POST /api/render
pub async fn render(body: web::Json<FormState>) -> Result<HttpResponse, Error> {
    Ok(HttpResponse::Ok().json(render_files(&body)))
}

/// POST /api/render/model.yaml
pub async fn render_model_yaml(body: web::Json<FormState>) -> Result<HttpResponse, Error> {
    let yaml = model_config::generate_model_yaml(&body);
    metrics::record_render(MODEL_YAML);
    Ok(HttpResponse::Ok()
        .content_type("application/yaml; charset=utf-8")
        .body(yaml))
}

/// POST /api/render/manifest.json
pub async fn render_manifest_json(body: web::Json<FormState>) -> Result<HttpResponse, Error> {
    let json = model_config::generate_manifest_json(&body);
    metrics::record_render(MANIFEST_JSON);
    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(json))
}
