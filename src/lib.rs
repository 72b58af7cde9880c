pub mod api;
pub mod config;
pub mod error;
pub mod model_config;
pub mod monitoring;

pub use error::{AppError, AppResult};
pub use model_config::{
    generate_manifest_json, generate_model_yaml, render, EditorSession, FieldUpdate, FormState,
    RenderedFiles,
};
