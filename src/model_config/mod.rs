// src/model_config/mod.rs
// Form state and the two artifacts derived from it.

pub mod descriptor;
pub mod form_state;
pub mod manifest;
pub mod normalize;
pub mod session;

pub use descriptor::generate_model_yaml;
pub use form_state::{FieldUpdate, FormState};
pub use manifest::generate_manifest_json;
pub use normalize::{format_number, to_list, to_number, to_number_list};
pub use session::EditorSession;

use serde::Serialize;

/// Both generated files for one form state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedFiles {
    pub model_yaml: String,
    pub manifest_json: String,
}

/// Recompute both artifacts from `state`.
pub fn render(state: &FormState) -> RenderedFiles {
    RenderedFiles {
        model_yaml: generate_model_yaml(state),
        manifest_json: generate_manifest_json(state),
    }
}
