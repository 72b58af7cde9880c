// src/model_config/manifest.rs
// manifest.json rendering for `lms push`.

use super::form_state::FormState;
use serde::Serialize;

#[derive(Serialize)]
struct Manifest<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    owner: &'a str,
    name: &'a str,
    dependencies: [Dependency<'a>; 1],
    revision: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Dependency<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    purpose: &'static str,
    model_keys: [&'a str; 1],
    sources: [Source<'a>; 1],
}

#[derive(Serialize)]
struct Source<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    user: &'a str,
    repo: &'a str,
}

/// Render `manifest.json` for `state` with 2-space indentation.
///
/// Only the identity and base-model fields are used; metadata, config and
/// custom field inputs have no effect on the manifest.
pub fn generate_manifest_json(state: &FormState) -> String {
    let manifest = Manifest {
        kind: "model",
        owner: &state.publisher,
        name: &state.model_name,
        dependencies: [Dependency {
            kind: "model",
            purpose: "baseModel",
            model_keys: [state.base_key.as_str()],
            sources: [Source {
                kind: "huggingface",
                user: &state.hf_user,
                repo: &state.hf_repo,
            }],
        }],
        revision: 1,
    };

    // Only string and integer leaves, so serialization cannot fail.
    serde_json::to_string_pretty(&manifest).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_default_manifest_text() {
        let expected = r#"{
  "type": "model",
  "owner": "dirty-data",
  "name": "qwen3-vl-8b-bartowski",
  "dependencies": [
    {
      "type": "model",
      "purpose": "baseModel",
      "modelKeys": [
        "bartowski/qwen3-vl-8b-instruct-gguf"
      ],
      "sources": [
        {
          "type": "huggingface",
          "user": "bartowski",
          "repo": "Qwen_Qwen3-VL-8B-Instruct-GGUF"
        }
      ]
    }
  ],
  "revision": 1
}"#;
        assert_eq!(generate_manifest_json(&FormState::default()), expected);
    }

    #[test]
    fn test_manifest_ignores_metadata_and_config() {
        let base = FormState::default();
        let changed = FormState {
            domain: "embedding".to_string(),
            architectures: String::new(),
            temperature: "nope".to_string(),
            load_context_length: "0".to_string(),
            enable_thinking_field: false,
            vision: false,
            ..base.clone()
        };
        assert_eq!(generate_manifest_json(&base), generate_manifest_json(&changed));
    }

    #[test]
    fn test_manifest_escapes_strings() {
        let state = FormState {
            base_key: "quote\"d\\key".to_string(),
            ..FormState::default()
        };
        let parsed: Value = serde_json::from_str(&generate_manifest_json(&state)).unwrap();
        assert_eq!(
            parsed["dependencies"][0]["modelKeys"],
            serde_json::json!(["quote\"d\\key"])
        );
        assert_eq!(parsed["revision"], 1);
    }
}
