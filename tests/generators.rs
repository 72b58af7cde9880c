// tests/generators.rs
// Generated artifacts parsed back with real YAML / JSON parsers.

use modelyaml_builder::{generate_manifest_json, generate_model_yaml, FieldUpdate, FormState};
use serde_json::Value as Json;
use serde_yaml::Value as Yaml;

fn parse_yaml(state: &FormState) -> Yaml {
    serde_yaml::from_str(&generate_model_yaml(state)).expect("descriptor is valid YAML")
}

fn parse_manifest(state: &FormState) -> Json {
    serde_json::from_str(&generate_manifest_json(state)).expect("manifest is valid JSON")
}

#[test]
fn default_descriptor_has_expected_structure() {
    let doc = parse_yaml(&FormState::default());

    assert_eq!(doc["model"].as_str(), Some("dirty-data/qwen3-vl-8b-bartowski"));
    assert_eq!(
        doc["base"][0]["key"].as_str(),
        Some("bartowski/qwen3-vl-8b-instruct-gguf")
    );
    assert_eq!(doc["base"][0]["sources"][0]["type"].as_str(), Some("huggingface"));
    assert_eq!(
        doc["base"][0]["sources"][0]["repo"].as_str(),
        Some("Qwen_Qwen3-VL-8B-Instruct-GGUF")
    );

    let meta = &doc["metadataOverrides"];
    assert_eq!(meta["domain"].as_str(), Some("llm"));
    assert_eq!(meta["minMemoryUsageBytes"].as_u64(), Some(6_000_000_000));
    assert_eq!(meta["contextLengths"][0].as_u64(), Some(256_000));
    assert_eq!(meta["vision"].as_bool(), Some(true));

    let fields = doc["config"]["operation"]["fields"]
        .as_sequence()
        .expect("operation fields");
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[2]["value"]["checked"].as_bool(), Some(true));
    assert_eq!(
        doc["config"]["load"]["fields"][0]["value"].as_u64(),
        Some(256_000)
    );

    let custom = &doc["customFields"][0];
    assert_eq!(custom["key"].as_str(), Some("enableThinking"));
    assert_eq!(custom["defaultValue"].as_bool(), Some(true));
    assert_eq!(
        custom["effects"][0]["variable"].as_str(),
        Some("enable_thinking")
    );
}

#[test]
fn empty_lists_leave_no_dangling_headers() {
    let cases = [
        ("architectures", FieldUpdate::Architectures(String::new())),
        ("compatibilityTypes", FieldUpdate::CompatibilityTypes(" ,, ".to_string())),
        ("paramsStrings", FieldUpdate::ParamsStrings(String::new())),
        ("contextLengths", FieldUpdate::ContextLengths("none".to_string())),
    ];

    for (key, update) in cases {
        let state = FormState::default().with_update(update);
        let yaml = generate_model_yaml(&state);
        assert!(!yaml.contains(key), "{key} block should be omitted");

        let doc: Yaml = serde_yaml::from_str(&yaml).unwrap();
        let meta = doc["metadataOverrides"].as_mapping().unwrap();
        assert!(meta.values().all(|v| !v.is_null()), "{key} left a null entry");
    }
}

#[test]
fn stripped_descriptor_is_still_valid_yaml() {
    let state = FormState {
        architectures: String::new(),
        compatibility_types: String::new(),
        params_strings: String::new(),
        context_lengths: String::new(),
        min_memory_usage_bytes: String::new(),
        min_p_sampling_checked: false,
        load_context_length: "0".to_string(),
        enable_thinking_field: false,
        ..FormState::default()
    };
    let doc = parse_yaml(&state);

    assert!(doc.get("customFields").is_none());
    assert!(doc["config"].get("load").is_none());
    assert_eq!(
        doc["config"]["operation"]["fields"].as_sequence().map(Vec::len),
        Some(2)
    );
    assert_eq!(doc["metadataOverrides"].as_mapping().map(|m| m.len()), Some(4));
}

#[test]
fn manifest_depends_only_on_identity() {
    let state = FormState {
        publisher: "acme".to_string(),
        model_name: "tiny".to_string(),
        base_key: "acme/tiny-gguf".to_string(),
        temperature: "hot".to_string(),
        context_lengths: String::new(),
        enable_thinking_field: false,
        ..FormState::default()
    };
    let manifest = parse_manifest(&state);

    assert_eq!(manifest["type"], "model");
    assert_eq!(manifest["owner"], "acme");
    assert_eq!(manifest["name"], "tiny");
    assert_eq!(manifest["revision"], 1);
    assert_eq!(
        manifest["dependencies"][0]["modelKeys"],
        serde_json::json!(["acme/tiny-gguf"])
    );
    assert_eq!(manifest["dependencies"][0]["purpose"], "baseModel");
    assert_eq!(
        manifest["dependencies"][0]["sources"][0]["user"],
        "bartowski"
    );

    let keys: Vec<&str> = manifest
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys.len(), 5);
}

#[test]
fn manifest_key_order_is_stable() {
    let text = generate_manifest_json(&FormState::default());
    let positions: Vec<usize> = ["\"type\"", "\"owner\"", "\"name\"", "\"dependencies\"", "\"revision\""]
        .iter()
        .map(|key| text.find(key).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(text.starts_with("{\n  \"type\": \"model\""));
}

#[test]
fn generation_is_deterministic() {
    let state = FormState::default().with_update(FieldUpdate::Temperature("1.1".to_string()));
    assert_eq!(generate_model_yaml(&state), generate_model_yaml(&state.clone()));
    assert_eq!(generate_manifest_json(&state), generate_manifest_json(&state.clone()));
}
