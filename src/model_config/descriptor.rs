// src/model_config/descriptor.rs
// model.yaml rendering. Each optional block is guarded by a single predicate and
// is emitted whole or not at all.

use super::form_state::FormState;
use super::normalize::{format_number, to_list, to_number, to_number_list};

const HEADER: [&str; 2] = [
    "# model.yaml is an open standard for defining cross-platform, composable AI models",
    "# Learn more at https://modelyaml.org",
];

const TOP_K_FALLBACK: f64 = 20.0;
const TEMPERATURE_FALLBACK: f64 = 0.7;

/// Ordered line buffer with indentation helpers
struct YamlLines {
    lines: Vec<String>,
}

impl YamlLines {
    fn new() -> Self {
        Self { lines: Vec::new() }
    }

    fn push(&mut self, indent: usize, text: impl AsRef<str>) {
        self.lines
            .push(format!("{:indent$}{}", "", text.as_ref(), indent = indent));
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn entry(&mut self, indent: usize, key: &str, value: impl AsRef<str>) {
        self.push(indent, format!("{}: {}", key, value.as_ref()));
    }

    /// `key:` followed by one `- item` line per element, nothing if empty
    fn list<T: AsRef<str>>(&mut self, indent: usize, key: &str, items: &[T]) {
        if items.is_empty() {
            return;
        }
        self.push(indent, format!("{}:", key));
        for item in items {
            self.push(indent + 2, format!("- {}", item.as_ref()));
        }
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// Normalized view of the form used by the descriptor
struct DescriptorValues {
    architectures: Vec<String>,
    compatibility_types: Vec<String>,
    params_strings: Vec<String>,
    min_memory_usage_bytes: f64,
    context_lengths: Vec<String>,
    top_k_sampling: f64,
    temperature: f64,
    min_p_sampling: f64,
    load_context_length: f64,
}

impl DescriptorValues {
    fn from_form(state: &FormState) -> Self {
        Self {
            architectures: to_list(&state.architectures),
            compatibility_types: to_list(&state.compatibility_types),
            params_strings: to_list(&state.params_strings),
            min_memory_usage_bytes: to_number(&state.min_memory_usage_bytes, 0.0),
            context_lengths: to_number_list(&state.context_lengths)
                .into_iter()
                .map(format_number)
                .collect(),
            top_k_sampling: to_number(&state.top_k_sampling, TOP_K_FALLBACK),
            temperature: to_number(&state.temperature, TEMPERATURE_FALLBACK),
            min_p_sampling: to_number(&state.min_p_sampling, 0.0),
            load_context_length: to_number(&state.load_context_length, 0.0),
        }
    }
}

/// Render the `model.yaml` descriptor for `state`.
///
/// The output is deterministic, uses `\n` line endings and has no trailing
/// newline.
pub fn generate_model_yaml(state: &FormState) -> String {
    let values = DescriptorValues::from_form(state);
    let mut out = YamlLines::new();

    for line in HEADER {
        out.push(0, line);
    }
    out.entry(0, "model", format!("{}/{}", state.publisher, state.model_name));

    out.blank();
    write_base(&mut out, state);

    out.blank();
    write_metadata_overrides(&mut out, state, &values);

    out.blank();
    write_config(&mut out, state, &values);

    if state.enable_thinking_field {
        out.blank();
        write_custom_fields(&mut out);
    }

    out.finish()
}

fn write_base(out: &mut YamlLines, state: &FormState) {
    out.push(0, "base:");
    out.push(2, format!("- key: {}", state.base_key));
    out.push(4, "sources:");
    out.push(6, "- type: huggingface");
    out.entry(8, "user", &state.hf_user);
    out.entry(8, "repo", &state.hf_repo);
}

fn write_metadata_overrides(out: &mut YamlLines, state: &FormState, values: &DescriptorValues) {
    out.push(0, "metadataOverrides:");
    out.entry(2, "domain", &state.domain);
    out.list(2, "architectures", &values.architectures);
    out.list(2, "compatibilityTypes", &values.compatibility_types);
    out.list(2, "paramsStrings", &values.params_strings);
    if values.min_memory_usage_bytes > 0.0 {
        out.entry(
            2,
            "minMemoryUsageBytes",
            format_number(values.min_memory_usage_bytes),
        );
    }
    out.list(2, "contextLengths", &values.context_lengths);
    out.entry(2, "vision", flag(state.vision));
    out.entry(2, "reasoning", flag(state.reasoning));
    out.entry(2, "trainedForToolUse", flag(state.trained_for_tool_use));
}

fn write_config(out: &mut YamlLines, state: &FormState, values: &DescriptorValues) {
    out.push(0, "config:");
    out.push(2, "operation:");
    out.push(4, "fields:");
    field_entry(out, "llm.prediction.topKSampling", values.top_k_sampling);
    field_entry(out, "llm.prediction.temperature", values.temperature);

    if state.min_p_sampling_checked {
        out.push(6, "- key: llm.prediction.minPSampling");
        out.push(8, "value:");
        out.entry(10, "checked", "true");
        out.entry(10, "value", format_number(values.min_p_sampling));
    }

    if values.load_context_length > 0.0 {
        out.push(2, "load:");
        out.push(4, "fields:");
        field_entry(out, "llm.load.contextLength", values.load_context_length);
    }
}

fn field_entry(out: &mut YamlLines, key: &str, value: f64) {
    out.push(6, format!("- key: {}", key));
    out.entry(8, "value", format_number(value));
}

fn write_custom_fields(out: &mut YamlLines) {
    out.push(0, "customFields:");
    out.push(2, "- key: enableThinking");
    out.entry(4, "displayName", "Enable Thinking");
    out.entry(
        4,
        "description",
        "Controls whether the model will think before replying",
    );
    out.entry(4, "type", "boolean");
    out.entry(4, "defaultValue", "true");
    out.push(4, "effects:");
    out.push(6, "- type: setJinjaVariable");
    out.entry(8, "variable", "enable_thinking");
}

fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
