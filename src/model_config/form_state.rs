// src/model_config/form_state.rs
// The flat editor record and its single-field updates.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raw editor input. Numeric and list fields stay as typed-in strings and are
/// only coerced when an artifact is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormState {
    // Core identity
    pub publisher: String,
    pub model_name: String,
    pub base_key: String,
    pub hf_user: String,
    pub hf_repo: String,

    // metadataOverrides
    pub domain: String,
    pub architectures: String,
    pub compatibility_types: String,
    pub params_strings: String,
    pub min_memory_usage_bytes: String,
    pub context_lengths: String,
    pub vision: bool,
    pub reasoning: bool,
    pub trained_for_tool_use: bool,

    // config.operation
    pub top_k_sampling: String,
    pub temperature: String,
    pub min_p_sampling_checked: bool,
    pub min_p_sampling: String,

    // config.load
    pub load_context_length: String,

    // customFields
    pub enable_thinking_field: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            publisher: "dirty-data".to_string(),
            model_name: "qwen3-vl-8b-bartowski".to_string(),
            base_key: "bartowski/qwen3-vl-8b-instruct-gguf".to_string(),
            hf_user: "bartowski".to_string(),
            hf_repo: "Qwen_Qwen3-VL-8B-Instruct-GGUF".to_string(),

            domain: "llm".to_string(),
            architectures: "qwen3_vl".to_string(),
            compatibility_types: "gguf".to_string(),
            params_strings: "8B".to_string(),
            min_memory_usage_bytes: "6000000000".to_string(),
            context_lengths: "256000".to_string(),
            vision: true,
            reasoning: true,
            trained_for_tool_use: true,

            top_k_sampling: "20".to_string(),
            temperature: "0.7".to_string(),
            min_p_sampling_checked: true,
            min_p_sampling: "0".to_string(),

            load_context_length: "256000".to_string(),
            enable_thinking_field: true,
        }
    }
}

impl FormState {
    /// Copy of `self` with exactly one field replaced.
    pub fn with_update(&self, update: FieldUpdate) -> FormState {
        let mut next = self.clone();
        match update {
            FieldUpdate::Publisher(v) => next.publisher = v,
            FieldUpdate::ModelName(v) => next.model_name = v,
            FieldUpdate::BaseKey(v) => next.base_key = v,
            FieldUpdate::HfUser(v) => next.hf_user = v,
            FieldUpdate::HfRepo(v) => next.hf_repo = v,
            FieldUpdate::Domain(v) => next.domain = v,
            FieldUpdate::Architectures(v) => next.architectures = v,
            FieldUpdate::CompatibilityTypes(v) => next.compatibility_types = v,
            FieldUpdate::ParamsStrings(v) => next.params_strings = v,
            FieldUpdate::MinMemoryUsageBytes(v) => next.min_memory_usage_bytes = v,
            FieldUpdate::ContextLengths(v) => next.context_lengths = v,
            FieldUpdate::Vision(v) => next.vision = v,
            FieldUpdate::Reasoning(v) => next.reasoning = v,
            FieldUpdate::TrainedForToolUse(v) => next.trained_for_tool_use = v,
            FieldUpdate::TopKSampling(v) => next.top_k_sampling = v,
            FieldUpdate::Temperature(v) => next.temperature = v,
            FieldUpdate::MinPSamplingChecked(v) => next.min_p_sampling_checked = v,
            FieldUpdate::MinPSampling(v) => next.min_p_sampling = v,
            FieldUpdate::LoadContextLength(v) => next.load_context_length = v,
            FieldUpdate::EnableThinkingField(v) => next.enable_thinking_field = v,
        }
        next
    }
}

/// A single-field edit. On the wire: `{"field": "temperature", "value": "0.8"}`.
///
/// Text fields carry a string and flags carry a bool, so a value of the wrong
/// JSON type is rejected when the request body is decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldUpdate {
    Publisher(String),
    ModelName(String),
    BaseKey(String),
    HfUser(String),
    HfRepo(String),
    Domain(String),
    Architectures(String),
    CompatibilityTypes(String),
    ParamsStrings(String),
    MinMemoryUsageBytes(String),
    ContextLengths(String),
    Vision(bool),
    Reasoning(bool),
    TrainedForToolUse(bool),
    TopKSampling(String),
    Temperature(String),
    MinPSamplingChecked(bool),
    MinPSampling(String),
    LoadContextLength(String),
    EnableThinkingField(bool),
}

impl FieldUpdate {
    /// Build an update from a field name and its raw textual value.
    pub fn parse(field: &str, raw: &str) -> AppResult<Self> {
        let text = || raw.to_string();
        let update = match field {
            "publisher" => FieldUpdate::Publisher(text()),
            "modelName" => FieldUpdate::ModelName(text()),
            "baseKey" => FieldUpdate::BaseKey(text()),
            "hfUser" => FieldUpdate::HfUser(text()),
            "hfRepo" => FieldUpdate::HfRepo(text()),
            "domain" => FieldUpdate::Domain(text()),
            "architectures" => FieldUpdate::Architectures(text()),
            "compatibilityTypes" => FieldUpdate::CompatibilityTypes(text()),
            "paramsStrings" => FieldUpdate::ParamsStrings(text()),
            "minMemoryUsageBytes" => FieldUpdate::MinMemoryUsageBytes(text()),
            "contextLengths" => FieldUpdate::ContextLengths(text()),
            "vision" => FieldUpdate::Vision(parse_flag(field, raw)?),
            "reasoning" => FieldUpdate::Reasoning(parse_flag(field, raw)?),
            "trainedForToolUse" => FieldUpdate::TrainedForToolUse(parse_flag(field, raw)?),
            "topKSampling" => FieldUpdate::TopKSampling(text()),
            "temperature" => FieldUpdate::Temperature(text()),
            "minPSamplingChecked" => FieldUpdate::MinPSamplingChecked(parse_flag(field, raw)?),
            "minPSampling" => FieldUpdate::MinPSampling(text()),
            "loadContextLength" => FieldUpdate::LoadContextLength(text()),
            "enableThinkingField" => FieldUpdate::EnableThinkingField(parse_flag(field, raw)?),
            other => return Err(AppError::UnknownField(other.to_string())),
        };
        Ok(update)
    }

    /// Wire name of the field this update targets
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldUpdate::Publisher(_) => "publisher",
            FieldUpdate::ModelName(_) => "modelName",
            FieldUpdate::BaseKey(_) => "baseKey",
            FieldUpdate::HfUser(_) => "hfUser",
            FieldUpdate::HfRepo(_) => "hfRepo",
            FieldUpdate::Domain(_) => "domain",
            FieldUpdate::Architectures(_) => "architectures",
            FieldUpdate::CompatibilityTypes(_) => "compatibilityTypes",
            FieldUpdate::ParamsStrings(_) => "paramsStrings",
            FieldUpdate::MinMemoryUsageBytes(_) => "minMemoryUsageBytes",
            FieldUpdate::ContextLengths(_) => "contextLengths",
            FieldUpdate::Vision(_) => "vision",
            FieldUpdate::Reasoning(_) => "reasoning",
            FieldUpdate::TrainedForToolUse(_) => "trainedForToolUse",
            FieldUpdate::TopKSampling(_) => "topKSampling",
            FieldUpdate::Temperature(_) => "temperature",
            FieldUpdate::MinPSamplingChecked(_) => "minPSamplingChecked",
            FieldUpdate::MinPSampling(_) => "minPSampling",
            FieldUpdate::LoadContextLength(_) => "loadContextLength",
            FieldUpdate::EnableThinkingField(_) => "enableThinkingField",
        }
    }
}

/// Parses `name=value`. Only the first `=` splits, so values may contain `=`.
impl FromStr for FieldUpdate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, raw) = s
            .split_once('=')
            .ok_or_else(|| AppError::MalformedOverride(s.to_string()))?;
        FieldUpdate::parse(field.trim(), raw)
    }
}

fn parse_flag(field: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(AppError::InvalidFieldValue {
            field: field.to_string(),
            expected: "true or false",
            found: raw.to_string(),
        }),
    }
}
