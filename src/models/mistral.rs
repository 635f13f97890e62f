//! Mistral chat completions data models

use super::{ChatMessage, StopSequence};
use serde::{Deserialize, Serialize};

/// Mistral chat completions request
///
/// The first seven fields are always sent; the optional ones are left out
/// entirely when unset instead of being sent as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct MistralRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub top_p: f64,
    pub stream: bool,
    pub tool_choice: serde_json::Value,
    pub safe_prompt: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<StopSequence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<serde_json::Value>>,
}

/// Mistral chat completions response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MistralResponse {
    #[serde(default)]
    pub choices: Option<Vec<MistralChoice>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MistralChoice {
    #[serde(default)]
    pub message: Option<MistralResponseMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MistralResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}
