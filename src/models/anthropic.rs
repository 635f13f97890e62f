//! Anthropic Messages API data models

use super::ChatMessage;
use serde::{Deserialize, Serialize};

/// Anthropic messages request
#[derive(Debug, Clone, Serialize)]
pub struct AnthropicRequest {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub messages: Vec<ChatMessage>,
}

/// Anthropic messages response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnthropicResponse {
    #[serde(default)]
    pub content: Option<Vec<AnthropicContentBlock>>,
}

/// Content block; non-text blocks carry no `text`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnthropicContentBlock {
    #[serde(default)]
    pub text: Option<String>,
}
