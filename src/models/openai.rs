//! OpenAI API data models
//!
//! Chat completions request and response structures

use super::ChatMessage;
use serde::{Deserialize, Serialize};

/// OpenAI chat completions request
///
/// Every field is always serialized, defaults included.
#[derive(Debug, Clone, Serialize)]
pub struct OpenAIRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: Option<u32>,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

/// OpenAI chat completions response (only the fields read here)
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIResponse {
    pub choices: Vec<OpenAIChoice>,
    pub usage: OpenAIUsage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIChoice {
    pub message: OpenAIResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIResponseMessage {
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIUsage {
    pub completion_tokens: usize,
}
