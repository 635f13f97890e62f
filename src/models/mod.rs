//! Data models module
//!
//! Caller-facing request/result types plus the per-provider wire formats

use crate::providers::ProviderKind;
use serde::{Deserialize, Serialize};

pub mod anthropic;
pub mod mistral;
pub mod openai;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
/// Default generation limit
pub const DEFAULT_MAX_TOKENS: u32 = 1500;
/// Default nucleus sampling parameter
pub const DEFAULT_TOP_P: f64 = 0.9;

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role (system/user/assistant), passed through verbatim
    pub role: String,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

/// Stop condition: one sequence or several
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StopSequence {
    Single(String),
    Multiple(Vec<String>),
}

/// Sampling and provider-specific generation options
///
/// Each provider only sends the fields it supports; the others are
/// dropped from its payload without complaint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub temperature: f64,
    /// `None` omits the key for Mistral
    pub max_tokens: Option<u32>,
    pub top_p: f64,
    /// OpenAI only
    pub frequency_penalty: f64,
    /// OpenAI only
    pub presence_penalty: f64,
    /// Mistral only
    pub min_tokens: Option<u32>,
    /// Mistral only. Sent as a flag, the reply is still read in one piece.
    pub stream: bool,
    /// Mistral only
    pub stop: Option<StopSequence>,
    /// Mistral only
    pub random_seed: Option<u64>,
    /// Mistral only
    pub response_format: Option<serde_json::Value>,
    /// Mistral only
    pub tools: Option<Vec<serde_json::Value>>,
    /// Mistral only, usually `"auto"`, `"none"`, `"any"` or a tool object
    pub tool_choice: serde_json::Value,
    /// Mistral only
    pub safe_prompt: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: Some(DEFAULT_MAX_TOKENS),
            top_p: DEFAULT_TOP_P,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            min_tokens: None,
            stream: false,
            stop: None,
            random_seed: None,
            response_format: None,
            tools: None,
            tool_choice: serde_json::Value::String("auto".to_string()),
            safe_prompt: false,
        }
    }
}

/// One generation request against one provider
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub provider: ProviderKind,
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub options: GenerationOptions,
}

impl GenerationRequest {
    /// Create a request with default options
    pub fn new(provider: ProviderKind, model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            provider,
            model: model.into(),
            messages,
            options: GenerationOptions::default(),
        }
    }

    /// Replace the options
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }
}

/// Normalized outcome of a generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub provider: ProviderKind,
    pub model: String,
    /// Whitespace word count of all message contents
    pub input_token_estimate: usize,
    /// `usage.completion_tokens` for OpenAI, a word count of the reply otherwise
    pub output_token_count: usize,
    pub assistant_text: String,
}
