//! Mistral Provider implementation
//!
//! Chat completions API with bearer authentication and optional
//! generation fields

use super::{bearer_headers, ExtractedReply, ProviderAdapter, ProviderKind, NO_RESPONSE_PLACEHOLDER};
use crate::models::mistral::{MistralRequest, MistralResponse};
use crate::models::GenerationRequest;
use crate::services::formatter::count_words;
use crate::utils::error::{AppResult, ErrorContext};
use reqwest::header::HeaderMap;

/// Mistral Provider
#[derive(Debug, Clone, Copy, Default)]
pub struct MistralProvider;

impl ProviderAdapter for MistralProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Mistral
    }

    fn auth_headers(&self, api_key: &str) -> AppResult<HeaderMap> {
        bearer_headers(api_key)
    }

    fn build_payload(&self, request: &GenerationRequest) -> AppResult<serde_json::Value> {
        let options = request.options.clone();
        let payload = MistralRequest {
            model: request.model.clone(),
            messages: request.messages.clone(),
            temperature: options.temperature,
            top_p: options.top_p,
            stream: options.stream,
            tool_choice: options.tool_choice,
            safe_prompt: options.safe_prompt,
            max_tokens: options.max_tokens,
            min_tokens: options.min_tokens,
            stop: options.stop,
            random_seed: options.random_seed,
            response_format: options.response_format,
            tools: options.tools,
        };
        Ok(serde_json::to_value(payload)?)
    }

    fn extract_reply(&self, body: &str) -> AppResult<ExtractedReply> {
        let response: MistralResponse =
            serde_json::from_str(body).malformed_context("Failed to parse Mistral response")?;

        let assistant_text = response
            .choices
            .and_then(|choices| choices.into_iter().next())
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| NO_RESPONSE_PLACEHOLDER.to_string());

        Ok(ExtractedReply {
            output_tokens: count_words(&assistant_text),
            assistant_text,
        })
    }

    /// Mistral errors come as `{"message": ...}`, `{"detail": ...}` or the
    /// OpenAI-style envelope
    fn error_message(&self, body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        ["/message", "/error/message", "/detail"]
            .iter()
            .find_map(|pointer| value.pointer(pointer))
            .map(|message| match message {
                serde_json::Value::String(text) => text.clone(),
                other => other.to_string(),
            })
    }
}
