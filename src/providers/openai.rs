//! OpenAI Provider implementation
//!
//! Chat completions API with bearer authentication

use super::{bearer_headers, ExtractedReply, ProviderAdapter, ProviderKind};
use crate::models::openai::{OpenAIRequest, OpenAIResponse};
use crate::models::GenerationRequest;
use crate::utils::error::{AppError, AppResult, ErrorContext};
use reqwest::header::HeaderMap;

/// OpenAI Provider
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAIProvider;

impl ProviderAdapter for OpenAIProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    fn auth_headers(&self, api_key: &str) -> AppResult<HeaderMap> {
        bearer_headers(api_key)
    }

    fn build_payload(&self, request: &GenerationRequest) -> AppResult<serde_json::Value> {
        let options = &request.options;
        let payload = OpenAIRequest {
            model: request.model.clone(),
            messages: request.messages.clone(),
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            top_p: options.top_p,
            frequency_penalty: options.frequency_penalty,
            presence_penalty: options.presence_penalty,
        };
        Ok(serde_json::to_value(payload)?)
    }

    /// No defaulting here: anything missing is a malformed response
    fn extract_reply(&self, body: &str) -> AppResult<ExtractedReply> {
        let response: OpenAIResponse =
            serde_json::from_str(body).malformed_context("Failed to parse OpenAI response")?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::MalformedResponse("OpenAI response contains no choices".to_string()))?;

        Ok(ExtractedReply {
            assistant_text: choice.message.content.trim().to_string(),
            output_tokens: response.usage.completion_tokens,
        })
    }
}
