//! Anthropic Provider implementation
//!
//! Messages API with `x-api-key` authentication

use super::{ExtractedReply, ProviderAdapter, ProviderKind, NO_RESPONSE_PLACEHOLDER};
use crate::models::anthropic::{AnthropicRequest, AnthropicResponse};
use crate::models::{GenerationRequest, DEFAULT_MAX_TOKENS};
use crate::services::formatter::count_words;
use crate::utils::error::{AppResult, ErrorContext};
use reqwest::header::{HeaderMap, HeaderValue};

/// Pinned Messages API version
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic Provider
#[derive(Debug, Clone, Copy, Default)]
pub struct AnthropicProvider;

impl ProviderAdapter for AnthropicProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Anthropic
    }

    fn auth_headers(&self, api_key: &str) -> AppResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key).validation_context("API key is not a valid header value")?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static(ANTHROPIC_VERSION));
        Ok(headers)
    }

    fn build_payload(&self, request: &GenerationRequest) -> AppResult<serde_json::Value> {
        let options = &request.options;
        // max_tokens is mandatory for this API
        let payload = AnthropicRequest {
            model: request.model.clone(),
            temperature: options.temperature,
            max_tokens: options.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            top_p: options.top_p,
            messages: request.messages.clone(),
        };
        Ok(serde_json::to_value(payload)?)
    }

    fn extract_reply(&self, body: &str) -> AppResult<ExtractedReply> {
        let response: AnthropicResponse =
            serde_json::from_str(body).malformed_context("Failed to parse Anthropic response")?;

        let assistant_text = response
            .content
            .and_then(|blocks| blocks.into_iter().next())
            .and_then(|block| block.text)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| NO_RESPONSE_PLACEHOLDER.to_string());

        Ok(ExtractedReply {
            output_tokens: count_words(&assistant_text),
            assistant_text,
        })
    }
}
