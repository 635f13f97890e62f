//! Provider module
//!
//! Defines the closed set of supported providers and the adapter trait each
//! of them implements

pub mod anthropic;
pub mod mistral;
pub mod openai;

use crate::models::GenerationRequest;
use crate::utils::error::{AppError, AppResult};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use anthropic::AnthropicProvider;
pub use mistral::MistralProvider;
pub use openai::OpenAIProvider;

/// Placeholder used when Anthropic or Mistral return no assistant text
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response found.";

/// Supported upstream providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
    Mistral,
}

impl ProviderKind {
    /// All providers, in the order they are listed to users
    pub const ALL: [ProviderKind; 3] = [ProviderKind::OpenAi, ProviderKind::Anthropic, ProviderKind::Mistral];

    /// Lowercase provider name as accepted on input
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Mistral => "mistral",
        }
    }

    /// Name with the first letter uppercased and the rest lowercased
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "Openai",
            ProviderKind::Anthropic => "Anthropic",
            ProviderKind::Mistral => "Mistral",
        }
    }

    /// Environment variable holding the API key
    pub fn credential_env_var(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::Anthropic => "ANTHROPIC_API_KEY",
            ProviderKind::Mistral => "MISTRAL_API_KEY",
        }
    }

    /// Environment variable overriding the endpoint URL
    pub fn endpoint_env_var(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_BASE_URL",
            ProviderKind::Anthropic => "ANTHROPIC_BASE_URL",
            ProviderKind::Mistral => "MISTRAL_BASE_URL",
        }
    }

    /// Official chat endpoint
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "https://api.openai.com/v1/chat/completions",
            ProviderKind::Anthropic => "https://api.anthropic.com/v1/messages",
            ProviderKind::Mistral => "https://api.mistral.ai/v1/chat/completions",
        }
    }

    /// Adapter implementing this provider's wire format
    pub fn adapter(&self) -> &'static dyn ProviderAdapter {
        match self {
            ProviderKind::OpenAi => &OpenAIProvider,
            ProviderKind::Anthropic => &AnthropicProvider,
            ProviderKind::Mistral => &MistralProvider,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProviderKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::InvalidProvider(s.to_string()))
    }
}

/// Assistant text and output token count pulled out of a provider response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedReply {
    pub assistant_text: String,
    pub output_tokens: usize,
}

/// Fully built outbound request, ready to send
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    pub provider: ProviderKind,
    pub url: String,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

/// Provider adapter trait
///
/// Each provider supplies its own headers, payload shape and response
/// extraction. Network I/O stays in the dispatcher.
pub trait ProviderAdapter: Send + Sync {
    /// Which provider this adapter serves
    fn kind(&self) -> ProviderKind;

    /// Authentication and version headers for the given API key
    fn auth_headers(&self, api_key: &str) -> AppResult<HeaderMap>;

    /// JSON body sent to the provider
    fn build_payload(&self, request: &GenerationRequest) -> AppResult<serde_json::Value>;

    /// Extract the assistant reply from a successful response body
    ///
    /// A 2xx body that is not valid JSON is a `MalformedResponse` fault,
    /// never soft error text, even though the transport call succeeded.
    fn extract_reply(&self, body: &str) -> AppResult<ExtractedReply>;

    /// Pull a human readable message out of an error response body
    fn error_message(&self, body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value
            .pointer("/error/message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
    }
}

/// Build a bearer `Authorization` header map
pub(crate) fn bearer_headers(api_key: &str) -> AppResult<HeaderMap> {
    use crate::utils::error::ErrorContext;
    use reqwest::header::{HeaderValue, AUTHORIZATION};

    let mut headers = HeaderMap::new();
    let value = HeaderValue::from_str(&format!("Bearer {}", api_key))
        .validation_context("API key is not a valid header value")?;
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}
