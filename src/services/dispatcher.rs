//! Request dispatcher
//!
//! Resolves the provider, builds the outbound request, performs the single
//! HTTP call and normalizes the reply

use crate::config::Settings;
use crate::models::{ChatMessage, GenerationOptions, GenerationRequest, GenerationResult};
use crate::providers::{ProviderKind, ProviderRequest};
use crate::services::formatter::{estimate_input_tokens, format_markdown};
use crate::utils::error::{AppError, AppResult};
use crate::utils::logging::payload_log_summary;
use anyhow::Context;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response};
use std::time::{Duration, Instant};
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

/// Returned as text when the provider name is not recognized
pub const INVALID_PROVIDER_MESSAGE: &str =
    "Invalid provider. Please choose among 'openai', 'anthropic', or 'mistral'.";

/// Prefix of the text returned for network and HTTP failures
pub const ERROR_PREFIX: &str = "An error occurred: ";

/// Sends chat prompts to the configured providers
#[derive(Debug, Clone)]
pub struct RequestDispatcher {
    client: Client,
    settings: Settings,
}

impl RequestDispatcher {
    /// Create a new dispatcher instance
    pub fn new(settings: Settings) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request.timeout))
            .user_agent(format!("{}/{}", crate::NAME, crate::VERSION))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, settings })
    }

    /// Settings this dispatcher was built with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Send a prompt and return the Markdown answer
    ///
    /// Unknown providers and network/HTTP failures come back as text.
    /// Missing credentials and malformed provider responses are errors.
    pub async fn dispatch(
        &self,
        provider: &str,
        model: &str,
        messages: &[ChatMessage],
        options: &GenerationOptions,
    ) -> AppResult<String> {
        let provider = match provider.parse::<ProviderKind>() {
            Ok(provider) => provider,
            Err(e) => {
                warn!(error_type = e.error_type(), "{}", e);
                return Ok(INVALID_PROVIDER_MESSAGE.to_string());
            }
        };

        let request = GenerationRequest {
            provider,
            model: model.to_string(),
            messages: messages.to_vec(),
            options: options.clone(),
        };

        match self.generate(&request).await {
            Ok(result) => Ok(format_markdown(&result)),
            Err(e) if e.is_soft() => Ok(format!("{}{}", ERROR_PREFIX, e)),
            Err(e) => {
                warn!(error_type = e.error_type(), "Dispatch failed: {}", e);
                Err(e)
            }
        }
    }

    /// Send a request and return the normalized result
    pub async fn generate(&self, request: &GenerationRequest) -> AppResult<GenerationResult> {
        let span = info_span!(
            "dispatch",
            request_id = %Uuid::new_v4(),
            provider = %request.provider,
            model = %request.model,
        );

        self.generate_inner(request).instrument(span).await
    }

    async fn generate_inner(&self, request: &GenerationRequest) -> AppResult<GenerationResult> {
        let provider_request = self.build_request(request)?;
        let adapter = request.provider.adapter();

        info!("Sending request to {}", provider_request.url);
        debug!("Request payload: {}", payload_log_summary(&provider_request.body));

        let start_time = Instant::now();
        let response = self
            .client
            .post(&provider_request.url)
            .headers(provider_request.headers)
            .json(&provider_request.body)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {}", request.provider, e);
                AppError::Transport(e)
            })?;

        let body = self.handle_response(request.provider, response).await?;
        // Undecodable success bodies surface as hard faults, not error text
        let reply = adapter.extract_reply(&body)?;

        let result = GenerationResult {
            provider: request.provider,
            model: request.model.clone(),
            input_token_estimate: estimate_input_tokens(&request.messages),
            output_token_count: reply.output_tokens,
            assistant_text: reply.assistant_text,
        };

        info!(
            "Request completed - Duration: {:.2}ms - Tokens (input/output): {}/{}",
            start_time.elapsed().as_secs_f64() * 1000.0,
            result.input_token_estimate,
            result.output_token_count
        );

        Ok(result)
    }

    /// Build the outbound request without sending it
    ///
    /// Fails with `MissingCredential` when the provider has no API key.
    pub fn build_request(&self, request: &GenerationRequest) -> AppResult<ProviderRequest> {
        let provider = request.provider;
        let api_key = self
            .settings
            .api_key(provider)
            .ok_or(AppError::MissingCredential {
                provider,
                env_var: provider.credential_env_var(),
            })?;

        if request.messages.is_empty() {
            return Err(AppError::Validation("messages must not be empty".to_string()));
        }

        let adapter = provider.adapter();
        let mut headers = adapter.auth_headers(api_key)?;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(ProviderRequest {
            provider,
            url: self.settings.provider(provider).endpoint.clone(),
            headers,
            body: adapter.build_payload(request)?,
        })
    }

    /// Handle HTTP response, returning the body of a 2xx reply
    async fn handle_response(&self, provider: ProviderKind, response: Response) -> AppResult<String> {
        let status = response.status();

        if status.is_success() {
            debug!("{} request completed successfully", provider);
            Ok(response.text().await?)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            let message = provider
                .adapter()
                .error_message(&error_text)
                .unwrap_or(error_text);

            let error = AppError::UpstreamStatus {
                provider,
                status: status.as_u16(),
                message,
            };
            warn!(error_type = error.error_type(), "{}", error);
            Err(error)
        }
    }
}
