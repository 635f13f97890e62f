//! Error handling module
//!
//! Defines the error taxonomy surfaced by the dispatcher

use crate::providers::ProviderKind;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Provider name did not match any supported provider
    #[error("Unknown provider: {0}")]
    InvalidProvider(String),

    /// API key for the selected provider is unset or empty
    #[error("{} API key not found. Please set {env_var} in the environment or the .env file.", .provider.display_name())]
    MissingCredential {
        provider: ProviderKind,
        env_var: &'static str,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    /// Request validation failed
    #[error("Request validation failed: {0}")]
    Validation(String),

    /// Network-level failure (DNS, connection refused, timeout, body read)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a non-2xx status
    #[error("{} API request failed with status {status}: {message}", .provider.display_name())]
    UpstreamStatus {
        provider: ProviderKind,
        status: u16,
        message: String,
    },

    /// Provider answered 2xx but the body lacks required fields
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Whether the error is reported to callers as text instead of a fault
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            AppError::InvalidProvider(_) | AppError::Transport(_) | AppError::UpstreamStatus { .. }
        )
    }

    /// Get error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidProvider(_) => "invalid_provider",
            AppError::MissingCredential { .. } => "missing_credential",
            AppError::Config(_) => "config_error",
            AppError::Validation(_) => "invalid_request_error",
            AppError::Transport(e) if e.is_timeout() => "timeout_error",
            AppError::Transport(_) => "transport_error",
            AppError::UpstreamStatus { .. } => "api_error",
            AppError::MalformedResponse(_) | AppError::Serialization(_) => "malformed_response",
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Error context extension trait
pub trait ErrorContext<T> {
    /// Add validation error context
    fn validation_context(self, message: &str) -> AppResult<T>;

    /// Add malformed response context
    fn malformed_context(self, message: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn validation_context(self, message: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Validation(format!("{}: {}", message, e)))
    }

    fn malformed_context(self, message: &str) -> AppResult<T> {
        self.map_err(|e| AppError::MalformedResponse(format!("{}: {}", message, e)))
    }
}
