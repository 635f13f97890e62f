//! Application configuration settings
//!
//! Credentials, endpoints, request timeout and logging, loaded once at
//! startup and handed to the dispatcher

use super::file::FileConfig;
use crate::providers::ProviderKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// OpenAI configuration
    pub openai: ProviderSettings,
    /// Anthropic configuration
    pub anthropic: ProviderSettings,
    /// Mistral configuration
    pub mistral: ProviderSettings,
    /// Request configuration
    pub request: RequestConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Per-provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// API key, if configured
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Full endpoint URL
    pub endpoint: String,
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl ProviderSettings {
    fn defaults(kind: ProviderKind) -> Self {
        Self {
            api_key: None,
            endpoint: kind.default_endpoint().to_string(),
        }
    }
}

/// Request configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Request timeout in seconds
    pub timeout: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai: ProviderSettings::defaults(ProviderKind::OpenAi),
            anthropic: ProviderSettings::defaults(ProviderKind::Anthropic),
            mistral: ProviderSettings::defaults(ProviderKind::Mistral),
            request: RequestConfig {
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "text".to_string(),
            },
        }
    }
}

impl Settings {
    /// Create a new configuration instance from the process environment
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup
    pub fn from_source<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let mut settings = Self::default();

        for kind in ProviderKind::ALL {
            let provider = settings.provider_mut(kind);
            provider.api_key = lookup(kind.credential_env_var());
            provider.endpoint = get_or_default(kind.endpoint_env_var(), kind.default_endpoint());
        }

        settings.request.timeout = get_or_default("REQUEST_TIMEOUT", &DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .context("Invalid timeout value")?;
        settings.logging.level = get_or_default("RUST_LOG", "info");
        settings.logging.format = get_or_default("LOG_FORMAT", "text");

        // Validate configuration
        settings.validate()?;

        Ok(settings)
    }

    /// Overlay values from a configuration file
    ///
    /// Non-empty file values replace the environment ones.
    pub fn merge_file(mut self, file: &FileConfig) -> Result<Self> {
        if let Some(timeout) = file.timeout {
            self.request.timeout = timeout;
        }

        for (name, provider_file) in &file.providers {
            let kind: ProviderKind = name
                .parse()
                .with_context(|| format!("Unknown provider '{}' in configuration file", name))?;
            let provider = self.provider_mut(kind);

            if !provider_file.api_key.is_empty() {
                provider.api_key = Some(provider_file.api_key.clone());
            }
            if let Some(base_url) = &provider_file.base_url {
                provider.endpoint = base_url.clone();
            }
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate configuration validity
    fn validate(&self) -> Result<()> {
        for kind in ProviderKind::ALL {
            let endpoint = &self.provider(kind).endpoint;
            if !endpoint.starts_with("http") {
                anyhow::bail!("Invalid {} endpoint URL format, should start with 'http': {}", kind, endpoint);
            }
        }

        // Validate timeout values
        if self.request.timeout == 0 {
            anyhow::bail!("Timeout values cannot be 0");
        }

        // Validate log level, which may be a full filter directive
        EnvFilter::try_new(&self.logging.level)
            .with_context(|| format!("Invalid log level: {}", self.logging.level))?;

        // Validate log format
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// Configuration of one provider
    pub fn provider(&self, kind: ProviderKind) -> &ProviderSettings {
        match kind {
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::Anthropic => &self.anthropic,
            ProviderKind::Mistral => &self.mistral,
        }
    }

    fn provider_mut(&mut self, kind: ProviderKind) -> &mut ProviderSettings {
        match kind {
            ProviderKind::OpenAi => &mut self.openai,
            ProviderKind::Anthropic => &mut self.anthropic,
            ProviderKind::Mistral => &mut self.mistral,
        }
    }

    /// API key of one provider; empty keys count as unset
    pub fn api_key(&self, kind: ProviderKind) -> Option<&str> {
        self.provider(kind)
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
    }
}
