//! File-based configuration loading
//!
//! Optional JSON file with provider credentials, endpoints and timeout

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration loaded from JSON file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    /// Request timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Provider configurations keyed by provider name
    #[serde(default)]
    pub providers: HashMap<String, FileProviderConfig>,
}

/// Provider entry of the configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileProviderConfig {
    /// Endpoint URL override
    #[serde(rename = "baseUrl", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// API key (can be empty if using env var)
    #[serde(rename = "apiKey", default)]
    pub api_key: String,
}

impl FileConfig {
    /// Load configuration from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: FileConfig = serde_json::from_str(&content)
            .with_context(|| "Failed to parse config JSON")?;

        config.validate()?;

        debug!("Loaded {} provider entries", config.providers.len());
        Ok(config)
    }

    /// Load configuration from default locations
    /// Searches in order:
    /// 1. ~/.config/llmdispatch/llmdispatch.json
    /// 2. ./llmdispatch.json
    ///
    /// Returns `None` when neither file exists.
    pub fn load_default() -> Result<Option<Self>> {
        match Self::default_paths().into_iter().find(|path| path.exists()) {
            Some(path) => Self::load(&path).map(Some),
            None => {
                debug!("No configuration file found, using environment only");
                Ok(None)
            }
        }
    }

    /// Candidate configuration file locations
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("llmdispatch").join("llmdispatch.json"));
        }
        paths.push(PathBuf::from("llmdispatch.json"));
        paths
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.timeout == Some(0) {
            anyhow::bail!("Timeout values cannot be 0");
        }

        for (name, provider) in &self.providers {
            let valid_names = ["openai", "anthropic", "mistral"];
            if !valid_names.contains(&name.to_lowercase().as_str()) {
                anyhow::bail!("Invalid provider '{}'. Valid providers: {:?}", name, valid_names);
            }

            if let Some(base_url) = &provider.base_url {
                if !base_url.starts_with("http") {
                    anyhow::bail!("Invalid base URL for provider '{}': {}", name, base_url);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_config() {
        let file = write_config(
            r#"{
                "timeout": 45,
                "providers": {
                    "openai": { "apiKey": "sk-file" },
                    "mistral": { "baseUrl": "http://localhost:8080/v1/chat/completions" }
                }
            }"#,
        );

        let config = FileConfig::load(file.path()).unwrap();

        assert_eq!(config.timeout, Some(45));
        assert_eq!(config.providers["openai"].api_key, "sk-file");
        assert!(config.providers["openai"].base_url.is_none());
        assert_eq!(
            config.providers["mistral"].base_url.as_deref(),
            Some("http://localhost:8080/v1/chat/completions")
        );
        assert!(config.providers["mistral"].api_key.is_empty());
    }

    #[test]
    fn test_empty_object_is_valid() {
        let file = write_config("{}");
        let config = FileConfig::load(file.path()).unwrap();
        assert!(config.providers.is_empty());
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_validation_unknown_provider() {
        let file = write_config(r#"{"providers": {"cohere": {"apiKey": "x"}}}"#);
        assert!(FileConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_validation_invalid_base_url() {
        let file = write_config(r#"{"providers": {"openai": {"baseUrl": "ftp://example.com"}}}"#);
        assert!(FileConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let file = write_config(r#"{"timeout": 0}"#);
        assert!(FileConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = FileConfig::load(Path::new("/nonexistent/llmdispatch.json"));
        assert!(result.is_err());
    }
}
