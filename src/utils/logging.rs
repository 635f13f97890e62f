//! Logging utilities
//!
//! Subscriber setup and payload summaries for debug logs

use crate::config::LoggingConfig;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Set to true to include full payloads (tools, long prompts) in debug logs
/// Default is false to reduce log verbosity
pub const VERBOSE_REQUEST_LOGGING: bool = false;

/// Initialize logging system
///
/// Logs go to stderr so stdout only carries the answer.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.level)?;

    let result = if config.format == "json" {
        // JSON format logs (production environment)
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .try_init()
    } else {
        // Human readable format (development environment)
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::debug!("Logging system initialized");
    Ok(())
}

/// Truncate a string with a note about original length
fn truncate_content(s: &str, max_chars: usize) -> String {
    let total = s.chars().count();
    if total > max_chars {
        let kept: String = s.chars().take(max_chars).collect();
        format!("{}... ({} chars truncated)", kept, total - max_chars)
    } else {
        s.to_string()
    }
}

/// Create a filtered version of a payload message for logging
fn filter_message(message: &serde_json::Value) -> serde_json::Value {
    let role = message.get("role").cloned().unwrap_or(serde_json::Value::Null);
    let content = match message.get("content") {
        Some(serde_json::Value::String(text)) => {
            // System prompts get truncated more aggressively
            let max_len = if role == "system" { 100 } else { 200 };
            serde_json::Value::String(truncate_content(text, max_len))
        }
        Some(other) => other.clone(),
        None => serde_json::Value::Null,
    };

    serde_json::json!({
        "role": role,
        "content": content,
    })
}

/// Create a filtered summary of an outbound payload for logging
/// Keeps original structure but truncates verbose content
pub fn payload_log_summary(payload: &serde_json::Value) -> serde_json::Value {
    if VERBOSE_REQUEST_LOGGING {
        return payload.clone();
    }

    let mut summary = payload.clone();

    if let Some(messages) = payload.get("messages").and_then(|m| m.as_array()) {
        summary["messages"] = serde_json::Value::Array(messages.iter().map(filter_message).collect());
    }

    if let Some(tools) = payload.get("tools").and_then(|t| t.as_array()) {
        summary["tools"] = serde_json::json!(format!("[...{} tools (details truncated)]", tools.len()));
    }

    summary
}
