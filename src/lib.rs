//! LLM Dispatch Library
//!
//! Sends one chat prompt to OpenAI, Anthropic or Mistral and returns a
//! uniformly formatted Markdown answer

pub mod config;
pub mod models;
pub mod providers;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::{FileConfig, Settings};
pub use models::{ChatMessage, GenerationOptions, GenerationRequest, GenerationResult, StopSequence};
pub use providers::{ProviderAdapter, ProviderKind, ProviderRequest};
pub use services::RequestDispatcher;
pub use utils::error::{AppError, AppResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
