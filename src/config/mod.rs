//! Configuration management module
//!
//! Responsible for loading application configuration from environment variables and an optional JSON file

pub mod file;
pub mod settings;

pub use file::{FileConfig, FileProviderConfig};
pub use settings::{LoggingConfig, ProviderSettings, RequestConfig, Settings};
