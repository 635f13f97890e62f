//! LLM Dispatch CLI
//!
//! Sends one prompt to the selected provider and prints the formatted answer

use anyhow::{Context, Result};
use clap::Parser;
use llmdispatch::utils::logging::init_logging;
use llmdispatch::{FileConfig, RequestDispatcher, Settings};
use tracing::debug;

mod args;

use args::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    args.validate()?;

    // Environment first, then the optional JSON file on top
    let mut settings = Settings::new().context("Failed to load settings")?;
    let file_config = match &args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => FileConfig::load_default()?,
    };
    if let Some(file_config) = &file_config {
        settings = settings
            .merge_file(file_config)
            .context("Failed to apply configuration file")?;
    }

    // Initialize logging
    init_logging(&settings.logging)?;
    debug!("{}", llmdispatch::version_info());

    let dispatcher = RequestDispatcher::new(settings)?;
    let output = dispatcher
        .dispatch(&args.provider, &args.model, &args.messages(), &args.options())
        .await?;

    print!("{}", output);
    Ok(())
}
