use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use llmdispatch::{ChatMessage, GenerationOptions};

/// Send a prompt to OpenAI, Anthropic or Mistral
#[derive(Debug, Parser)]
#[command(name = "llmdispatch", version, about = "Send one chat prompt to an LLM provider and print a Markdown answer")]
pub struct Args {
    /// Provider name: openai, anthropic or mistral
    #[arg(short, long, env = "LLMDISPATCH_PROVIDER")]
    pub provider: String,

    /// Model name as understood by the provider
    #[arg(short, long, env = "LLMDISPATCH_MODEL")]
    pub model: String,

    /// Optional system message sent before the prompt (not supported by anthropic)
    #[arg(short, long)]
    pub system: Option<String>,

    /// Sampling temperature
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Maximum tokens to generate
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Nucleus sampling parameter
    #[arg(long)]
    pub top_p: Option<f64>,

    /// Path to a JSON configuration file
    #[arg(short, long, env = "LLMDISPATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Prompt text; several words are joined with spaces
    #[arg(required = true)]
    pub prompt: Vec<String>,
}

impl Args {
    /// Reject option combinations the selected provider cannot accept
    pub fn validate(&self) -> Result<()> {
        // Anthropic takes the system prompt as a top-level field, not a message
        if self.system.is_some() && self.provider.eq_ignore_ascii_case("anthropic") {
            anyhow::bail!("--system is not supported with the anthropic provider");
        }
        Ok(())
    }

    /// Conversation sent to the provider
    pub fn messages(&self) -> Vec<ChatMessage> {
        let mut messages = Vec::new();
        if let Some(system) = &self.system {
            messages.push(ChatMessage::system(system.clone()));
        }
        messages.push(ChatMessage::user(self.prompt.join(" ")));
        messages
    }

    /// Default options with the command line overrides applied
    pub fn options(&self) -> GenerationOptions {
        let mut options = GenerationOptions::default();
        if let Some(temperature) = self.temperature {
            options.temperature = temperature;
        }
        if let Some(max_tokens) = self.max_tokens {
            options.max_tokens = Some(max_tokens);
        }
        if let Some(top_p) = self.top_p {
            options.top_p = top_p;
        }
        options
    }
}
