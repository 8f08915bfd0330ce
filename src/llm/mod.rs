//! One-shot text generation against a remote provider.
//!
//! Two interchangeable providers are supported — Groq (chat-completion
//! style) and Gemini (generate-content style). A single request is made per
//! user gesture; there is no retry and no timeout beyond the transport's.

mod gemini;
mod groq;

#[cfg(test)]
mod tests;

pub use gemini::GeminiProvider;
pub use groq::GroqProvider;

use crate::config::{ApiProvider, Config, ConfigError};
use crate::prompt::PromptPair;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),
    /// The remote call reported failure; the message is surfaced verbatim.
    #[error("{0}")]
    Provider(String),
}

/// A remote text-generation service: send an instruction pair, get text back.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    async fn generate(&self, client: &Client, prompt: &PromptPair) -> Result<String, LlmError>;
}

/// Pick the provider for the next request. Preserves the original selection
/// rule: Groq when selected and a Groq key exists, otherwise Gemini whenever
/// a Gemini key exists, otherwise no usable credential.
pub fn select_provider(config: &Config) -> Result<Box<dyn LlmProvider>, ConfigError> {
    match (config.provider, &config.groq_key, &config.gemini_key) {
        (ApiProvider::Groq, Some(key), _) => Ok(Box::new(GroqProvider::new(key.clone()))),
        (_, _, Some(key)) => Ok(Box::new(GeminiProvider::new(key.clone()))),
        _ => Err(ConfigError::MissingKey),
    }
}

/// Make the single outbound call for one user gesture.
pub async fn generate(config: &Config, prompt: &PromptPair) -> Result<String, LlmError> {
    let provider = select_provider(config)?;
    let client = http_client();
    debug!(provider = provider.name(), "dispatching generation request");

    let result = provider.generate(&client, prompt).await;
    if let Err(error) = &result {
        warn!(provider = provider.name(), %error, "generation request failed");
    }
    result
}

fn http_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("failed to create HTTP client")
}

/// Both providers report failures as `{"error": {"message": "..."}}`.
pub(crate) fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(|message| message.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| fallback.to_string())
}
