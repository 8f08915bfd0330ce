//! Provider selection and credentials.
//!
//! The settings surface lives outside this crate; it persists three keys
//! which are read here from the process environment: `CODE_BUDDY_PROVIDER`
//! (`groq` or `gemini`, default `groq`), `GROQ_API_KEY`, `GEMINI_API_KEY`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No API key configured. Please set up your API key in the settings.")]
    MissingKey,
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiProvider {
    Groq,
    Gemini,
}

impl ApiProvider {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_lowercase().as_str() {
            "groq" => Ok(ApiProvider::Groq),
            "gemini" => Ok(ApiProvider::Gemini),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ApiProvider,
    pub groq_key: Option<String>,
    pub gemini_key: Option<String>,
}

impl Config {
    /// Read the persisted settings from the environment. A missing provider
    /// key defaults to Groq; missing credentials only become an error once a
    /// request is actually dispatched.
    pub fn from_env() -> Result<Self, ConfigError> {
        let provider = match std::env::var("CODE_BUDDY_PROVIDER") {
            Ok(value) => ApiProvider::parse(&value)?,
            Err(_) => ApiProvider::Groq,
        };

        Ok(Self {
            provider,
            groq_key: non_empty(std::env::var("GROQ_API_KEY").ok()),
            gemini_key: non_empty(std::env::var("GEMINI_API_KEY").ok()),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
