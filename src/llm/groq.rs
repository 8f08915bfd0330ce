//! Groq chat-completions provider.

use super::{error_message, LlmError, LlmProvider};
use crate::prompt::PromptPair;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const MODEL: &str = "llama-3.3-70b-versatile";

pub struct GroqProvider {
    api_key: String,
}

impl GroqProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into() }
    }
}

#[derive(Serialize)]
pub(super) struct ChatRequest {
    model: &'static str,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: String,
}

pub(super) fn request_body(prompt: &PromptPair) -> ChatRequest {
    ChatRequest {
        model: MODEL,
        messages: vec![
            ChatMessage { role: "system", content: prompt.system.clone() },
            ChatMessage { role: "user", content: prompt.user.clone() },
        ],
        temperature: 0.7,
        max_tokens: 2000,
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    async fn generate(&self, client: &Client, prompt: &PromptPair) -> Result<String, LlmError> {
        let response = client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Provider(error_message(&body, "Groq API error")));
        }

        let reply: ChatResponse = response.json().await?;
        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::Provider("API returned empty response".to_string()))
    }
}
