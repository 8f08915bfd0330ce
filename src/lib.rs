//! # Code Buddy
//!
//! Analysis core for the Code Buddy assistant. The crate takes code captured
//! from a web page's editor widget, sends it to a remote text-generation
//! provider, and produces the markup the injected overlay displays — including
//! the interactive multiple-choice quiz flow for the "logic guidance" action.
//!
//! ## Architecture
//!
//! ```text
//! HTML document → extraction → prompt → llm → (quiz | render) → overlay markup
//! ```
//!
//! The platform shell (extension chrome, key storage, lifecycle hooks) lives
//! outside this crate; everything here is a pure function of its inputs plus
//! one outbound HTTP call per action.

pub mod config;
pub mod extraction;
pub mod llm;
pub mod overlay;
pub mod prompt;
pub mod quiz;
pub mod render;

pub use config::{ApiProvider, Config, ConfigError};
pub use extraction::{extract_code, ExtractedCode, Language, ManualEntry};
pub use llm::LlmError;
pub use prompt::{build_prompt, Action, PromptPair};
pub use quiz::{ParseError, QuizEffect, QuizEvent, QuizSession, QuizState};
pub use render::render_response;

use thiserror::Error;
use tracing::info;

/// Everything that can go wrong between a user gesture and the overlay
/// update. Each variant is scoped to the current overlay session; none are
/// fatal to the host.
#[derive(Error, Debug)]
pub enum BuddyError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Llm(#[from] LlmError),
    #[error("{0}")]
    Quiz(#[from] ParseError),
}

/// Result of one action request: either finished markup, or a live quiz
/// session the overlay drives from here on.
#[derive(Debug)]
pub enum ActionOutcome {
    Markup(String),
    Quiz(QuizSession),
}

/// Run one action over previously extracted code: build the instruction
/// pair, make the single provider call, and shape the reply for display.
pub async fn run_action(
    config: &Config,
    action: Action,
    code: &ExtractedCode,
) -> Result<ActionOutcome, BuddyError> {
    let prompt = build_prompt(action, code.language, &code.text);
    let reply = llm::generate(config, &prompt).await?;
    info!(action = action.as_str(), reply_len = reply.len(), "provider reply received");

    match action {
        Action::Logic => Ok(ActionOutcome::Quiz(QuizSession::from_reply(&reply)?)),
        _ => Ok(ActionOutcome::Markup(render_response(&reply, action))),
    }
}

/// Shape any pipeline failure as the overlay's inline error block.
pub fn render_failure(error: &BuddyError) -> String {
    overlay::error_block(&error.to_string())
}
