//! Locating and validating the quiz payload inside a raw model reply.

use super::session::QuizQuestion;
use thiserror::Error;
use tracing::debug;

/// Non-fatal: shown inline, and the user regenerates to try again.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid response format")]
    NoJson,
    #[error("Could not parse questions: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Response has no questions array")]
    MissingQuestions,
}

/// Extract and validate the questions from a raw reply. The prompt asks for
/// JSON only, but replies routinely arrive wrapped in prose or a code fence.
pub(super) fn parse_quiz_reply(reply: &str) -> Result<Vec<QuizQuestion>, ParseError> {
    let json = extract_json(reply).ok_or(ParseError::NoJson)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;

    let questions = value
        .get("questions")
        .and_then(|questions| questions.as_array())
        .ok_or(ParseError::MissingQuestions)?;

    let questions = questions
        .iter()
        .map(|question| serde_json::from_value(question.clone()))
        .collect::<Result<Vec<QuizQuestion>, _>>()?;

    debug!(count = questions.len(), "quiz payload parsed");
    Ok(questions)
}

/// Take the ```json fenced block if present, else the widest `{ ... }` span.
fn extract_json(reply: &str) -> Option<String> {
    let trimmed = reply.trim();

    if let Some(start) = trimmed.find("```json") {
        if let Some(end) = trimmed[start + 7..].find("```") {
            return Some(trimmed[start + 7..start + 7 + end].trim().to_string());
        }
    }

    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end > start {
        Some(trimmed[start..=end].to_string())
    } else {
        None
    }
}
