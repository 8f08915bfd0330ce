//! Explicit quiz state machine.
//!
//! The session holds the fixed question list plus an explicit tagged state;
//! `apply` is the only mutation point and maps `(state, event)` to the next
//! state and an effect for the overlay to carry out. Invariant: while the
//! session is live, the presented index equals `answers.len()`.

use super::parser::{parse_quiz_reply, ParseError};
use serde::{Deserialize, Serialize};

/// One question as delivered by the model. Option texts keep their `A) `
/// style prefixes; anything with a different option count is rendered as-is
/// rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct: String,
    pub explanation: String,
}

/// Record of one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnsweredQuestion {
    pub question: String,
    pub selected: String,
    pub correct: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    /// Question `index` is on screen; submit stays disabled until an option
    /// is selected.
    Presenting { index: usize, selected: Option<String> },
    /// The answer for question `index` was recorded; options are inert.
    Feedback { index: usize },
    /// Terminal: score and tier on screen, regenerate or exit.
    Summary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    Select(String),
    Submit,
    Next,
    Regenerate,
    EndSession,
}

/// What the overlay should do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEffect {
    /// Re-render the current question (selection highlight changed).
    RenderQuestion,
    /// Reveal the recorded answer's feedback.
    RenderFeedback,
    /// Show the final score and tier.
    RenderSummary,
    /// Issue a fresh logic request and rebuild the session from its reply.
    RequestRegeneration,
    /// Close the overlay.
    Close,
    /// Event was not applicable in the current state.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    StrongGrasp,
    GoodProgress,
    NeedsGuidance,
}

impl FeedbackTier {
    pub fn for_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            FeedbackTier::StrongGrasp
        } else if percentage >= 60 {
            FeedbackTier::GoodProgress
        } else {
            FeedbackTier::NeedsGuidance
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FeedbackTier::StrongGrasp => {
                "Excellent! You have a strong grasp of the logic. Ready to code!"
            }
            FeedbackTier::GoodProgress => {
                "Good progress! Consider reviewing the areas you missed."
            }
            FeedbackTier::NeedsGuidance => {
                "You might benefit from more guidance on the logical concepts."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub correct: usize,
    pub total: usize,
    pub percentage: u32,
    pub tier: FeedbackTier,
}

#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    answers: Vec<AnsweredQuestion>,
    correct_count: usize,
    state: QuizState,
}

impl QuizSession {
    /// The entry transition: parse the raw reply into a fresh session. A
    /// reply without a usable payload fails the whole quiz attempt.
    pub fn from_reply(reply: &str) -> Result<Self, ParseError> {
        let questions = parse_quiz_reply(reply)?;
        Ok(Self::new(questions))
    }

    /// An empty question list skips straight to the summary screen; there is
    /// nothing to present.
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let state = if questions.is_empty() {
            QuizState::Summary
        } else {
            QuizState::Presenting { index: 0, selected: None }
        };
        Self { questions, answers: Vec::new(), correct_count: 0, state }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &[AnsweredQuestion] {
        &self.answers
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    /// Index of the question currently on screen, if any.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            QuizState::Presenting { index, .. } | QuizState::Feedback { index } => Some(index),
            QuizState::Summary => None,
        }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.current_index().and_then(|index| self.questions.get(index))
    }

    pub fn last_answer(&self) -> Option<&AnsweredQuestion> {
        self.answers.last()
    }

    /// The single transition function.
    pub fn apply(&mut self, event: QuizEvent) -> QuizEffect {
        match (self.state.clone(), event) {
            (QuizState::Presenting { index, .. }, QuizEvent::Select(label)) => {
                self.state = QuizState::Presenting { index, selected: Some(label) };
                QuizEffect::RenderQuestion
            }
            (QuizState::Presenting { index, selected: Some(selected) }, QuizEvent::Submit) => {
                // Case-sensitive single-letter comparison, per the reply
                // contract.
                let question = &self.questions[index];
                let is_correct = selected == question.correct;
                if is_correct {
                    self.correct_count += 1;
                }
                self.answers.push(AnsweredQuestion {
                    question: question.question.clone(),
                    selected,
                    correct: question.correct.clone(),
                    is_correct,
                });
                self.state = QuizState::Feedback { index };
                QuizEffect::RenderFeedback
            }
            // Submit stays disabled until an option is picked.
            (QuizState::Presenting { selected: None, .. }, QuizEvent::Submit) => {
                QuizEffect::Ignored
            }
            (QuizState::Feedback { index }, QuizEvent::Next) => {
                let next = index + 1;
                if next == self.questions.len() {
                    self.state = QuizState::Summary;
                    QuizEffect::RenderSummary
                } else {
                    self.state = QuizState::Presenting { index: next, selected: None };
                    QuizEffect::RenderQuestion
                }
            }
            (QuizState::Summary, QuizEvent::Regenerate) => QuizEffect::RequestRegeneration,
            (QuizState::Summary, QuizEvent::EndSession) => QuizEffect::Close,
            _ => QuizEffect::Ignored,
        }
    }

    pub fn summary(&self) -> QuizSummary {
        let total = self.questions.len();
        let percentage = if total == 0 {
            0
        } else {
            ((self.correct_count as f64 / total as f64) * 100.0).round() as u32
        };

        QuizSummary {
            correct: self.correct_count,
            total,
            percentage,
            tier: FeedbackTier::for_percentage(percentage),
        }
    }
}
