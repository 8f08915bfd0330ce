//! The "logic guidance" flow: parse the model's quiz payload out of a reply
//! and drive a one-question-at-a-time multiple-choice session with scoring.

mod parser;
mod session;
pub mod view;


pub use parser::ParseError;
pub use session::{
    AnsweredQuestion, FeedbackTier, QuizEffect, QuizEvent, QuizQuestion, QuizSession, QuizState,
    QuizSummary,
};
