//! HTML fragments for the quiz screens, mirroring the overlay stylesheet's
//! class names. Pure string producers; the shell owns the live DOM.

use super::session::{QuizSession, QuizState, QuizSummary};
use regex::Regex;

/// Markup for the question currently on screen, or `None` in `Summary`.
pub fn question_html(session: &QuizSession) -> Option<String> {
    let index = session.current_index()?;
    let question = session.questions().get(index)?;
    let total = session.questions().len();

    let selected = match session.state() {
        QuizState::Presenting { selected, .. } => selected.as_deref(),
        _ => None,
    };

    // The model labels option texts itself ("A) ..."); strip that prefix so
    // the letter badge isn't doubled.
    let prefix = Regex::new(r"^[A-D]\)\s*").expect("valid regex");

    let mut options = String::new();
    for (i, option) in question.options.iter().enumerate() {
        // Badges past the alphabet stay clamped at Z; over-length option
        // lists render as-is instead of being rejected.
        let letter = char::from(b'A' + i.min(25) as u8);
        let class = if selected == Some(&letter.to_string()) {
            "mcq-option selected"
        } else {
            "mcq-option"
        };
        options.push_str(&format!(
            r#"<div class="{class}" data-option="{letter}"><div class="mcq-option-letter">{letter}</div><div class="mcq-option-text">{text}</div></div>"#,
            text = prefix.replace(option, ""),
        ));
    }

    let submit_disabled = if selected.is_some() { "" } else { " disabled" };

    Some(format!(
        r#"<div class="mcq-container"><div class="mcq-question"><div class="mcq-header"><span class="mcq-number">Question {number}</span><span class="mcq-progress">{number} of {total}</span></div><div class="mcq-text">{text}</div><div class="mcq-options">{options}</div><div class="mcq-feedback"></div><div class="mcq-actions"><button class="mcq-btn primary" id="mcq-submit"{submit_disabled}>Submit Answer</button></div></div></div>"#,
        number = index + 1,
        text = question.question,
    ))
}

/// Markup for the feedback line after a submit. The wrong option keeps its
/// mark and the correct one is revealed via the stylesheet classes.
pub fn feedback_html(session: &QuizSession) -> Option<String> {
    let index = match session.state() {
        QuizState::Feedback { index } => *index,
        _ => return None,
    };
    let question = session.questions().get(index)?;
    let answer = session.last_answer()?;

    let html = if answer.is_correct {
        format!(
            r#"<div class="mcq-feedback correct show">✅ Correct! {}</div>"#,
            question.explanation
        )
    } else {
        format!(
            r#"<div class="mcq-feedback incorrect show">❌ Not quite. The correct answer is {}. {}</div>"#,
            question.correct, question.explanation
        )
    };
    Some(html)
}

/// Markup for the terminal summary screen.
pub fn summary_html(summary: &QuizSummary) -> String {
    format!(
        r#"<div class="mcq-summary"><h2>🎯 Quiz Complete!</h2><div class="summary-score">{correct}/{total}</div><div class="summary-text">{message}</div><div class="summary-actions"><button class="mcq-btn primary" id="more-questions">📚 Get 5 More Questions</button><button class="mcq-btn secondary" id="start-coding">💻 Start Coding</button></div></div>"#,
        correct = summary.correct,
        total = summary.total,
        message = summary.tier.message(),
    )
}
