//! Turning a markdown-flavoured reply into overlay markup.

mod enhance;
mod markdown;

#[cfg(test)]
mod tests;

pub use markdown::{escape_html, render_markdown};

use crate::prompt::Action;

/// Generic markdown conversion followed by the action-specific enhancement
/// pass. Logic replies never come through here; they go to the quiz parser.
pub fn render_response(reply: &str, action: Action) -> String {
    let html = markdown::render_markdown(reply);
    match action {
        Action::Rate => enhance::rating(html),
        Action::Errors => enhance::errors(html),
        Action::Optimize => enhance::optimization(html),
        Action::Logic => html,
    }
}
