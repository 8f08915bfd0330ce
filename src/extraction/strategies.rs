//! Ordered `(selector, join rule)` strategies for known editor widgets.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// How to turn a matched element into code text.
enum JoinRule {
    /// Virtualised editors render one child element per line; join their
    /// text with newlines.
    Lines(&'static str),
    /// Textareas carry the code as their value.
    TextareaValue,
    /// Anything else: the rendered text content.
    RenderedText,
}

struct Strategy {
    selector: &'static str,
    join: JoinRule,
}

/// Tried in order; first non-empty result wins.
const STRATEGIES: &[Strategy] = &[
    // Monaco (LeetCode, embedded VS Code)
    Strategy { selector: ".monaco-editor .view-lines", join: JoinRule::Lines(".view-line") },
    // CodeMirror
    Strategy { selector: ".CodeMirror-code", join: JoinRule::Lines(".CodeMirror-line") },
    Strategy { selector: "textarea[name=\"code\"]", join: JoinRule::TextareaValue },
    Strategy { selector: "textarea.form-control", join: JoinRule::TextareaValue },
    Strategy { selector: "#editor", join: JoinRule::RenderedText },
    // Ace
    Strategy { selector: ".ace_content", join: JoinRule::RenderedText },
    // Generic code blocks
    Strategy { selector: "pre code", join: JoinRule::RenderedText },
    Strategy { selector: ".code-editor", join: JoinRule::RenderedText },
    Strategy { selector: "[class*=\"editor\"]", join: JoinRule::RenderedText },
];

pub(super) fn scrape(document: &Html) -> Option<String> {
    for strategy in STRATEGIES {
        let selector = match Selector::parse(strategy.selector) {
            Ok(selector) => selector,
            Err(_) => continue,
        };
        let element = match document.select(&selector).next() {
            Some(element) => element,
            None => continue,
        };

        let text = strategy.join.apply(element);
        if !text.trim().is_empty() {
            debug!(selector = strategy.selector, "editor widget matched");
            return Some(text);
        }
    }

    None
}

impl JoinRule {
    fn apply(&self, element: ElementRef<'_>) -> String {
        // A textarea exposes its code as the element value no matter which
        // selector matched it.
        if element.value().name().eq_ignore_ascii_case("textarea") {
            return rendered_text(element);
        }

        match self {
            JoinRule::Lines(line_selector) => {
                let lines = match Selector::parse(line_selector) {
                    Ok(selector) => selector,
                    Err(_) => return String::new(),
                };
                element
                    .select(&lines)
                    .map(|line| rendered_text(line))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            JoinRule::TextareaValue | JoinRule::RenderedText => rendered_text(element),
        }
    }
}

fn rendered_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}
