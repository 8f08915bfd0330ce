//! Ordered markdown-to-markup stages.
//!
//! Stage order matters and is kept from the original conversion: fenced code
//! blocks are converted (and their content escaped) before the inline-code
//! and emphasis rules so later stages cannot consume the fence backticks.
//! The `<ul>` wrap deliberately covers only one contiguous run — the first
//! match — which mis-wraps replies containing several separated lists. Known
//! limitation, preserved as-is.

use regex::{Captures, Regex};

struct Stage {
    name: &'static str,
    apply: fn(String) -> String,
}

const PIPELINE: &[Stage] = &[
    Stage { name: "headings", apply: headings },
    Stage { name: "code_blocks", apply: code_blocks },
    Stage { name: "inline_code", apply: inline_code },
    Stage { name: "bold", apply: bold },
    Stage { name: "italic", apply: italic },
    Stage { name: "unordered_items", apply: unordered_items },
    Stage { name: "list_wrap", apply: list_wrap },
    Stage { name: "ordered_items", apply: ordered_items },
    Stage { name: "paragraphs", apply: paragraphs },
];

pub fn render_markdown(input: &str) -> String {
    let mut html = input.to_string();
    for stage in PIPELINE {
        html = (stage.apply)(html);
    }

    // Wrap in a paragraph if conversion didn't already produce a tag.
    if !html.starts_with('<') {
        html = format!("<p>{html}</p>");
    }
    html
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn headings(html: String) -> String {
    let h4 = Regex::new(r"(?m)^### (.*)$").expect("valid regex");
    let h3 = Regex::new(r"(?m)^## (.*)$").expect("valid regex");
    let h2 = Regex::new(r"(?m)^# (.*)$").expect("valid regex");

    let html = h4.replace_all(&html, "<h4>$1</h4>");
    let html = h3.replace_all(&html, "<h3>$1</h3>");
    h2.replace_all(&html, "<h2>$1</h2>").into_owned()
}

fn code_blocks(html: String) -> String {
    // The language tag is consumed so the fence line doesn't leak into the
    // code body; display keeps the content only.
    let re = Regex::new(r"(?s)```(\w+)?\n(.*?)```").expect("valid regex");
    re.replace_all(&html, |caps: &Captures| {
        let code = escape_html(caps[2].trim());
        format!(
            r#"<div class="code-block"><button class="copy-btn">📋 Copy</button><pre><code>{code}</code></pre></div>"#
        )
    })
    .into_owned()
}

fn inline_code(html: String) -> String {
    let re = Regex::new(r"`([^`]+)`").expect("valid regex");
    re.replace_all(&html, "<code>$1</code>").into_owned()
}

fn bold(html: String) -> String {
    let re = Regex::new(r"\*\*(.*?)\*\*").expect("valid regex");
    re.replace_all(&html, "<strong>$1</strong>").into_owned()
}

fn italic(html: String) -> String {
    let re = Regex::new(r"\*(.*?)\*").expect("valid regex");
    re.replace_all(&html, "<em>$1</em>").into_owned()
}

fn unordered_items(html: String) -> String {
    let re = Regex::new(r"(?m)^- (.*)$").expect("valid regex");
    re.replace_all(&html, "<li>$1</li>").into_owned()
}

/// Wraps one contiguous run of items — first match only, see module docs.
fn list_wrap(html: String) -> String {
    let re = Regex::new(r"(?s)(<li>.*</li>)").expect("valid regex");
    re.replace(&html, "<ul>$1</ul>").into_owned()
}

fn ordered_items(html: String) -> String {
    let re = Regex::new(r"(?m)^\d+\.\s(.*)$").expect("valid regex");
    re.replace_all(&html, "<li>$1</li>").into_owned()
}

fn paragraphs(html: String) -> String {
    html.replace("\n\n", "</p><p>")
}

#[cfg(test)]
pub(super) fn stage_order() -> Vec<&'static str> {
    PIPELINE.iter().map(|stage| stage.name).collect()
}
