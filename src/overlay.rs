//! HTML fragments for the injected overlay panel. Pure string producers —
//! the extension shell owns the live DOM and wires the event handlers.

use crate::extraction::ExtractedCode;
use crate::prompt::Action;

const ACTIONS: &[(Action, &str)] = &[
    (Action::Errors, "🐛"),
    (Action::Logic, "🧠"),
    (Action::Optimize, "⚡"),
    (Action::Rate, "⭐"),
];

/// The options panel shown right after extraction: detected language, line
/// count, and one button per action.
pub fn options_panel(code: &ExtractedCode) -> String {
    let mut buttons = String::new();
    for (action, icon) in ACTIONS {
        buttons.push_str(&format!(
            r#"<button class="option-btn" data-action="{action}"><span class="icon">{icon}</span><span class="label">{label}</span></button>"#,
            action = action.as_str(),
            label = action.label(),
        ));
    }

    format!(
        r#"<div class="code-buddy-header"><h3>🤖 Code Buddy</h3><button class="close-btn" id="close-overlay">&times;</button></div><div class="code-buddy-info"><p><strong>Detected Language:</strong> {language}</p><p><strong>Code Lines:</strong> {lines}</p></div><div class="code-buddy-options">{buttons}</div>"#,
        language = code.language,
        lines = code.line_count(),
    )
}

pub fn loading_block(message: &str) -> String {
    format!(r#"<div class="loading"><div class="spinner"></div><p>{message}</p></div>"#)
}

/// Inline error block; every pipeline failure ends up here.
pub fn error_block(message: &str) -> String {
    format!(r#"<div class="error">❌ Error: {message}</div>"#)
}
