//! Best-effort extraction of code text from a page's editor widget.
//!
//! An ordered list of CSS-selector strategies is tried against the document;
//! the first one yielding non-empty text wins. When none match, the caller's
//! manual-entry fallback is asked for the code instead. Language detection
//! then runs over whatever text was obtained.

pub mod language;
mod strategies;

#[cfg(test)]
mod tests;

pub use language::Language;

use scraper::Html;
use tracing::debug;

/// Code captured from the page, produced once per user gesture.
#[derive(Debug, Clone)]
pub struct ExtractedCode {
    pub text: String,
    pub language: Language,
}

impl ExtractedCode {
    /// Build directly from raw code text, skipping the selector heuristics.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let language = Language::detect(&text);
        Self { text, language }
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

/// Last-resort code source when no editor widget is found on the page.
pub trait ManualEntry {
    /// Ask the user to paste their code directly. `None` means they declined.
    fn request_code(&mut self) -> Option<String>;
}

/// Scrape the document for code. Reads the DOM only; the single side effect
/// is the manual-entry prompt, invoked at most once.
pub fn extract_code(html: &str, fallback: &mut dyn ManualEntry) -> ExtractedCode {
    let document = Html::parse_document(html);
    let text = match strategies::scrape(&document) {
        Some(text) => text,
        None => {
            debug!("no editor widget matched, requesting manual entry");
            fallback.request_code().unwrap_or_default()
        }
    };

    ExtractedCode::from_text(text)
}
