//! Fixed instruction templates, one per action.
//!
//! `build_prompt` is a pure mapping: the same `(action, language, code)`
//! always yields the same instruction pair.

use crate::extraction::Language;
use serde::{Deserialize, Serialize};

/// The four things a user can ask of their code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Errors,
    Logic,
    Optimize,
    Rate,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Errors => "errors",
            Action::Logic => "logic",
            Action::Optimize => "optimize",
            Action::Rate => "rate",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "errors" => Some(Action::Errors),
            "logic" => Some(Action::Logic),
            "optimize" => Some(Action::Optimize),
            "rate" => Some(Action::Rate),
            _ => None,
        }
    }

    /// Button label shown on the overlay options panel.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Errors => "Find Errors",
            Action::Logic => "Logic Guidance",
            Action::Optimize => "Optimize Code",
            Action::Rate => "Rate My Code",
        }
    }
}

/// A (system, user) instruction pair ready for a provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

pub fn build_prompt(action: Action, language: Language, code: &str) -> PromptPair {
    match action {
        Action::Errors => PromptPair {
            system: "You are an expert code reviewer. Format your response with clear sections using markdown.".to_string(),
            user: format!(
                "Analyze this {language} code and identify errors:\n\n{code}\n\nFormat your response as:\n## Errors Found\n- List each error with line number\n- Explain why it's an error\n- Suggest how to fix it\n\nUse clear headings and bullet points."
            ),
        },
        // The reply contract here — a JSON object with a `questions` array of
        // exactly 5 entries — is shared with quiz::parser. Keep both in sync.
        Action::Logic => PromptPair {
            system: "You are a Socratic coding mentor who creates multiple choice questions to guide learning.".to_string(),
            user: format!(
                "Create exactly 5 MCQ questions about this {language} code to help identify logical issues:\n\n{code}\n\nFormat EXACTLY as JSON:\n{{\n  \"questions\": [\n    {{\n      \"question\": \"What does this code do in the first iteration?\",\n      \"options\": [\"A) ...\", \"B) ...\", \"C) ...\", \"D) ...\"],\n      \"correct\": \"A\",\n      \"explanation\": \"Detailed explanation why A is correct\"\n    }}\n  ]\n}}\n\nMake questions progressively reveal the logic issue. Return ONLY valid JSON."
            ),
        },
        Action::Optimize => PromptPair {
            system: "You are a performance optimization expert. Format responses with clear sections.".to_string(),
            user: format!(
                "Analyze this {language} code:\n\n{code}\n\nFormat as:\n## Current Complexity\n- Time: O(...)\n- Space: O(...)\n\n## Optimization Strategies\n1. Strategy name\n   - How it helps\n   - When to use\n\n## Best Practices\n- List recommendations\n\nUse markdown formatting."
            ),
        },
        Action::Rate => PromptPair {
            system: "You are a code quality assessor. Provide structured scoring.".to_string(),
            user: format!(
                "Rate this {language} code:\n\n{code}\n\nFormat as:\n## Overall Score: X/100\n\n## Breakdown\n### Correctness (X/25)\n- Detailed feedback\n\n### Code Quality (X/25)\n- Detailed feedback\n\n### Efficiency (X/25)\n- Detailed feedback\n\n### Maintainability (X/25)\n- Detailed feedback\n\n## Key Improvements\n- List top 3 improvements\n\nUse markdown."
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODE: &str = "for i in range(3):\n    print(i)";

    #[test]
    fn build_is_pure() {
        for action in [Action::Errors, Action::Logic, Action::Optimize, Action::Rate] {
            let first = build_prompt(action, Language::Python, CODE);
            let second = build_prompt(action, Language::Python, CODE);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn templates_embed_language_and_code() {
        for action in [Action::Errors, Action::Logic, Action::Optimize, Action::Rate] {
            let prompt = build_prompt(action, Language::Cpp, CODE);
            assert!(prompt.user.contains("C++"), "{:?} misses language", action);
            assert!(prompt.user.contains(CODE), "{:?} misses code", action);
            assert!(!prompt.system.is_empty());
        }
    }

    #[test]
    fn logic_template_pins_the_quiz_contract() {
        let prompt = build_prompt(Action::Logic, Language::JavaScript, CODE);
        assert!(prompt.user.contains("exactly 5 MCQ questions"));
        assert!(prompt.user.contains("\"questions\""));
        assert!(prompt.user.contains("Return ONLY valid JSON"));
    }

    #[test]
    fn action_names_round_trip() {
        for action in [Action::Errors, Action::Logic, Action::Optimize, Action::Rate] {
            assert_eq!(Action::parse(action.as_str()), Some(action));
        }
        assert_eq!(Action::parse("explain"), None);
    }
}
