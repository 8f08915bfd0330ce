//! Keyword-based source-language detection.
//!
//! A fixed ordered list of substring rules evaluated against the lower-cased
//! text; the first matching rule wins and ties break by rule order. This is a
//! best-effort heuristic, not a parser.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    Python,
    JavaScript,
    Java,
    Cpp,
    Go,
    Unknown,
}

type Matcher = fn(&str) -> bool;

fn python(code: &str) -> bool {
    code.contains("def ") || (code.contains("import ") && code.contains(':'))
}

fn javascript(code: &str) -> bool {
    code.contains("function") || code.contains("const ") || code.contains("let ")
}

fn java(code: &str) -> bool {
    code.contains("public class") || code.contains("system.out")
}

fn cpp(code: &str) -> bool {
    code.contains("#include") || code.contains("cout")
}

fn go(code: &str) -> bool {
    code.contains("func ") && code.contains("package main")
}

const RULES: &[(Language, Matcher)] = &[
    (Language::Python, python),
    (Language::JavaScript, javascript),
    (Language::Java, java),
    (Language::Cpp, cpp),
    (Language::Go, go),
];

impl Language {
    pub fn detect(code: &str) -> Self {
        let code = code.to_lowercase();
        for (language, matches) in RULES {
            if matches(&code) {
                return *language;
            }
        }
        Language::Unknown
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::Go => "Go",
            Language::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}
