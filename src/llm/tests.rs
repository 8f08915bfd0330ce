use super::*;
use crate::config::{ApiProvider, Config};
use crate::prompt::PromptPair;
use serde_json::json;

fn prompt() -> PromptPair {
    PromptPair { system: "be terse".to_string(), user: "review this".to_string() }
}

fn config(provider: ApiProvider, groq: Option<&str>, gemini: Option<&str>) -> Config {
    Config {
        provider,
        groq_key: groq.map(String::from),
        gemini_key: gemini.map(String::from),
    }
}

#[test]
fn groq_wire_shape() {
    let body = serde_json::to_value(groq::request_body(&prompt())).unwrap();
    assert_eq!(body["model"], "llama-3.3-70b-versatile");
    assert_eq!(body["temperature"], 0.7);
    assert_eq!(body["max_tokens"], 2000);
    assert_eq!(
        body["messages"],
        json!([
            { "role": "system", "content": "be terse" },
            { "role": "user", "content": "review this" }
        ])
    );
}

#[test]
fn gemini_wire_shape() {
    let body = serde_json::to_value(gemini::request_body(&prompt())).unwrap();
    assert_eq!(body["contents"][0]["parts"][0]["text"], "be terse\n\nreview this");
    assert_eq!(body["generationConfig"]["temperature"], 0.7);
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 2000);
}

#[test]
fn selected_groq_with_key_uses_groq() {
    let provider = select_provider(&config(ApiProvider::Groq, Some("gk"), None)).unwrap();
    assert_eq!(provider.name(), "groq");
}

#[test]
fn missing_groq_key_falls_back_to_gemini() {
    let provider = select_provider(&config(ApiProvider::Groq, None, Some("mk"))).unwrap();
    assert_eq!(provider.name(), "gemini");
}

#[test]
fn selected_gemini_with_key_uses_gemini() {
    let provider = select_provider(&config(ApiProvider::Gemini, Some("gk"), Some("mk"))).unwrap();
    assert_eq!(provider.name(), "gemini");
}

#[test]
fn no_usable_credential_is_a_config_error() {
    assert!(select_provider(&config(ApiProvider::Gemini, Some("gk"), None)).is_err());
    assert!(select_provider(&config(ApiProvider::Groq, None, None)).is_err());
}

#[test]
fn provider_error_message_is_surfaced_verbatim() {
    let body = r#"{"error": {"message": "Rate limit reached"}}"#;
    assert_eq!(error_message(body, "Groq API error"), "Rate limit reached");
}

#[test]
fn unparsable_error_body_uses_generic_fallback() {
    assert_eq!(error_message("<html>502</html>", "Gemini API error"), "Gemini API error");
    assert_eq!(error_message(r#"{"detail": "?"}"#, "Groq API error"), "Groq API error");
}
