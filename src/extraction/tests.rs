use super::*;

struct CountingEntry {
    calls: usize,
    reply: Option<&'static str>,
}

impl CountingEntry {
    fn new(reply: Option<&'static str>) -> Self {
        Self { calls: 0, reply }
    }
}

impl ManualEntry for CountingEntry {
    fn request_code(&mut self) -> Option<String> {
        self.calls += 1;
        self.reply.map(String::from)
    }
}

#[test]
fn monaco_lines_join_with_newlines() {
    let html = r#"
        <div class="monaco-editor">
          <div class="view-lines">
            <div class="view-line">def main():</div>
            <div class="view-line">    pass</div>
          </div>
        </div>"#;
    let mut entry = CountingEntry::new(None);
    let extracted = extract_code(html, &mut entry);

    assert_eq!(extracted.text, "def main():\n    pass");
    assert_eq!(extracted.language, Language::Python);
    assert_eq!(entry.calls, 0);
}

#[test]
fn codemirror_lines_join_with_newlines() {
    let html = r#"
        <div class="CodeMirror-code">
          <pre class="CodeMirror-line">const x = 1;</pre>
          <pre class="CodeMirror-line">const y = 2;</pre>
        </div>"#;
    let mut entry = CountingEntry::new(None);
    let extracted = extract_code(html, &mut entry);

    assert_eq!(extracted.text, "const x = 1;\nconst y = 2;");
    assert_eq!(extracted.language, Language::JavaScript);
}

#[test]
fn textarea_value_is_read() {
    let html = r#"<form><textarea name="code">print('hi')</textarea></form>"#;
    let mut entry = CountingEntry::new(None);
    let extracted = extract_code(html, &mut entry);

    assert_eq!(extracted.text, "print('hi')");
}

#[test]
fn generic_code_block_uses_rendered_text() {
    let html = "<pre><code>#include &lt;iostream&gt;</code></pre>";
    let mut entry = CountingEntry::new(None);
    let extracted = extract_code(html, &mut entry);

    assert_eq!(extracted.text, "#include <iostream>");
    assert_eq!(extracted.language, Language::Cpp);
}

#[test]
fn empty_widget_falls_through_to_next_strategy() {
    let html = r#"
        <div class="monaco-editor"><div class="view-lines"></div></div>
        <pre><code>package main
func main() {}</code></pre>"#;
    let mut entry = CountingEntry::new(None);
    let extracted = extract_code(html, &mut entry);

    assert_eq!(extracted.language, Language::Go);
    assert!(extracted.text.contains("package main"));
    assert_eq!(entry.calls, 0);
}

#[test]
fn fallback_invoked_exactly_once_when_no_selector_matches() {
    let mut entry = CountingEntry::new(Some("x = 1"));
    let extracted = extract_code("<p>nothing here</p>", &mut entry);

    assert_eq!(entry.calls, 1);
    assert_eq!(extracted.text, "x = 1");
}

#[test]
fn declined_fallback_yields_empty_text_not_an_error() {
    let mut entry = CountingEntry::new(None);
    let extracted = extract_code("<p>nothing here</p>", &mut entry);

    assert_eq!(entry.calls, 1);
    assert_eq!(extracted.text, "");
    assert_eq!(extracted.language, Language::Unknown);
}

#[test]
fn detection_rules_cover_each_language() {
    let cases = [
        ("def handler(event):\n    return event", Language::Python),
        ("function add(a, b) { return a + b; }", Language::JavaScript),
        ("public class Main { }", Language::Java),
        ("#include <vector>\nint main() {}", Language::Cpp),
        ("package main\n\nfunc main() {}", Language::Go),
        ("SELECT * FROM users;", Language::Unknown),
    ];
    for (code, expected) in cases {
        assert_eq!(Language::detect(code), expected, "for {:?}", code);
    }
}

#[test]
fn detection_precedence_is_rule_order() {
    // Carries both a Python marker and a JavaScript marker; the Python rule
    // comes first in the table.
    let code = "import os\ndef run():\n    pass\nconst ignored = 1";
    assert_eq!(Language::detect(code), Language::Python);
}

#[test]
fn line_count_matches_text() {
    let extracted = ExtractedCode::from_text("a\nb\nc");
    assert_eq!(extracted.line_count(), 3);
}
