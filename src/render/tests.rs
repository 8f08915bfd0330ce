use super::*;
use crate::prompt::Action;

#[test]
fn headings_convert_by_depth() {
    let html = render_markdown("# Title\n## Section\n### Sub");
    assert!(html.contains("<h2>Title</h2>"));
    assert!(html.contains("<h3>Section</h3>"));
    assert!(html.contains("<h4>Sub</h4>"));
}

#[test]
fn code_blocks_run_before_inline_emphasis() {
    let order = markdown::stage_order();
    let position = |name| order.iter().position(|stage| *stage == name).unwrap();
    assert!(position("code_blocks") < position("inline_code"));
    assert!(position("code_blocks") < position("bold"));
    assert!(position("unordered_items") < position("list_wrap"));
}

#[test]
fn fenced_script_is_escaped_to_inert_text() {
    let html = render_markdown("```html\n<script>alert('x')</script>\n```");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(html.contains(r#"<div class="code-block">"#));
    assert!(html.contains("copy-btn"));
}

#[test]
fn inline_code_and_emphasis_convert() {
    let html = render_markdown("use `map` for **speed** and *clarity*");
    assert!(html.contains("<code>map</code>"));
    assert!(html.contains("<strong>speed</strong>"));
    assert!(html.contains("<em>clarity</em>"));
}

#[test]
fn one_contiguous_list_run_is_wrapped() {
    let html = render_markdown("- first\n- second");
    assert!(html.starts_with("<ul><li>first</li>"));
    assert!(html.ends_with("<li>second</li></ul>"));
}

#[test]
fn ordered_items_become_list_items() {
    let html = render_markdown("1. alpha\n2. beta");
    assert!(html.contains("<li>alpha</li>"));
    assert!(html.contains("<li>beta</li>"));
}

#[test]
fn blank_lines_break_paragraphs() {
    let html = render_markdown("hello\n\nworld");
    assert_eq!(html, "<p>hello</p><p>world</p>");
}

#[test]
fn escape_html_covers_specials() {
    assert_eq!(escape_html(r#"<a href="x">&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;");
}

#[test]
fn rate_reply_renders_amber_score_and_metric_card() {
    let html = render_response("## Overall Score: 72/100\n### Correctness (18/25)", Action::Rate);
    assert!(html.contains(r#"<div class="score-card""#));
    assert!(html.contains("72/100"));
    assert!(html.contains("#ffc107"));
    assert!(html.contains(r#"<div class="metric-label">Correctness</div>"#));
    assert!(html.contains(r#"<div class="metric-value">18/25</div>"#));
}

#[test]
fn high_and_low_scores_pick_their_tiers() {
    let green = render_response("## Overall Score: 85/100", Action::Rate);
    assert!(green.contains("#28a745"));

    let red = render_response("## Overall Score: 41/100", Action::Rate);
    assert!(red.contains("#dc3545"));
}

#[test]
fn metric_grid_lands_after_the_breakdown_heading() {
    let reply = "## Overall Score: 90/100\n\n## Breakdown\n### Code Quality (22/25)";
    let html = render_response(reply, Action::Rate);
    let breakdown = html.find("<h3>Breakdown</h3>").unwrap();
    let grid = html.find(r#"<div class="metric-grid">"#).unwrap();
    assert!(grid > breakdown);
    assert!(html.contains("22/25"));
}

#[test]
fn error_items_become_severity_tagged_cards() {
    let html = render_response("- Critical: null dereference on line 3\n- Variable name could be clearer", Action::Errors);
    assert!(html.contains(r#"<div class="issue-card error">"#));
    assert!(html.contains(r#"<div class="issue-card warning">"#));
    assert!(html.contains("⚠️ Issue Found"));
}

#[test]
fn optimization_tips_wrap_strategy_and_practice_runs() {
    let reply = "## Optimization Strategies\n### Memoization strategy\nCache results.\n### History\nNothing relevant.";
    let html = render_response(reply, Action::Optimize);

    assert_eq!(html.matches(r#"<div class="optimization-tip">"#).count(), 1);
    assert!(html.contains("💡 Optimization Tip"));
    // The unrelated run stays unwrapped.
    assert!(!html.contains(r#"<div class="optimization-tip"><div class="tip-title">💡 Optimization Tip</div><h4>History"#));
}

#[test]
fn logic_replies_get_no_enhancement_pass() {
    let html = render_response("# Plan", Action::Logic);
    assert_eq!(html, "<h2>Plan</h2>");
}

#[test]
fn plain_text_is_wrapped_in_a_paragraph() {
    assert_eq!(render_markdown("just words"), "<p>just words</p>");
}
