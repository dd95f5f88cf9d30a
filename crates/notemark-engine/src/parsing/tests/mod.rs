//! Block parser tests.
//!
//! Rendered markup is pinned with inline `insta` snapshots; structure is
//! checked with plain equality where the exact tree matters.

use insta::{assert_debug_snapshot, assert_snapshot};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::models::{Block, Document, Inline, ListItem};
use crate::parsing::{parse, render_inline, render_markdown};

#[test]
fn heading_and_paragraph() {
    assert_snapshot!(
        render_markdown("# Title\n\nSome *text* here."),
        @"<h1>Title</h1><p>Some <em>text</em> here.</p>"
    );
}

/// Test that task markers are split off at parse time.
#[test]
fn task_list_parses_checkbox_state() {
    assert_debug_snapshot!(parse("- [x] buy milk\n- [ ] walk dog"), @r#"
    Document {
        blocks: [
            List {
                ordered: false,
                start: 1,
                items: [
                    Task {
                        checked: true,
                        content: [
                            Text(
                                "buy milk",
                            ),
                        ],
                    },
                    Task {
                        checked: false,
                        content: [
                            Text(
                                "walk dog",
                            ),
                        ],
                    },
                ],
            },
        ],
    }
    "#);
}

#[test]
fn task_list_serializes_checkbox_state() {
    assert_snapshot!(
        render_markdown("- [x] buy milk\n- [ ] walk dog"),
        @r#"<ul><li class="task-item"><input type="checkbox" checked disabled> buy milk</li><li class="task-item"><input type="checkbox" disabled> walk dog</li></ul>"#
    );
}

/// Test that more than six `#` still gives a level-6 heading.
#[test]
fn heading_level_is_clamped() {
    assert_eq!(
        parse("####### Too many"),
        Document::new(vec![Block::heading(6, vec![Inline::text("Too many")])])
    );
}

/// Test that fenced content is escaped but never inline-parsed.
#[test]
fn fence_content_is_verbatim() {
    assert_snapshot!(
        render_markdown("```\n**not bold** <b>\n```"),
        @"<pre><code>**not bold** &lt;b&gt;</code></pre>"
    );
}

#[test]
fn unterminated_fence_runs_to_end() {
    assert_eq!(
        render_markdown("```rust\nlet x = 1;\n# not a heading"),
        "<pre><code class=\"language-rust\">let x = 1;\n# not a heading</code></pre>"
    );
}

#[test]
fn blockquote_lines_and_paragraphs() {
    assert_snapshot!(
        render_markdown("> one\n> two\n>\n>\n> three"),
        @"<blockquote><p>one<br>two</p><p>three</p></blockquote>"
    );
}

#[rstest]
#[case(">", "")]
#[case(">\n>   \n>", "")]
#[case("a\n>\nb", "<p>a</p><p>b</p>")]
fn bare_quote_markers_quote_nothing(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(render_markdown(input), expected);
}

/// Test that quotes do not nest: the inner marker is literal text.
#[test]
fn nested_quote_marker_is_literal() {
    assert_snapshot!(
        render_markdown("> > deep"),
        @"<blockquote><p>&gt; deep</p></blockquote>"
    );
}

#[test]
fn list_continuation_lines_fold_into_item() {
    assert_snapshot!(
        render_markdown("- first\n  continued\n- second"),
        @"<ul><li>first<br>continued</li><li>second</li></ul>"
    );
}

#[rstest]
#[case("- a\n* b\n+ c", "<ul><li>a</li><li>b</li><li>c</li></ul>")]
#[case("- a\n1. b", "<ul><li>a</li></ul><ol><li>b</li></ol>")]
#[case("1. a\n2) b", "<ol><li>a</li><li>b</li></ol>")]
#[case("3. c\n4. d", "<ol start=\"3\"><li>c</li><li>d</li></ol>")]
#[case("- a\n\n- b", "<ul><li>a</li></ul><ul><li>b</li></ul>")]
#[case("- a\n# h", "<ul><li>a</li></ul><h1>h</h1>")]
fn list_family_boundaries(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(render_markdown(input), expected);
}

#[rstest]
#[case("a\nb", "<p>a<br>b</p>")]
#[case("a\n\n\n\nb", "<p>a</p><p>b</p>")]
#[case("para\n# H", "<p>para</p><h1>H</h1>")]
#[case("a\n\n---\n\nb", "<p>a</p><hr><p>b</p>")]
#[case("# A\r\nb", "<h1>A</h1><p>b</p>")]
#[case("  indented  \n", "<p>indented</p>")]
fn paragraph_boundaries(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(render_markdown(input), expected);
}

#[test]
fn plain_text_is_escaped() {
    assert_snapshot!(
        render_markdown("<script>alert(1)</script>"),
        @"<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>"
    );
}

/// Test empty input produces no blocks.
#[test]
fn empty_document() {
    assert!(parse("").is_empty());
    assert_eq!(render_markdown(""), "");
}

/// Test blank lines don't produce blocks.
#[test]
fn blank_lines_only() {
    assert!(parse("\n \n\t\n").is_empty());
}

#[test]
fn list_items_are_inline_parsed() {
    assert_eq!(
        parse("- [ ] call `mom`"),
        Document::new(vec![Block::unordered(vec![ListItem::Task {
            checked: false,
            content: vec![Inline::text("call "), Inline::Code("mom".into())],
        }])])
    );
}

#[rstest]
#[case("**a~~b~~c**", "<strong>a~~b~~c</strong>")]
#[case("`<b>`", "<code>&lt;b&gt;</code>")]
#[case("[a & b](https://x.test/?q=1&r=2)", "<a href=\"https://x.test/?q=1&amp;r=2\">a &amp; b</a>")]
#[case(
    "see [`cargo`](https://doc.rust-lang.org) now",
    "see <a href=\"https://doc.rust-lang.org\">cargo</a> now"
)]
#[case("a * b", "a * b")]
#[case("*a* & **b**", "<em>a</em> &amp; <strong>b</strong>")]
fn inline_rendering(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(render_inline(line), expected);
}
