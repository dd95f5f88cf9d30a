use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::invariants::check;
use super::*;
use crate::tests::init_logging;

fn session(stored: &str) -> EditSession {
    init_logging();
    EditSession::open(stored, DocumentMode::default())
}

/// Types `text` and checks the tree after every event; returns the outcome
/// of the last one.
fn type_text(s: &mut EditSession, text: &str) -> Outcome {
    let mut last = Outcome::Ignored;
    for c in text.chars() {
        last = s.insert_char(c);
        if let Err(violation) = check(s) {
            panic!("after {c:?}: {violation}");
        }
    }
    last
}

fn enter(s: &mut EditSession) -> Outcome {
    let outcome = s.insert_line_break();
    if let Err(violation) = check(s) {
        panic!("after line break: {violation}");
    }
    outcome
}

#[test]
fn open_empty_gives_one_empty_line() {
    let s = session("");
    check(&s).unwrap();
    assert_eq!(s.serialize(), "");
    assert_eq!(s.tree().text(s.caret().node), Some(""));
}

#[test]
fn open_places_caret_at_end_of_last_text() {
    let s = session("<p>one</p><p>two <em>three</em></p>");
    check(&s).unwrap();
    assert_eq!(s.tree().text(s.caret().node), Some("three"));
    assert_eq!(s.caret().offset, 5);
}

#[test]
fn open_after_rule_adds_a_line() {
    let s = session("<p>a</p><hr>");
    check(&s).unwrap();
    assert_eq!(s.tree().text(s.caret().node), Some(""));
    assert_eq!(s.serialize(), "<p>a</p><hr>");
}

#[test]
fn open_plain_markdown_text() {
    let s = session("- [ ] call mom\n- [x] pay rent");
    assert_eq!(s.tree().task_items().len(), 2);
}

#[test]
fn plain_typing_is_inserted() {
    let mut s = session("");
    assert_eq!(type_text(&mut s, "hello"), Outcome::Inserted);
    assert_eq!(s.serialize(), "<p>hello</p>");
}

#[rstest]
#[case("hello **world**", Promotion::Strong, "<p>hello <strong>world</strong></p>")]
#[case("__x__", Promotion::Strong, "<p><strong>x</strong></p>")]
#[case("a ~~b~~", Promotion::Strikethrough, "<p>a <s>b</s></p>")]
#[case("run `ls`", Promotion::Code, "<p>run <code>ls</code></p>")]
#[case("so *very*", Promotion::Emphasis, "<p>so <em>very</em></p>")]
#[case("so _very_", Promotion::Emphasis, "<p>so <em>very</em></p>")]
fn inline_promotion(#[case] typed: &str, #[case] promotion: Promotion, #[case] markup: &str) {
    let mut s = session("");
    assert_eq!(type_text(&mut s, typed), Outcome::Promoted(promotion));
    assert_eq!(s.serialize(), markup);
}

#[test]
fn caret_continues_after_promoted_span() {
    let mut s = session("");
    type_text(&mut s, "a **b**");
    assert_eq!(s.tree().text(s.caret().node), Some(""));
    type_text(&mut s, " c");
    assert_eq!(s.serialize(), "<p>a <strong>b</strong> c</p>");
}

#[test]
fn line_with_structure_is_not_promoted_again() {
    let mut s = session("");
    type_text(&mut s, "**a** and *b");
    assert_eq!(type_text(&mut s, "*"), Outcome::Inserted);
    assert_eq!(s.serialize(), "<p><strong>a</strong> and *b*</p>");
}

/// Typing `*` to close `*word*` on a line that already holds a link
/// leaves the delimiters as text.
#[test]
fn simple_line_guard_with_link() {
    let mut s = session("<p>see <a href=\"https://x.test\">x</a> and *word</p>");
    assert_eq!(s.insert_char('*'), Outcome::Inserted);
    check(&s).unwrap();
    assert_snapshot!(
        s.serialize(),
        @r#"<p>see <a href="https://x.test">x</a> and *word*</p>"#
    );
}

#[test]
fn caret_mid_text_is_not_promoted() {
    let mut s = session("<p>*word tail</p>");
    let leaf = s.caret().node;
    s.set_caret(Caret {
        node: leaf,
        offset: 5,
    })
    .unwrap();
    assert_eq!(s.insert_char('*'), Outcome::Inserted);
    assert_eq!(s.serialize(), "<p>*word* tail</p>");
}

#[rstest]
#[case("**a*")]
#[case("snake_case_")]
#[case("2 * 3 *")]
#[case("~a~")]
fn unmatched_delimiters_stay_text(#[case] typed: &str) {
    let mut s = session("");
    assert_eq!(type_text(&mut s, typed), Outcome::Inserted);
    assert_eq!(s.serialize(), format!("<p>{typed}</p>"));
}

#[test]
fn inline_promotion_can_be_disabled() {
    init_logging();
    let mode = DocumentMode {
        inline_promotion: false,
        ..DocumentMode::default()
    };
    let mut s = EditSession::open("", mode);
    assert_eq!(type_text(&mut s, "**x**"), Outcome::Inserted);
    assert_eq!(s.serialize(), "<p>**x**</p>");
}

#[test]
fn heading_promotion() {
    let mut s = session("");
    type_text(&mut s, "## Plan");
    assert_eq!(enter(&mut s), Outcome::Promoted(Promotion::Heading(2)));
    type_text(&mut s, "body");
    assert_eq!(s.serialize(), "<h2>Plan</h2><p>body</p>");
}

#[test]
fn heading_level_is_clamped_when_promoted() {
    let mut s = session("");
    type_text(&mut s, "####### Deep");
    assert_eq!(enter(&mut s), Outcome::Promoted(Promotion::Heading(6)));
}

#[test]
fn task_list_promotion_and_continuation() {
    let mut s = session("");
    type_text(&mut s, "- [x] milk");
    assert_eq!(
        enter(&mut s),
        Outcome::Promoted(Promotion::ListItem {
            ordered: false,
            task: true
        })
    );
    type_text(&mut s, "eggs");
    assert_eq!(enter(&mut s), Outcome::Promoted(Promotion::ListContinued));
    assert_eq!(enter(&mut s), Outcome::Promoted(Promotion::ListExited));
    type_text(&mut s, "after");
    assert_snapshot!(
        s.serialize(),
        @r#"<ul><li class="task-item"><input type="checkbox" checked disabled> milk</li><li class="task-item"><input type="checkbox" disabled> eggs</li></ul><p>after</p>"#
    );
}

#[test]
fn checkbox_mode_makes_task_items() {
    init_logging();
    let mut s = EditSession::open("", DocumentMode::default());
    s.set_checkbox_mode(true);
    type_text(&mut s, "- milk");
    assert_eq!(
        enter(&mut s),
        Outcome::Promoted(Promotion::ListItem {
            ordered: false,
            task: true
        })
    );
    type_text(&mut s, "eggs");
    assert_eq!(
        s.serialize(),
        "<ul><li class=\"task-item\"><input type=\"checkbox\" disabled> milk</li>\
         <li class=\"task-item\"><input type=\"checkbox\" disabled> eggs</li></ul>"
    );
}

#[test]
fn checkbox_mode_does_not_affect_ordered_lists() {
    init_logging();
    let mode = DocumentMode {
        checkbox_mode: true,
        ..DocumentMode::default()
    };
    let mut s = EditSession::open("", mode);
    type_text(&mut s, "1. first");
    assert_eq!(
        enter(&mut s),
        Outcome::Promoted(Promotion::ListItem {
            ordered: true,
            task: false
        })
    );
}

#[test]
fn ordered_list_keeps_its_start() {
    let mut s = session("");
    type_text(&mut s, "3. c");
    enter(&mut s);
    type_text(&mut s, "d");
    assert_eq!(s.serialize(), "<ol start=\"3\"><li>c</li><li>d</li></ol>");
}

#[test]
fn list_lines_join_the_previous_list() {
    let mut s = session("");
    type_text(&mut s, "- a");
    enter(&mut s);
    enter(&mut s);
    type_text(&mut s, "- b");
    enter(&mut s);
    type_text(&mut s, "c");
    assert_eq!(s.serialize(), "<ul><li>a</li><li>b</li><li>c</li></ul>");
}

#[test]
fn empty_item_promotion_keeps_caret_in_it() {
    let mut s = session("");
    type_text(&mut s, "- ");
    enter(&mut s);
    type_text(&mut s, "x");
    assert_eq!(s.serialize(), "<ul><li>x</li></ul>");
}

#[test]
fn exiting_from_the_middle_of_a_list_splits_it() {
    let mut s = session("1. a\n2. b\n3. c");
    let leaf = s.tree().text_leaves()[1];
    s.set_caret(Caret {
        node: leaf,
        offset: 1,
    })
    .unwrap();
    assert_eq!(enter(&mut s), Outcome::Promoted(Promotion::ListContinued));
    assert_eq!(enter(&mut s), Outcome::Promoted(Promotion::ListExited));
    type_text(&mut s, "gap");
    assert_eq!(
        s.serialize(),
        "<ol><li>a</li><li>b</li></ol><p>gap</p><ol start=\"3\"><li>c</li></ol>"
    );
}

#[test]
fn rule_promotion_opens_a_line_below() {
    let mut s = session("");
    type_text(&mut s, "---");
    assert_eq!(enter(&mut s), Outcome::Promoted(Promotion::HorizontalRule));
    type_text(&mut s, "below");
    assert_eq!(s.serialize(), "<hr><p>below</p>");
}

#[test]
fn star_rule_is_not_emphasis() {
    let mut s = session("");
    assert_eq!(type_text(&mut s, "***"), Outcome::Inserted);
    assert_eq!(enter(&mut s), Outcome::Promoted(Promotion::HorizontalRule));
}

#[test]
fn fence_opens_and_closes_a_code_block() {
    let mut s = session("");
    type_text(&mut s, "```rust");
    assert_eq!(enter(&mut s), Outcome::Promoted(Promotion::CodeBlock));
    assert_eq!(type_text(&mut s, "let x = *p*;"), Outcome::Inserted);
    assert_eq!(enter(&mut s), Outcome::Inserted);
    type_text(&mut s, "# not a heading");
    assert_eq!(enter(&mut s), Outcome::Inserted);
    type_text(&mut s, "```");
    assert_eq!(enter(&mut s), Outcome::Promoted(Promotion::CodeBlockClosed));
    type_text(&mut s, "after");
    assert_eq!(
        s.serialize(),
        "<pre><code class=\"language-rust\">let x = *p*;\n# not a heading</code></pre><p>after</p>"
    );
}

#[test]
fn only_the_opening_fence_kind_closes_a_code_block() {
    let mut s = session("");
    type_text(&mut s, "~~~");
    assert_eq!(enter(&mut s), Outcome::Promoted(Promotion::CodeBlock));
    type_text(&mut s, "x");
    enter(&mut s);
    type_text(&mut s, "```");
    assert_eq!(enter(&mut s), Outcome::Inserted);
    type_text(&mut s, "~~~");
    assert_eq!(enter(&mut s), Outcome::Promoted(Promotion::CodeBlockClosed));

    assert_eq!(s.serialize(), "<pre><code>x\n```</code></pre>");
    assert_eq!(
        s.serialize(),
        crate::parsing::render_markdown("~~~\nx\n```\n~~~")
    );
}

#[test]
fn quote_lines_collect_into_one_quote() {
    let mut s = session("");
    type_text(&mut s, "> a");
    assert_eq!(enter(&mut s), Outcome::Promoted(Promotion::Blockquote));
    type_text(&mut s, "> b");
    assert_eq!(enter(&mut s), Outcome::Promoted(Promotion::Blockquote));
    assert_eq!(
        s.serialize(),
        "<blockquote><p>a</p><p>b</p></blockquote>"
    );
}

#[test]
fn empty_line_in_quote_leaves_it() {
    let mut s = session("<blockquote><p>q</p></blockquote>");
    assert_eq!(enter(&mut s), Outcome::Inserted);
    assert_eq!(enter(&mut s), Outcome::Promoted(Promotion::QuoteExited));
    type_text(&mut s, "out");
    assert_eq!(s.serialize(), "<blockquote><p>q</p></blockquote><p>out</p>");
}

#[test]
fn block_promotion_can_be_disabled() {
    init_logging();
    let mode = DocumentMode {
        block_promotion: false,
        ..DocumentMode::default()
    };
    let mut s = EditSession::open("", mode);
    type_text(&mut s, "# x");
    assert_eq!(enter(&mut s), Outcome::Inserted);
    type_text(&mut s, "y");
    assert_eq!(s.serialize(), "<p># x</p><p>y</p>");
}

#[test]
fn block_promotion_needs_a_simple_line() {
    let mut s = session("<p><em>#</em> x</p>");
    assert_eq!(enter(&mut s), Outcome::Inserted);
    assert_eq!(s.serialize(), "<p><em>#</em> x</p>");
}

#[test]
fn line_break_mid_text_splits_the_line() {
    let mut s = session("hello world");
    let leaf = s.caret().node;
    s.set_caret(Caret {
        node: leaf,
        offset: 5,
    })
    .unwrap();
    assert_eq!(enter(&mut s), Outcome::Inserted);
    assert_eq!(s.serialize(), "<p>hello</p><p> world</p>");
    assert_eq!(s.tree().text(s.caret().node), Some(" world"));
    assert_eq!(s.caret().offset, 0);
}

#[test]
fn line_break_inside_formatting_splits_it() {
    let mut s = session("<p><strong>bold</strong></p>");
    let leaf = s.caret().node;
    s.set_caret(Caret {
        node: leaf,
        offset: 2,
    })
    .unwrap();
    enter(&mut s);
    assert_eq!(
        s.serialize(),
        "<p><strong>bo</strong></p><p><strong>ld</strong></p>"
    );
}

#[test]
fn line_break_after_heading_starts_a_paragraph() {
    let mut s = session("<h1>Title</h1>");
    assert_eq!(enter(&mut s), Outcome::Inserted);
    type_text(&mut s, "text");
    assert_eq!(s.serialize(), "<h1>Title</h1><p>text</p>");
}

#[test]
fn control_characters_are_ignored() {
    let mut s = session("");
    assert_eq!(s.insert_char('\r'), Outcome::Ignored);
    assert_eq!(s.insert_char('\u{7}'), Outcome::Ignored);
    assert_eq!(s.serialize(), "");
}

#[test]
fn apply_replays_events_in_order() {
    let mut s = session("");
    let outcomes: Vec<Outcome> = [Edit::Char('#'), Edit::Char(' '), Edit::Char('T'), Edit::LineBreak]
        .into_iter()
        .map(|e| s.apply(e))
        .collect();
    assert_eq!(outcomes.last(), Some(&Outcome::Promoted(Promotion::Heading(1))));
    assert_eq!(s.serialize(), "<h1>T</h1>");
}

#[test]
fn insert_text_treats_newline_as_line_break() {
    let mut s = session("");
    let outcomes = s.insert_text("# A\nb");
    assert_eq!(outcomes[3], Outcome::Promoted(Promotion::Heading(1)));
    assert_eq!(s.serialize(), "<h1>A</h1><p>b</p>");
}

#[test]
fn set_caret_validates() {
    let mut s = session("<p>é</p><hr>");
    let leaf = s.tree().text_leaves()[0];
    let root = s.tree().root();

    assert_eq!(
        s.set_caret(Caret {
            node: root,
            offset: 0
        }),
        Err(EditError::NotText(root))
    );
    assert_eq!(
        s.set_caret(Caret {
            node: leaf,
            offset: 1
        }),
        Err(EditError::NotCharBoundary(1))
    );
    assert_eq!(
        s.set_caret(Caret {
            node: leaf,
            offset: 3
        }),
        Err(EditError::OffsetOutOfRange { offset: 3, len: 2 })
    );
    assert_eq!(
        s.set_caret(Caret {
            node: NodeId(10_000),
            offset: 0
        }),
        Err(EditError::UnknownNode(NodeId(10_000)))
    );
    assert!(s.set_caret(Caret { node: leaf, offset: 2 }).is_ok());
}

#[test]
fn set_caret_rejects_detached_leaf() {
    let mut s = session("");
    let old = s.caret().node;
    type_text(&mut s, "---");
    enter(&mut s);
    assert_eq!(
        s.set_caret(Caret {
            node: old,
            offset: 0
        }),
        Err(EditError::Detached(old))
    );
}

#[test]
fn toggle_task_flips_checkbox() {
    let mut s = session("- [ ] call mom");
    let item = s.tree().task_items()[0];
    assert_eq!(s.toggle_task(item), Ok(true));
    assert_eq!(
        s.serialize(),
        "<ul><li class=\"task-item\"><input type=\"checkbox\" checked disabled> call mom</li></ul>"
    );
    assert_eq!(s.toggle_task(item), Ok(false));
}

#[test]
fn toggle_task_rejects_other_nodes() {
    let mut s = session("- plain");
    let root = s.tree().root();
    assert_eq!(s.toggle_task(root), Err(EditError::NotTaskItem(root)));
}

#[test]
fn save_markup_is_normalized() {
    let mut s = session("");
    type_text(&mut s, "# Title");
    enter(&mut s);
    type_text(&mut s, "some *text*");
    let saved = s.save_markup();
    assert_eq!(saved, "<h1>Title</h1><p>some <em>text</em></p>");
    assert_eq!(crate::normalize::normalize_for_save(&saved), saved);
}

#[test]
fn sessions_do_not_share_mode() {
    init_logging();
    let mut a = EditSession::open("", DocumentMode::default());
    let b = EditSession::open("", DocumentMode::default());
    a.set_checkbox_mode(true);
    assert!(a.mode().checkbox_mode);
    assert!(!b.mode().checkbox_mode);
}
