use crate::parsing::blocks::kinds::{FenceKind, ListMarker, TaskMarker};
use crate::parsing::blocks::{LineClass, MarkdownLineClassifier};

/// A structured block a whole line of text stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockMatch {
    Heading {
        level: u8,
        text: String,
    },
    Quote(String),
    Item {
        ordered: bool,
        start: u64,
        /// `Some(checked)` when the text opened with a checkbox marker.
        task: Option<bool>,
        text: String,
    },
    Rule,
    Fence {
        kind: FenceKind,
        info: Option<String>,
    },
}

/// Tests a full line against the block patterns, in the block parser's
/// order. Headings and quotes need some text after the marker; list
/// items may be empty.
pub fn match_line(line: &str) -> Option<BlockMatch> {
    match MarkdownLineClassifier.classify(line) {
        LineClass::Blank | LineClass::Text(_) => None,
        LineClass::Fence(open) => Some(BlockMatch::Fence {
            kind: open.kind,
            info: open.info,
        }),
        LineClass::Heading { level, text } => (!text.is_empty()).then(|| BlockMatch::Heading {
            level: level as u8,
            text: text.to_string(),
        }),
        LineClass::Rule => Some(BlockMatch::Rule),
        LineClass::Quote(text) => {
            let text = text.trim();
            (!text.is_empty()).then(|| BlockMatch::Quote(text.to_string()))
        }
        LineClass::Item { marker, text } => {
            let (task, text) = split_task(text);
            Some(BlockMatch::Item {
                ordered: marker.is_ordered(),
                start: match marker {
                    ListMarker::Ordered(n) => n,
                    ListMarker::Bullet(_) => 1,
                },
                task,
                text: text.trim().to_string(),
            })
        }
    }
}

/// Like [`TaskMarker::split`], also accepting a bare `[ ]`/`[x]` with
/// nothing after it: the line was ended right after the box.
fn split_task(text: &str) -> (Option<bool>, &str) {
    if let Some((checked, rest)) = TaskMarker::split(text) {
        return (Some(checked), rest);
    }
    match text.trim_end() {
        "[ ]" => (Some(false), ""),
        "[x]" | "[X]" => (Some(true), ""),
        _ => (None, text),
    }
}
