use regex::{Captures, Regex};

use crate::models::{Inline, inlines_text};

use super::{
    kinds::{BracketLink, CodeSpan, Emphasis, Strikethrough, Strong},
    placeholder::Placeholders,
};

/// Parses one logical line of raw text into inline nodes.
///
/// Passes run in a fixed precedence order over a working copy of the line,
/// each freezing what it resolves behind a placeholder:
///
/// 1. code spans
/// 2. bracket links with an allowed scheme
/// 3. strong (`**` / `__`)
/// 4. strikethrough (`~~`)
/// 5. single emphasis (`*` / `_`)
///
/// Escaping is not a pass here: [`Inline::Text`] holds raw text and the
/// serializer escapes it on the way out. Anything that does not match stays
/// literal text; malformed inline syntax never fails. Delimiters inside an
/// already-matched span are literal too, because that span is frozen
/// before the next pass runs.
pub fn parse_inline(line: &str) -> Vec<Inline> {
    if line.is_empty() {
        return vec![];
    }
    if Placeholders::collides(line) {
        return vec![Inline::text(line)];
    }

    let mut frozen = Placeholders::default();

    let work = freeze_matches(line, CodeSpan::regex(), &mut frozen, |caps, _| {
        Inline::Code(caps[1].to_string())
    });
    let work = freeze_links(&work, &mut frozen);
    let work = freeze_matches(&work, Strong::regex(), &mut frozen, |caps, frozen| {
        let inner = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        Inline::Strong(frozen.thaw(inner))
    });
    let work = freeze_matches(&work, Strikethrough::regex(), &mut frozen, |caps, frozen| {
        Inline::Strikethrough(frozen.thaw(&caps[1]))
    });
    let work = freeze_emphasis(&work, &mut frozen);

    frozen.thaw(&work)
}

fn freeze_matches(
    work: &str,
    re: &Regex,
    frozen: &mut Placeholders,
    build: impl Fn(&Captures<'_>, &mut Placeholders) -> Inline,
) -> String {
    re.replace_all(work, |caps: &Captures<'_>| {
        let node = build(caps, frozen);
        frozen.freeze(node)
    })
    .into_owned()
}

/// Link labels are plain text, so spans frozen inside a label are thawed
/// back to their text. A URL holding a frozen span is not a link.
fn freeze_links(work: &str, frozen: &mut Placeholders) -> String {
    BracketLink::regex()
        .replace_all(work, |caps: &Captures<'_>| {
            let url = &caps[2];
            if Placeholders::collides(url) {
                return caps[0].to_string();
            }
            let label = inlines_text(&frozen.thaw(&caps[1]));
            frozen.freeze(Inline::Link {
                label,
                url: url.to_string(),
            })
        })
        .into_owned()
}

fn freeze_emphasis(work: &str, frozen: &mut Placeholders) -> String {
    let mut out = String::with_capacity(work.len());
    let mut last = 0;
    while let Some(m) = Emphasis::find(work, last) {
        out.push_str(&work[last..m.full.start]);
        let inner = frozen.thaw(&work[m.inner.clone()]);
        out.push_str(&frozen.freeze(Inline::Emphasis(inner)));
        last = m.full.end;
    }
    out.push_str(&work[last..]);
    out
}
