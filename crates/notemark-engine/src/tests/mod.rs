//! Shared test helpers and end-to-end checks across the display, save and
//! editing paths.

use pretty_assertions::assert_eq;

use crate::{DocumentMode, EditSession, normalize_for_save, render_for_display};

/// Routes `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn typed_note_survives_save_and_reload() {
    init_logging();
    let mut session = EditSession::open("", DocumentMode::default());
    session.insert_text("# Trip\n- [ ] tickets\npassport\n\nsee `notes.txt`");

    let saved = session.save_markup();
    assert_eq!(
        saved,
        "<h1>Trip</h1><ul><li class=\"task-item\"><input type=\"checkbox\" disabled> tickets</li>\
         <li class=\"task-item\"><input type=\"checkbox\" disabled> passport</li></ul>\
         <p>see <code>notes.txt</code></p>"
    );
    assert_eq!(render_for_display(&saved), saved);

    let reopened = EditSession::open(&saved, DocumentMode::default());
    assert_eq!(reopened.serialize(), saved);
}

#[test]
fn legacy_plain_note_becomes_markup_on_save() {
    init_logging();
    let stored = "<div>- milk</div><div>- eggs</div>";
    let saved = normalize_for_save(stored);
    assert_eq!(saved, "<ul><li>milk</li><li>eggs</li></ul>");
    assert_eq!(normalize_for_save(&saved), saved);
}
