use std::fmt::Write;

use wordup_types::ViewSnapshot;

const TITLE: &str = "Word Up";

/// Draw one frame as plain text
pub fn render(view: &ViewSnapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "== {TITLE} ==");
    let _ = writeln!(out, "Search: {}", view.search_term);
    if let Some(error) = &view.error {
        let _ = writeln!(out, "! {error}");
    }
    if view.loading {
        let _ = writeln!(out, "Searching...");
    }

    // Word panel only shows once something was found
    if !view.word.word.is_empty() {
        let word = &view.word;
        let _ = writeln!(out);
        let _ = writeln!(out, "Word: {}", word.word);
        let _ = writeln!(out, "Part of Speech: {}", word.part_of_speech);
        let _ = writeln!(out, "Definition: {}", word.definition);
        let _ = writeln!(out, "Examples:");
        if word.examples.is_empty() {
            let _ = writeln!(out, "  - No examples available.");
        }
        for example in &word.examples {
            let _ = writeln!(out, "  - {example}");
        }
        let _ = writeln!(out, "Synonyms: {}", word.synonyms.join(", "));
    }

    let _ = writeln!(out);
    if view.drawer.is_open() {
        let _ = writeln!(out, "-- Search History --");
        for entry in &view.history {
            let _ = writeln!(out, "  {}  ({})", entry.term, entry.date);
        }
    } else {
        let _ = writeln!(out, "[History hidden, `toggle` to show]");
    }

    out
}
