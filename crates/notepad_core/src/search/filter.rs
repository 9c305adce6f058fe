//! Case-insensitive substring filter over note title and content.
//!
//! # Invariants
//! - Filtering never reorders notes.
//! - A blank filter (after trimming) matches every note.

use crate::model::note::Note;

/// Normalizes raw filter input: trims surrounding whitespace and lowercases.
pub fn normalize_query(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Returns whether `note` matches an already-normalized query.
pub fn note_matches(note: &Note, normalized: &str) -> bool {
    normalized.is_empty()
        || note.title.to_lowercase().contains(normalized)
        || note.content.to_lowercase().contains(normalized)
}

/// Returns copies of the notes whose title or content contains `text`.
pub fn filter_notes(notes: &[Note], text: &str) -> Vec<Note> {
    let normalized = normalize_query(text);
    if normalized.is_empty() {
        return notes.to_vec();
    }
    notes
        .iter()
        .filter(|note| note_matches(note, &normalized))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{normalize_query, note_matches};
    use crate::model::note::Note;

    #[test]
    fn normalize_query_trims_and_lowercases() {
        assert_eq!(normalize_query("  WoRk \n"), "work");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn note_matches_checks_content_as_well_as_title() {
        let note = Note::new(1, "Groceries", "Buy OAT milk", "2026-01-01T00:00:00.000Z");
        assert!(note_matches(&note, "oat"));
        assert!(note_matches(&note, "grocer"));
        assert!(!note_matches(&note, "work"));
    }
}
