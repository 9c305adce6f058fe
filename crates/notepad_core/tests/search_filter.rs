use notepad_core::{filter_notes, Note};

fn titled(id: i64, title: &str, content: &str) -> Note {
    Note::new(id, title, content, "2026-10-16T00:00:00.000Z")
}

#[test]
fn filter_matches_title_case_insensitively() {
    let notes = vec![titled(1, "Groceries", ""), titled(2, "Work", "")];

    let filtered = filter_notes(&notes, "work");
    assert_eq!(filtered, vec![titled(2, "Work", "")]);
}

#[test]
fn empty_or_blank_filter_returns_all_in_order() {
    let notes = vec![titled(3, "c", ""), titled(1, "a", ""), titled(2, "b", "")];

    assert_eq!(filter_notes(&notes, ""), notes);
    assert_eq!(filter_notes(&notes, "   "), notes);
}

#[test]
fn filter_trims_input_and_searches_content() {
    let notes = vec![
        titled(1, "Monday", "call the PLUMBER"),
        titled(2, "Tuesday", "nothing"),
        titled(3, "Plumbing receipts", ""),
    ];

    let ids: Vec<i64> = filter_notes(&notes, "  plumb ").iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn filter_matching_nothing_returns_empty() {
    let notes = vec![titled(1, "Groceries", "milk")];
    assert!(filter_notes(&notes, "zebra").is_empty());
}
