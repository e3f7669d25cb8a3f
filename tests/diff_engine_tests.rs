use contract_review::enums::change_status::ChangeStatus;
use contract_review::enums::change_type::ChangeType;
use contract_review::enums::line_diff::LineDiff;
use contract_review::services::diff_engine::DiffEngine;

#[test]
fn modified_middle_line_is_one_replacement() {
    let changes = DiffEngine::default().compute_changes("A\nB\nC", "A\nX\nC");

    assert_eq!(changes.len(), 1);
    let change = &changes[0];
    assert_eq!(change.id, "change-0");
    assert_eq!(change.change_type, ChangeType::Modification);
    assert_eq!(change.line_number, 2);
    assert_eq!(change.status, ChangeStatus::Pending);
    assert_eq!(change.line_diffs, vec![LineDiff::replaced("B", "X")]);
}

#[test]
fn appended_line_is_an_addition() {
    let changes = DiffEngine::default().compute_changes("A\nB", "A\nB\nC");

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].change_type, ChangeType::Addition);
    assert_eq!(changes[0].line_number, 3);
    assert_eq!(changes[0].text, "C");
    assert_eq!(changes[0].line_diffs, vec![LineDiff::inserted("C")]);
}

#[test]
fn removed_line_is_seen_positionally() {
    let changes = DiffEngine::default().compute_changes("A\nB\nC", "A\nC");

    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].change_type, ChangeType::Modification);
    assert_eq!(changes[0].line_number, 2);
    assert_eq!(changes[0].old_text, "B");
    assert_eq!(changes[0].text, "C");
    assert_eq!(changes[1].change_type, ChangeType::Deletion);
    assert_eq!(changes[1].line_number, 3);
    assert_eq!(changes[1].line_diffs, vec![LineDiff::removed("C")]);
}

#[test]
fn word_edit_keeps_surrounding_text() {
    let changes = DiffEngine::default().compute_changes(
        "Payment is due within 30 days of invoice.",
        "Payment is due within 45 days of invoice.",
    );

    assert_eq!(changes.len(), 1);
    let spans = &changes[0].line_diffs;
    assert!(matches!(spans.first(), Some(LineDiff::Unchanged { .. })));
    assert!(matches!(spans.last(), Some(LineDiff::Unchanged { .. })));
    assert!(spans.iter().any(|span| matches!(span, LineDiff::Replaced { .. })));

    let old: String = spans.iter().map(LineDiff::old_text).collect();
    let new: String = spans.iter().map(LineDiff::new_text).collect();
    assert_eq!(old, "Payment is due within 30 days of invoice.");
    assert_eq!(new, "Payment is due within 45 days of invoice.");
}

#[test]
fn crlf_input_matches_lf_input() {
    let engine = DiffEngine::default();
    assert!(engine.compute_changes("A\r\nB", "A\nB").is_empty());
    assert_eq!(
        engine.compute_changes("A\r\nB\r\n", "A\nX\n"),
        engine.compute_changes("A\nB\n", "A\nX\n"),
    );
}

#[test]
fn ids_follow_emission_order() {
    let changes = DiffEngine::default().compute_changes("1\n2\n3\n4", "1\ntwo\n3\nfour\n5");
    let ids: Vec<&str> = changes.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["change-0", "change-1", "change-2"]);
    let lines: Vec<usize> = changes.iter().map(|c| c.line_number).collect();
    assert_eq!(lines, vec![2, 4, 5]);
}
