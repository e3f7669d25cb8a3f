use contract_review::enums::merge_strategy::MergeStrategy;
use contract_review::errors::ReviewError;
use contract_review::services::diff_engine::DiffEngine;
use contract_review::services::merge_applier::MergeApplier;
use contract_review::structs::change::Change;

fn approve_all(original: &str, modified: &str) -> Vec<Change> {
    DiffEngine::default().compute_changes(original, modified)
}

#[test]
fn approved_modification_is_merged() {
    let approved = approve_all("A\nB\nC", "A\nX\nC");
    let outcome = MergeApplier::default().apply_changes("A\nB\nC", &approved).unwrap();
    assert_eq!(outcome.text, "A\nX\nC");
    assert!(outcome.is_clean());
    assert_eq!(outcome.applied, 1);
}

#[test]
fn approved_addition_is_appended() {
    let approved = approve_all("A\nB", "A\nB\nC");
    let outcome = MergeApplier::default().apply_changes("A\nB", &approved).unwrap();
    assert_eq!(outcome.text, "A\nB\nC");
}

#[test]
fn positional_removal_leaves_a_blank_line() {
    let approved = approve_all("A\nB\nC", "A\nC");
    let outcome = MergeApplier::default().apply_changes("A\nB\nC", &approved).unwrap();
    assert_eq!(outcome.text, "A\nC\n");
}

#[test]
fn nothing_approved_returns_original() {
    let outcome = MergeApplier::default().apply_changes("A\r\nB", &[]).unwrap();
    assert_eq!(outcome.text, "A\r\nB");
    assert_eq!(outcome.applied, 0);
}

#[test]
fn original_line_ending_is_kept() {
    let approved = approve_all("A\r\nB", "A\nX");
    let outcome = MergeApplier::default().apply_changes("A\r\nB", &approved).unwrap();
    assert_eq!(outcome.text, "A\r\nX");
}

#[test]
fn stale_span_is_reported_or_refused() {
    let approved = approve_all("Net 30 days", "Net 45 days");

    let lenient = MergeApplier::new(MergeStrategy::Spliced, false)
        .apply_changes("Net 60 days", &approved)
        .unwrap();
    assert_eq!(lenient.text, "Net 60 days");
    assert_eq!(lenient.unapplied.len(), 1);
    assert_eq!(lenient.unapplied[0].change_id, "change-0");

    let strict = MergeApplier::new(MergeStrategy::Spliced, true).apply_changes("Net 60 days", &approved);
    assert!(matches!(strict, Err(ReviewError::UnappliedSpan { .. })));
}

#[test]
fn spliced_merge_rebuilds_the_edited_contract() {
    let original = "The Supplier shall deliver the goods.\nPrice: 100 EUR\nTerm: 12 months";
    let modified = "The Vendor shall deliver the goods promptly.\nPrice: 120 EUR\nTerm: 12 months\nLaw: Dutch";
    let approved = approve_all(original, modified);

    let outcome = MergeApplier::new(MergeStrategy::Spliced, true).apply_changes(original, &approved).unwrap();
    assert_eq!(outcome.text, modified);
    assert_eq!(outcome.applied, 3);
}
