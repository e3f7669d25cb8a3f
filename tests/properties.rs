use proptest::prelude::*;
use contract_review::enums::change_type::ChangeType;
use contract_review::enums::merge_strategy::MergeStrategy;
use contract_review::services::diff_engine::DiffEngine;
use contract_review::services::merge_applier::MergeApplier;
use contract_review::services::review_ledger::ReviewLedger;

fn lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z ]{0,11}", 1..8)
}

/// Like `lines`, but roughly one line in four is blank.
fn lines_with_blanks() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop_oneof![3 => "[a-z][a-z ]{0,11}", 1 => Just(String::new())], 1..8)
}

proptest! {
    #[test]
    fn identical_documents_have_no_changes(doc in lines()) {
        let text = doc.join("\n");
        prop_assert!(DiffEngine::default().compute_changes(&text, &text).is_empty());
    }

    #[test]
    fn one_appended_line_is_one_addition(doc in lines(), extra in "[a-z]{1,8}") {
        let original = doc.join("\n");
        let modified = format!("{}\n{}", original, extra);
        let changes = DiffEngine::default().compute_changes(&original, &modified);

        prop_assert_eq!(changes.len(), 1);
        prop_assert_eq!(changes[0].change_type, ChangeType::Addition);
        prop_assert_eq!(changes[0].line_number, doc.len() + 1);
    }

    #[test]
    fn dropping_the_last_line_is_one_deletion(doc in prop::collection::vec("[a-z]{1,8}", 2..8)) {
        let original = doc.join("\n");
        let modified = doc[..doc.len() - 1].join("\n");
        let changes = DiffEngine::default().compute_changes(&original, &modified);

        prop_assert_eq!(changes.len(), 1);
        prop_assert_eq!(changes[0].change_type, ChangeType::Deletion);
        prop_assert_eq!(changes[0].line_number, doc.len());
    }

    #[test]
    fn finalize_fails_exactly_while_pending(old in lines(), new in lines(), decided in 0usize..10) {
        let mut ledger = ReviewLedger::new(DiffEngine::default().compute_changes(&old.join("\n"), &new.join("\n")));
        let ids: Vec<String> = ledger.changes().iter().map(|c| c.id.clone()).collect();
        for id in ids.iter().take(decided) {
            ledger.approve(id).unwrap();
        }
        prop_assert_eq!(ledger.finalize().is_err(), decided < ids.len());
    }

    #[test]
    fn approving_everything_rebuilds_the_edit(old in lines_with_blanks(), edits in lines_with_blanks(), tail in prop::collection::vec("[a-z]{1,8}", 0..3)) {
        let mut new: Vec<String> = old.iter().zip(edits.iter().cycle()).map(|(_, e)| e.clone()).collect();
        new.extend(tail);
        let original = old.join("\n");
        let modified = new.join("\n");

        let mut ledger = ReviewLedger::new(DiffEngine::default().compute_changes(&original, &modified));
        ledger.approve_all_pending();
        let approved = ledger.finalize().unwrap();

        let outcome = MergeApplier::new(MergeStrategy::Spliced, true).apply_changes(&original, &approved).unwrap();
        prop_assert_eq!(outcome.text, modified);
    }
}
