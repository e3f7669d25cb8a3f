pub mod semantic_differ;
pub mod span_grouper;
pub mod diff_engine;
pub mod review_ledger;
pub mod merge_applier;
pub mod contract_review;
