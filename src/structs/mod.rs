pub mod change;
pub mod line_position;
pub mod diff_span;
pub mod unapplied_span;
pub mod merge_outcome;
pub mod review_summary;
pub mod cli;
pub mod config;
pub mod diff;
