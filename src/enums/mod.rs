pub mod change_type;
pub mod change_status;
pub mod decision;
pub mod line_diff;
pub mod span_tag;
pub mod merge_strategy;
pub mod review_stage;
pub mod session_status;
pub mod output_format;
pub mod commands;
