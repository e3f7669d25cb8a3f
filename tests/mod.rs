mod diff_engine_tests;
mod merge_tests;
mod properties;
