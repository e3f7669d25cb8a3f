pub mod config;
pub mod merge_config;
pub mod server_config;
pub mod output_config;
pub mod logging_config;
