use serde::{Deserialize, Serialize};
use crate::structs::config::logging_config::LoggingConfig;
use crate::structs::config::merge_config::MergeConfig;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::server_config::ServerConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub merge: MergeConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}
