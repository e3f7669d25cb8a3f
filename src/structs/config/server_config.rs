use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "ConfigHelper::default_port_range_start")]
    pub port_range_start: u16,

    #[serde(default = "ConfigHelper::default_port_range_end")]
    pub port_range_end: u16,

    #[serde(default = "ConfigHelper::default_open_browser")]
    pub open_browser: bool,

    #[serde(default = "ConfigHelper::default_timeout_minutes")]
    pub timeout_minutes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port_range_start: ConfigHelper::default_port_range_start(),
            port_range_end: ConfigHelper::default_port_range_end(),
            open_browser: ConfigHelper::default_open_browser(),
            timeout_minutes: ConfigHelper::default_timeout_minutes(),
        }
    }
}
