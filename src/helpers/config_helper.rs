use crate::config::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_SERVER_PORT_RANGE_END, DEFAULT_SERVER_PORT_RANGE_START,
    DEFAULT_TIMEOUT_MINUTES,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_port_range_start() -> u16 {
        DEFAULT_SERVER_PORT_RANGE_START
    }

    pub fn default_port_range_end() -> u16 {
        DEFAULT_SERVER_PORT_RANGE_END
    }

    pub fn default_open_browser() -> bool {
        true
    }

    pub fn default_timeout_minutes() -> u64 {
        DEFAULT_TIMEOUT_MINUTES
    }

    pub fn default_color() -> bool {
        true
    }

    pub fn default_log_level() -> String {
        DEFAULT_LOG_LEVEL.to_string()
    }
}
