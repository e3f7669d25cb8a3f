use std::time::Duration;

pub const DEFAULT_TIMEOUT_MINUTES: u64 = 30;
pub const DEFAULT_SERVER_PORT_RANGE_START: u16 = 8080;
pub const DEFAULT_SERVER_PORT_RANGE_END: u16 = 8200;
pub const MAX_SESSION_ID_LENGTH: usize = 64;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;
pub const SESSION_POLL_INTERVAL_MS: u64 = 500;

pub const CONFIG_DIR_NAME: &str = "contract-review";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const VALID_LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

pub const CHANGE_ID_PREFIX: &str = "change-";

pub fn timeout_duration(minutes: u64) -> Duration {
    Duration::from_secs(minutes.saturating_mul(60))
}

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
