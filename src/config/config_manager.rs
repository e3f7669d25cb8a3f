use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, VALID_LOG_LEVELS};
use crate::errors::{ReviewError, ReviewResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads `path`, or the default location when `path` is `None`. A missing
    /// default file yields the built-in defaults; a missing explicit file is
    /// an error. A loaded file must pass `validate_config`.
    pub fn load(path: Option<&Path>) -> ReviewResult<Config> {
        let (config_path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_config_path() {
                Some(path) => (path, false),
                None => return Ok(Config::default()),
            },
        };

        if !config_path.exists() {
            if explicit {
                return Err(ReviewError::ConfigurationFileError {
                    path: config_path.display().to_string(),
                    reason: "file does not exist".to_string(),
                });
            }
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| ReviewError::ConfigurationFileError {
            path: config_path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config = Self::parse(&content)?;
        Self::validate_config(&config).map_err(|errors| ReviewError::config_error(
            &format!("{}: {}", config_path.display(), errors.join("; ")),
            None,
            Some("Fix the listed values, then run 'contract-review validate'"),
        ))?;
        Ok(config)
    }

    pub fn parse(content: &str) -> ReviewResult<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn sample_config() -> &'static str {
        r#"# Contract Review Configuration

[merge]
# How approved spans are written back into the original:
#   "literal" - first-occurrence substring replacement per span
#   "spliced" - offset-tracked splice; every span must match where the diff found it
strategy = "literal"

# Fail the merge when a span cannot be located instead of skipping it
strict = false

[server]
# Ports tried for the local review page
port_range_start = 8080
port_range_end = 8200

# Open the review page in the default browser
open_browser = true

# Give up waiting for the reviewer after this many minutes
timeout_minutes = 30

[output]
# "text" or "json"
format = "text"
color = true

[logging]
# off, error, warn, info, debug, trace (RUST_LOG overrides this)
level = "info"
"#
    }

    pub fn create_sample_config(path: Option<&Path>) -> ReviewResult<PathBuf> {
        let config_file_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_config_path()
                .ok_or_else(|| ReviewError::config_error("Could not determine home directory", None, Some("Pass --config <path>")))?,
        };

        if config_file_path.exists() {
            return Err(ReviewError::config_error(
                &format!("{} already exists", config_file_path.display()),
                None,
                Some("Edit the existing file or remove it first"),
            ));
        }

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file_path, Self::sample_config())?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.server.port_range_start >= config.server.port_range_end {
            errors.push(format!(
                "server.port_range_start ({}) must be below server.port_range_end ({})",
                config.server.port_range_start, config.server.port_range_end
            ));
        }

        if config.server.timeout_minutes == 0 {
            errors.push("server.timeout_minutes must be at least 1".to_string());
        }

        if !VALID_LOG_LEVELS.contains(&config.logging.level.to_lowercase().as_str()) {
            errors.push(format!(
                "logging.level '{}' is not one of: {}",
                config.logging.level,
                VALID_LOG_LEVELS.join(", ")
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
