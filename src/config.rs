//! Configuration System
//!
//! Markup contract, behavior timings and logging settings.
//! Supports TOML config files, an inline JSON block on the page, and
//! environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub markup: MarkupConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Selectors and attribute names the page behaviors look for
#[derive(Debug, Clone, Deserialize)]
pub struct MarkupConfig {
    /// Alerts that close themselves after the dismiss delay
    #[serde(default = "default_dismissible_alert")]
    pub dismissible_alert: String,

    /// Close trigger inside a dismissible alert
    #[serde(default = "default_close_button")]
    pub close_button: String,

    /// Tables whose body rows navigate on click
    #[serde(default = "default_clickable_table")]
    pub clickable_table: String,

    /// Rows of a clickable table, relative to the table
    #[serde(default = "default_table_row")]
    pub table_row: String,

    /// Row attribute holding the navigation target URL
    #[serde(default = "default_navigation_attribute")]
    pub navigation_attribute: String,

    /// Elements that get a toolkit tooltip
    #[serde(default = "default_tooltip")]
    pub tooltip: String,
}

fn default_dismissible_alert() -> String {
    ".alert-dismissible".to_string()
}

fn default_close_button() -> String {
    ".btn-close".to_string()
}

fn default_clickable_table() -> String {
    ".table-clickable".to_string()
}

fn default_table_row() -> String {
    "tbody tr".to_string()
}

fn default_navigation_attribute() -> String {
    "data-href".to_string()
}

fn default_tooltip() -> String {
    r#"[data-bs-toggle="tooltip"]"#.to_string()
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            dismissible_alert: default_dismissible_alert(),
            close_button: default_close_button(),
            clickable_table: default_clickable_table(),
            table_row: default_table_row(),
            navigation_attribute: default_navigation_attribute(),
            tooltip: default_tooltip(),
        }
    }
}

/// Behavior timings and presentation
#[derive(Debug, Clone, Deserialize)]
pub struct BehaviorConfig {
    #[serde(default = "default_alert_dismiss_delay")]
    pub alert_dismiss_delay_ms: u64,

    #[serde(default = "default_row_cursor")]
    pub row_cursor: String,

    #[serde(default = "default_startup_message")]
    pub startup_message: String,
}

/// Longest delay a browser timer can hold (`setTimeout` takes an `i32`)
pub const MAX_ALERT_DISMISS_DELAY_MS: u64 = i32::MAX as u64;

fn default_alert_dismiss_delay() -> u64 {
    5000 // 5 seconds
}

fn default_row_cursor() -> String {
    "pointer".to_string()
}

fn default_startup_message() -> String {
    "국회정보 대시보드가 로드되었습니다.".to_string()
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            alert_dismiss_delay_ms: default_alert_dismiss_delay(),
            row_cursor: default_row_cursor(),
            startup_message: default_startup_message(),
        }
    }
}

impl BehaviorConfig {
    pub fn alert_dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.alert_dismiss_delay_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            origin: path.display().to_string(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration embedded in the page as JSON
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text).map_err(|e| ConfigError::Parse {
            origin: "inline JSON".to_string(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides applied, or plain defaults if the overrides are invalid
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();
        config.apply_overrides(lookup);

        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                tracing::warn!("Ignoring environment overrides: {}", e);
                Config::default()
            }
        }
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Default config file locations, in search order
    #[cfg(feature = "cli")]
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("assembly-dashboard").join("config.toml")),
            Some(PathBuf::from("./dashboard.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from default locations or environment
    #[cfg(feature = "cli")]
    pub fn load_default() -> Self {
        let discovery = Self::discover(&Self::default_paths());
        discovery.log();
        discovery.config
    }

    /// Load the first usable file of `paths`, falling back to the environment.
    ///
    /// Nothing is logged here, so callers can report the outcome once
    /// logging is set up.
    pub fn discover(paths: &[PathBuf]) -> ConfigDiscovery {
        let mut rejected = Vec::new();

        for path in paths.iter().filter(|path| path.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return ConfigDiscovery {
                        config,
                        loaded_from: Some(path.clone()),
                        rejected,
                    }
                }
                Err(e) => rejected.push((path.clone(), e)),
            }
        }

        ConfigDiscovery {
            config: Self::from_env(),
            loaded_from: None,
            rejected,
        }
    }

    /// Check that every selector and attribute is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let markup = &self.markup;
        let required = [
            ("markup.dismissible_alert", &markup.dismissible_alert),
            ("markup.close_button", &markup.close_button),
            ("markup.clickable_table", &markup.clickable_table),
            ("markup.table_row", &markup.table_row),
            ("markup.navigation_attribute", &markup.navigation_attribute),
            ("markup.tooltip", &markup.tooltip),
            ("behavior.row_cursor", &self.behavior.row_cursor),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must not be empty".to_string(),
                });
            }
        }

        if self.behavior.alert_dismiss_delay_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "behavior.alert_dismiss_delay_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.behavior.alert_dismiss_delay_ms > MAX_ALERT_DISMISS_DELAY_MS {
            return Err(ConfigError::Invalid {
                field: "behavior.alert_dismiss_delay_ms",
                reason: format!("must be at most {}", MAX_ALERT_DISMISS_DELAY_MS),
            });
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a variable lookup
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(delay) = lookup("DASHBOARD_ALERT_DELAY_MS") {
            match delay.parse() {
                Ok(ms) => self.behavior.alert_dismiss_delay_ms = ms,
                Err(_) => tracing::warn!("Ignoring DASHBOARD_ALERT_DELAY_MS={:?}", delay),
            }
        }
        if let Some(cursor) = lookup("DASHBOARD_ROW_CURSOR") {
            self.behavior.row_cursor = cursor;
        }
        if let Some(level) = lookup("DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("DASHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Outcome of [`Config::discover`]
#[derive(Debug)]
pub struct ConfigDiscovery {
    pub config: Config,
    /// File the config came from; `None` means defaults plus environment
    pub loaded_from: Option<PathBuf>,
    /// Files that exist but could not be used
    pub rejected: Vec<(PathBuf, ConfigError)>,
}

impl ConfigDiscovery {
    pub fn log(&self) {
        for (path, e) in &self.rejected {
            tracing::warn!("Failed to load config from {:?}: {}", path, e);
        }
        match &self.loaded_from {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config from {origin}: {error}")]
    Parse { origin: String, error: String },

    #[error("Invalid config value {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Assembly Dashboard Configuration
#
# Environment variables override these settings:
# - DASHBOARD_ALERT_DELAY_MS
# - DASHBOARD_ROW_CURSOR
# - DASHBOARD_LOG_LEVEL
# - DASHBOARD_LOG_FORMAT

[markup]
# Alerts closed automatically after the dismiss delay
dismissible_alert = ".alert-dismissible"

# Close trigger looked up inside each alert
close_button = ".btn-close"

# Tables whose body rows navigate when clicked
clickable_table = ".table-clickable"
table_row = "tbody tr"

# Row attribute holding the target URL
navigation_attribute = "data-href"

# Elements activated as Bootstrap tooltips
tooltip = '[data-bs-toggle="tooltip"]'

[behavior]
# Delay before dismissible alerts close (ms)
alert_dismiss_delay_ms = 5000

# Cursor shown over clickable rows
row_cursor = "pointer"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty, json
format = "pretty"
"#
    .to_string()
}
