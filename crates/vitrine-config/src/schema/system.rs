//! File locations and logging.

use serde::{Deserialize, Serialize};

/// Names of the data files, relative to the config directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    pub windows: String,
    pub layouts: String,
    pub views: String,
    pub credentials: String,
    pub proxy_credentials: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            windows: "windows.json".to_string(),
            layouts: "layouts.json".to_string(),
            views: "views.json".to_string(),
            credentials: "auth.json".to_string(),
            proxy_credentials: "proxy.json".to_string(),
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for this level.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "vitrine=trace",
            LogLevel::Debug => "vitrine=debug",
            LogLevel::Info => "vitrine=info",
            LogLevel::Warn => "vitrine=warn",
            LogLevel::Error => "vitrine=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_lowercase() {
        let config: LoggingConfig = toml::from_str("level = \"debug\"").unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.level.directive(), "vitrine=debug");
    }

    #[test]
    fn files_partial_toml() {
        let config: FilesConfig = toml::from_str("layouts = \"screens.json\"").unwrap();
        assert_eq!(config.layouts, "screens.json");
        assert_eq!(config.windows, "windows.json");
    }
}
