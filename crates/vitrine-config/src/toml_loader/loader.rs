//! Core TOML settings loading.

use std::path::Path;

use tracing::{info, warn};
use vitrine_common::ConfigError;

use crate::schema::VitrineSettings;
use crate::validation;

use super::template::default_settings_toml;

/// Load settings from a specific TOML file.
///
/// Missing fields take their defaults. Validation failures are logged and the
/// parsed settings are returned as-is.
pub fn load_from_path(path: &Path) -> Result<VitrineSettings, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let settings: VitrineSettings = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&settings) {
        warn!("settings validation warning: {e}");
    }

    info!("loaded settings from {}", path.display());
    Ok(settings)
}

/// Load settings, writing a commented default file first when none exists.
pub fn load_or_create(path: &Path) -> Result<VitrineSettings, ConfigError> {
    match load_from_path(path) {
        Ok(settings) => Ok(settings),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no settings found at {}, creating default", path.display());
            create_default_settings(path)?;
            Ok(VitrineSettings::default())
        }
        Err(e) => Err(e),
    }
}

/// Write the commented default settings file.
pub fn create_default_settings(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::PathError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_settings_toml()).map_err(|e| {
        ConfigError::PathError(format!(
            "failed to write default settings to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default settings at {}", path.display());
    Ok(())
}
