//! Config and data directory resolution.

use std::path::{Path, PathBuf};

use vitrine_common::ConfigError;

use crate::schema::FilesConfig;

pub const APP_NAME: &str = "vitrine";

/// Name of the settings file inside the config directory.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Working-directory config folder used when it holds a window list.
const LOCAL_CONFIG_DIR: &str = "config";

/// Resolve the directory holding settings, window list, layouts and views.
///
/// Order: explicit override, `./config` when it contains the window list,
/// then the platform config directory (`~/.config/vitrine` on Linux).
pub fn resolve_config_dir(override_dir: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }

    let local = PathBuf::from(LOCAL_CONFIG_DIR);
    if local.join(FilesConfig::default().windows).is_file() {
        return Ok(local);
    }

    Ok(dirs::config_dir()
        .ok_or_else(|| ConfigError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Platform data directory for Vitrine (`~/.local/share/vitrine` on Linux).
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| ConfigError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Persistent browser profile directory, created when missing.
pub fn ensure_profile_dir(profile_name: &str) -> Result<PathBuf, ConfigError> {
    let dir = data_dir()?.join(profile_name);
    std::fs::create_dir_all(&dir).map_err(|e| {
        ConfigError::PathError(format!(
            "failed to create profile directory {}: {e}",
            dir.display()
        ))
    })?;
    Ok(dir)
}

/// Absolute locations of every file Vitrine reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub dir: PathBuf,
    pub settings: PathBuf,
    pub windows: PathBuf,
    pub layouts: PathBuf,
    pub views: PathBuf,
    pub credentials: PathBuf,
    pub proxy_credentials: PathBuf,
}

impl ConfigPaths {
    pub fn new(dir: &Path, files: &FilesConfig) -> Self {
        Self {
            dir: dir.to_path_buf(),
            settings: dir.join(SETTINGS_FILE),
            windows: dir.join(&files.windows),
            layouts: dir.join(&files.layouts),
            views: dir.join(&files.views),
            credentials: dir.join(&files.credentials),
            proxy_credentials: dir.join(&files.proxy_credentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_dir_wins() {
        let dir = resolve_config_dir(Some(Path::new("/srv/kiosk"))).unwrap();
        assert_eq!(dir, PathBuf::from("/srv/kiosk"));
    }

    #[test]
    fn data_dir_ends_with_app_name() {
        let path = data_dir().unwrap();
        assert!(path.ends_with(APP_NAME), "got: {path:?}");
    }

    #[test]
    fn config_paths_join_file_names() {
        let files = FilesConfig {
            layouts: "screens.json".into(),
            ..Default::default()
        };
        let paths = ConfigPaths::new(Path::new("/etc/vitrine"), &files);
        assert_eq!(paths.settings, PathBuf::from("/etc/vitrine/settings.toml"));
        assert_eq!(paths.layouts, PathBuf::from("/etc/vitrine/screens.json"));
        assert_eq!(paths.views, PathBuf::from("/etc/vitrine/views.json"));
        assert_eq!(paths.proxy_credentials, PathBuf::from("/etc/vitrine/proxy.json"));
    }
}
