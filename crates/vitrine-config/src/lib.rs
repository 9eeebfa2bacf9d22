//! Vitrine configuration.
//!
//! Settings come from `settings.toml` (TOML, all fields defaulted); the
//! window list and credentials are JSON files next to it.

pub mod credentials;
pub mod paths;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod windows;

pub use credentials::{CredentialSource, Credentials};
pub use paths::{ConfigPaths, APP_NAME};
pub use schema::{VitrineSettings, SETTINGS_SCHEMA_VERSION};
pub use windows::{load_window_configs, WindowConfig};

use std::path::Path;

use vitrine_common::ConfigError;

/// Load `settings.toml` from a config directory, creating it when missing,
/// and return it with the resolved file locations.
pub fn load_settings(config_dir: &Path) -> Result<(VitrineSettings, ConfigPaths), ConfigError> {
    let settings = toml_loader::load_or_create(&config_dir.join(paths::SETTINGS_FILE))?;
    let paths = ConfigPaths::new(config_dir, &settings.files);
    Ok((settings, paths))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_settings_resolves_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.toml"),
            "[files]\nviews = \"my-views.json\"\n",
        )
        .unwrap();

        let (settings, paths) = load_settings(dir.path()).unwrap();
        assert_eq!(settings.files.views, "my-views.json");
        assert_eq!(paths.views, dir.path().join("my-views.json"));
        assert_eq!(paths.windows, dir.path().join("windows.json"));
    }
}
