//! Configuration schema types for Vitrine.
//!
//! All structs use `serde(default)` so partial settings files work correctly.

mod browser;
mod edit;
mod refresh;
mod system;

pub use browser::*;
pub use edit::*;
pub use refresh::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current settings schema version.
pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

/// Root settings for Vitrine, read from `settings.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VitrineSettings {
    pub refresh: RefreshConfig,
    pub browser: BrowserConfig,
    pub edit: EditConfig,
    pub files: FilesConfig,
    pub logging: LoggingConfig,
}
