//! The static window list (`windows.json`).

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, warn};
use vitrine_common::{ConfigError, PixelRect};

/// One pane: what it shows and where it starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Entries without an id are skipped when the list is parsed.
    #[serde(default)]
    pub id: String,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_geometry", deserialize_with = "geometry_with_defaults")]
    pub geometry: PixelRect,
    /// Background refresh interval in seconds. `0` uses the default interval,
    /// absent disables refresh for this pane.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_secs: Option<u64>,
}

fn default_url() -> String {
    "about:blank".to_string()
}

const DEFAULT_GEOMETRY: PixelRect = PixelRect::new(100, 100, 800, 600);

fn default_geometry() -> PixelRect {
    DEFAULT_GEOMETRY
}

/// On-disk geometry; each missing field falls back on its own.
#[derive(Deserialize)]
struct RawGeometry {
    x: Option<i32>,
    y: Option<i32>,
    width: Option<i32>,
    height: Option<i32>,
}

fn geometry_with_defaults<'de, D>(deserializer: D) -> Result<PixelRect, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawGeometry::deserialize(deserializer)?;
    Ok(PixelRect::new(
        raw.x.unwrap_or(DEFAULT_GEOMETRY.x),
        raw.y.unwrap_or(DEFAULT_GEOMETRY.y),
        raw.width.unwrap_or(DEFAULT_GEOMETRY.width),
        raw.height.unwrap_or(DEFAULT_GEOMETRY.height),
    ))
}

impl WindowConfig {
    pub fn new(id: impl Into<String>, url: impl Into<String>, geometry: PixelRect) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            geometry,
            refresh_secs: None,
        }
    }
}

/// Parse a window list from JSON text.
///
/// Entries with an empty id are dropped; for duplicate ids the first wins.
pub fn parse_window_configs(json: &str) -> Result<Vec<WindowConfig>, ConfigError> {
    let raw: Vec<WindowConfig> = serde_json::from_str(json)
        .map_err(|e| ConfigError::ParseError(format!("invalid window list: {e}")))?;

    let mut seen = HashSet::new();
    let mut configs = Vec::with_capacity(raw.len());
    for config in raw {
        if config.id.trim().is_empty() {
            warn!("skipping window entry with empty id");
            continue;
        }
        if !seen.insert(config.id.clone()) {
            warn!(window_id = %config.id, "duplicate window id, keeping the first entry");
            continue;
        }
        configs.push(config);
    }
    Ok(configs)
}

/// Load the window list from disk.
pub fn load_window_configs(path: &Path) -> Result<Vec<WindowConfig>, ConfigError> {
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
    let configs = parse_window_configs(&content)?;
    info!(count = configs.len(), "loaded window list from {}", path.display());
    Ok(configs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_entry() {
        let configs = parse_window_configs(
            r#"[{"id": "report", "url": "https://bi.example/r/1",
                 "geometry": {"x": 0, "y": 0, "width": 1152, "height": 756},
                 "refresh_secs": 120}]"#,
        )
        .unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].id, "report");
        assert_eq!(configs[0].geometry, PixelRect::new(0, 0, 1152, 756));
        assert_eq!(configs[0].refresh_secs, Some(120));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let configs = parse_window_configs(r#"[{"id": "blank"}]"#).unwrap();
        assert_eq!(configs[0].url, "about:blank");
        assert_eq!(configs[0].geometry, PixelRect::new(100, 100, 800, 600));
        assert_eq!(configs[0].refresh_secs, None);
    }

    #[test]
    fn duplicates_and_empty_ids_dropped() {
        let configs = parse_window_configs(
            r#"[{"id": "a", "url": "https://one"}, {"id": ""},
                {"id": "a", "url": "https://two"}, {"id": "b"}]"#,
        )
        .unwrap();
        let ids: Vec<_> = configs.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(configs[0].url, "https://one");
    }

    #[test]
    fn entry_without_id_skipped_not_fatal() {
        let configs = parse_window_configs(
            r#"[{"url": "https://a.example"}, {"id": "b", "url": "https://b.example"}]"#,
        )
        .unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].id, "b");
    }

    #[test]
    fn partial_geometry_defaults_per_field() {
        let configs =
            parse_window_configs(r#"[{"id": "a", "geometry": {"x": 0, "y": 20}}]"#).unwrap();
        assert_eq!(configs[0].geometry, PixelRect::new(0, 20, 800, 600));

        let configs =
            parse_window_configs(r#"[{"id": "a", "geometry": {"width": 1280}}]"#).unwrap();
        assert_eq!(configs[0].geometry, PixelRect::new(100, 100, 1280, 600));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_window_configs("{not a list").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_window_configs(&dir.path().join("windows.json")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
