//! JSON file access shared by the layout and view stores.
//!
//! Writes go to a `.tmp` sibling which is then renamed over the target, so a
//! crash mid-write leaves the previous file intact.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};
use vitrine_common::StoreError;

/// Read a JSON object of records. Missing or malformed files yield an empty map.
pub(crate) fn read_map<T: DeserializeOwned>(path: &Path, what: &str) -> BTreeMap<String, T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("no {what} file at {}, starting empty", path.display());
            return BTreeMap::new();
        }
        Err(e) => {
            warn!("failed to read {what} from {}: {e}", path.display());
            return BTreeMap::new();
        }
    };

    match serde_json::from_str::<BTreeMap<String, T>>(&content) {
        Ok(map) => {
            info!(count = map.len(), "loaded {what} from {}", path.display());
            map
        }
        Err(e) => {
            warn!("failed to parse {what} in {}: {e}", path.display());
            BTreeMap::new()
        }
    }
}

/// Replace `path` with the pretty-printed JSON of `value`.
pub(crate) fn write_atomic<T: Serialize>(
    path: &Path,
    value: &T,
    what: &'static str,
) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| StoreError::Serialize {
        what,
        reason: e.to_string(),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    }

    let tmp_path = tmp_path_for(path);
    std::fs::write(&tmp_path, &json).map_err(|e| write_error(&tmp_path, e))?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Rename over an open file fails on some platforms.
        warn!("atomic rename failed ({e}), falling back to direct write");
        let _ = std::fs::remove_file(&tmp_path);
        std::fs::write(path, &json).map_err(|e2| write_error(path, e2))?;
    }

    debug!(path = %path.display(), "{what} saved to disk");
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_error(path: &Path, e: std::io::Error) -> StoreError {
    StoreError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let mut map = BTreeMap::new();
        map.insert("k".to_string(), vec![1u32, 2, 3]);

        write_atomic(&path, &map, "numbers").unwrap();
        let back: BTreeMap<String, Vec<u32>> = read_map(&path, "numbers");
        assert_eq!(back, map);
        assert!(!dir.path().join("data.json.tmp").exists());
    }

    #[test]
    fn write_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, r#"{"old": 1, "older": 2}"#).unwrap();

        let mut map = BTreeMap::new();
        map.insert("new".to_string(), 3u32);
        write_atomic(&path, &map, "numbers").unwrap();

        let back: BTreeMap<String, u32> = read_map(&path, "numbers");
        assert_eq!(back.len(), 1);
        assert_eq!(back["new"], 3);
    }

    #[test]
    fn malformed_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "[1, 2").unwrap();
        let back: BTreeMap<String, u32> = read_map(&path, "numbers");
        assert!(back.is_empty());
    }

    #[test]
    fn unwritable_location_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file, not a directory").unwrap();
        let path = blocker.join("data.json");

        let err = write_atomic(&path, &BTreeMap::<String, u32>::new(), "numbers").unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path_for(Path::new("/a/views.json")),
            PathBuf::from("/a/views.json.tmp")
        );
    }
}
