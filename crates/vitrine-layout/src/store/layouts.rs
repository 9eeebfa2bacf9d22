//! Named layouts, backed by `layouts.json`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::info;
use vitrine_common::StoreError;

use super::persist::{read_map, write_atomic};
use crate::schema::{Layout, Slot};

/// In-memory copy of `layouts.json`. Every mutation rewrites the whole file.
#[derive(Debug)]
pub struct LayoutStore {
    path: PathBuf,
    layouts: BTreeMap<String, Layout>,
}

impl LayoutStore {
    /// Load from `path`. A missing or malformed file gives an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let layouts = read_map(&path, "layouts");
        Self { path, layouts }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, name: &str) -> Option<&Layout> {
        self.layouts.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.layouts.contains_key(name)
    }

    /// Layout names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.layouts.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Layout)> {
        self.layouts.iter()
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Create or overwrite `name` and persist the whole store.
    ///
    /// The caller confirms overwrites. On a write failure the previous entry
    /// (or its absence) is restored before the error is returned.
    pub fn save_layout(
        &mut self,
        name: &str,
        description: &str,
        slots: Vec<Slot>,
    ) -> Result<Layout, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::Invalid("layout name must not be empty".into()));
        }

        let description = if description.trim().is_empty() {
            format!("Custom layout: {name}")
        } else {
            description.trim().to_string()
        };
        let layout = Layout { description, slots };
        layout.validate()?;

        let previous = self.layouts.insert(name.to_string(), layout.clone());
        if let Err(e) = write_atomic(&self.path, &self.layouts, "layouts") {
            match previous {
                Some(old) => self.layouts.insert(name.to_string(), old),
                None => self.layouts.remove(name),
            };
            return Err(e);
        }

        info!(layout = %name, slots = layout.slots.len(), "layout saved");
        Ok(layout)
    }

    /// Remove `name` and persist. Restores the entry if the write fails.
    pub fn delete_layout(&mut self, name: &str) -> Result<Layout, StoreError> {
        let removed = self
            .layouts
            .remove(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;

        if let Err(e) = write_atomic(&self.path, &self.layouts, "layouts") {
            self.layouts.insert(name.to_string(), removed);
            return Err(e);
        }

        info!(layout = %name, "layout deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_common::FracRect;

    fn slot(id: &str, x: f64) -> Slot {
        Slot {
            id: id.into(),
            geometry: FracRect::new(x, 0.0, 0.5, 1.0),
        }
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LayoutStore::load(dir.path().join("layouts.json"));
        assert!(store.is_empty());
        assert!(store.names().is_empty());
    }

    #[test]
    fn save_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layouts.json");

        let mut store = LayoutStore::load(&path);
        store
            .save_layout("Split", "left and right", vec![slot("l", 0.0), slot("r", 0.5)])
            .unwrap();
        store.save_layout("Alpha", "", vec![slot("only", 0.0)]).unwrap();

        let reloaded = LayoutStore::load(&path);
        assert_eq!(reloaded.names(), vec!["Alpha".to_string(), "Split".to_string()]);
        let split = reloaded.get("Split").unwrap();
        assert_eq!(split.description, "left and right");
        assert_eq!(split.slots[1].id, "r");
        assert_eq!(reloaded.get("Alpha").unwrap().description, "Custom layout: Alpha");
    }

    #[test]
    fn save_overwrites_existing_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = LayoutStore::load(dir.path().join("layouts.json"));
        store.save_layout("Ops", "v1", vec![slot("a", 0.0)]).unwrap();
        store
            .save_layout("Ops", "v2", vec![slot("a", 0.0), slot("b", 0.5)])
            .unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Ops").unwrap().slots.len(), 2);
    }

    #[test]
    fn duplicate_slot_ids_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layouts.json");
        let mut store = LayoutStore::load(&path);

        let err = store
            .save_layout("Bad", "", vec![slot("a", 0.0), slot("a", 0.5)])
            .unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
        assert!(!store.contains("Bad"));
        assert!(!path.exists());
    }

    #[test]
    fn failed_write_rolls_back_new_entry() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let mut store = LayoutStore::load(blocker.join("layouts.json"));
        let err = store.save_layout("Ops", "", vec![slot("a", 0.0)]).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn failed_write_restores_previous_entry() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("cfg");
        let mut store = LayoutStore::load(sub.join("layouts.json"));
        store.save_layout("Ops", "v1", vec![slot("a", 0.0)]).unwrap();

        // Replace the directory with a plain file so the next write fails.
        std::fs::remove_dir_all(&sub).unwrap();
        std::fs::write(&sub, "").unwrap();

        assert!(store.save_layout("Ops", "v2", vec![]).is_err());
        assert_eq!(store.get("Ops").unwrap().description, "v1");
        assert!(store.delete_layout("Ops").is_err());
        assert!(store.contains("Ops"));
    }

    #[test]
    fn delete_removes_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layouts.json");
        let mut store = LayoutStore::load(&path);
        store.save_layout("Ops", "", vec![slot("a", 0.0)]).unwrap();
        store.save_layout("Wall", "", vec![slot("a", 0.0)]).unwrap();

        store.delete_layout("Ops").unwrap();
        assert!(matches!(
            store.delete_layout("Ops"),
            Err(StoreError::NotFound(_))
        ));
        assert_eq!(LayoutStore::load(&path).names(), vec!["Wall".to_string()]);
    }
}
