//! Named views, backed by `views.json`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use vitrine_common::StoreError;

use super::persist::{read_map, write_atomic};
use crate::schema::{View, WindowDef};

/// Map a display name to a view id: trimmed, lower-cased, spaces to `_`.
pub fn derive_view_id(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// In-memory copy of `views.json` plus the id of the view on screen.
#[derive(Debug)]
pub struct ViewStore {
    path: PathBuf,
    views: BTreeMap<String, View>,
    current: Option<String>,
}

impl ViewStore {
    /// Load from `path`. A missing or malformed file gives an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let views = read_map(&path, "views");
        Self {
            path,
            views,
            current: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, id: &str) -> Option<&View> {
        self.views.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.views.contains_key(id)
    }

    /// View ids in sorted order.
    pub fn ids(&self) -> Vec<String> {
        self.views.keys().cloned().collect()
    }

    /// `(id, display name)` pairs in id order, for the selector.
    pub fn names(&self) -> Vec<(String, String)> {
        self.views
            .iter()
            .map(|(id, v)| (id.clone(), v.name.clone()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &View)> {
        self.views.iter()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn current_view_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Record `id` as the view on screen.
    pub fn switch_view(&mut self, id: &str) -> Result<&View, StoreError> {
        let view = self
            .views
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        debug!(view = %id, "current view changed");
        self.current = Some(id.to_string());
        Ok(view)
    }

    /// Create or overwrite a view and persist the whole store.
    ///
    /// `id` is derived from `name` when absent. An empty `layout` reference
    /// defaults to the view's own id. Returns the stored id with the record.
    pub fn save_view(
        &mut self,
        id: Option<&str>,
        name: &str,
        description: &str,
        layout: &str,
        windows: Vec<WindowDef>,
    ) -> Result<(String, View), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::Invalid("view name must not be empty".into()));
        }
        let id = match id.map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => derive_view_id(name),
        };

        let view = View {
            name: name.to_string(),
            description: if description.trim().is_empty() {
                format!("Custom view: {name}")
            } else {
                description.trim().to_string()
            },
            layout: if layout.is_empty() {
                id.clone()
            } else {
                layout.to_string()
            },
            windows,
        };

        let previous = self.views.insert(id.clone(), view.clone());
        if let Err(e) = write_atomic(&self.path, &self.views, "views") {
            match previous {
                Some(old) => self.views.insert(id.clone(), old),
                None => self.views.remove(&id),
            };
            return Err(e);
        }

        info!(view = %id, windows = view.windows.len(), "view saved");
        Ok((id, view))
    }

    /// Remove `id` and persist. Restores the entry if the write fails.
    pub fn delete_view(&mut self, id: &str) -> Result<View, StoreError> {
        let removed = self
            .views
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Err(e) = write_atomic(&self.path, &self.views, "views") {
            self.views.insert(id.to_string(), removed);
            return Err(e);
        }

        if self.current.as_deref() == Some(id) {
            self.current = None;
        }
        info!(view = %id, "view deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_common::FracRect;

    fn def(id: &str, zoom: Option<u32>) -> WindowDef {
        WindowDef {
            id: id.into(),
            position: FracRect::new(0.0, 0.0, 0.5, 0.5),
            zoom,
        }
    }

    #[test]
    fn derive_id_from_name() {
        assert_eq!(derive_view_id("Morning Ops"), "morning_ops");
        assert_eq!(derive_view_id("  Wall  "), "wall");
        assert_eq!(derive_view_id("A B  C"), "a_b__c");
    }

    #[test]
    fn save_derives_id_and_layout_reference() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("views.json");
        let mut store = ViewStore::load(&path);

        let (id, view) = store
            .save_view(None, "Morning Ops", "", "", vec![def("a", Some(80))])
            .unwrap();
        assert_eq!(id, "morning_ops");
        assert_eq!(view.layout, "morning_ops");
        assert_eq!(view.description, "Custom view: Morning Ops");

        let reloaded = ViewStore::load(&path);
        let stored = reloaded.get("morning_ops").unwrap();
        assert_eq!(stored.name, "Morning Ops");
        assert_eq!(stored.windows[0].zoom, Some(80));
    }

    #[test]
    fn explicit_id_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ViewStore::load(dir.path().join("views.json"));
        let (id, view) = store
            .save_view(Some("wall"), "Video Wall", "big screen", "grid", vec![])
            .unwrap();
        assert_eq!(id, "wall");
        assert_eq!(view.layout, "grid");
        assert_eq!(store.names(), vec![("wall".to_string(), "Video Wall".to_string())]);
    }

    #[test]
    fn empty_name_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ViewStore::load(dir.path().join("views.json"));
        assert!(matches!(
            store.save_view(None, "   ", "", "", vec![]),
            Err(StoreError::Invalid(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn failed_write_rolls_back() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let mut store = ViewStore::load(blocker.join("views.json"));
        let err = store
            .save_view(None, "Ops", "", "", vec![def("a", None)])
            .unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert!(!store.contains("ops"));
    }

    #[test]
    fn switch_and_delete_track_current() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ViewStore::load(dir.path().join("views.json"));
        store.save_view(None, "Ops", "", "", vec![]).unwrap();
        store.save_view(None, "Wall", "", "", vec![]).unwrap();

        assert!(store.switch_view("missing").is_err());
        assert_eq!(store.current_view_id(), None);

        store.switch_view("ops").unwrap();
        assert_eq!(store.current_view_id(), Some("ops"));

        store.delete_view("wall").unwrap();
        assert_eq!(store.current_view_id(), Some("ops"));
        store.delete_view("ops").unwrap();
        assert_eq!(store.current_view_id(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("views.json");
        std::fs::write(&path, "{\"ops\": {\"windows\": 3}}").unwrap();
        assert!(ViewStore::load(&path).is_empty());
    }
}
