//! Runtime map of window id to live pane, created on demand from the
//! configured window list.

use std::collections::BTreeMap;

use tracing::{debug, info};
use vitrine_common::ShellError;
use vitrine_config::WindowConfig;

use crate::surface::{PaneSurface, SurfaceFactory};

pub struct WindowRegistry<S> {
    configs: Vec<WindowConfig>,
    windows: BTreeMap<String, S>,
}

impl<S: PaneSurface> WindowRegistry<S> {
    pub fn new(configs: Vec<WindowConfig>) -> Self {
        Self {
            configs,
            windows: BTreeMap::new(),
        }
    }

    /// The configured window list, in file order.
    pub fn configs(&self) -> &[WindowConfig] {
        &self.configs
    }

    pub fn config(&self, id: &str) -> Option<&WindowConfig> {
        self.configs.iter().find(|c| c.id == id)
    }

    pub fn is_configured(&self, id: &str) -> bool {
        self.config(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&S> {
        self.windows.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut S> {
        self.windows.get_mut(id)
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.windows.contains_key(id)
    }

    /// Return the open window, creating it from its config if needed.
    /// A newly created window is placed at its configured geometry, hidden.
    pub fn open(
        &mut self,
        id: &str,
        factory: &mut dyn SurfaceFactory<S>,
    ) -> Result<&mut S, ShellError> {
        if !self.windows.contains_key(id) {
            let config = self
                .config(id)
                .ok_or_else(|| ShellError::UnknownWindow(id.to_string()))?;
            let mut surface = factory.create(config)?;
            surface.set_geometry(config.geometry);
            info!(window_id = %id, url = %config.url, "window opened");
            self.windows.insert(id.to_string(), surface);
        }
        self.windows
            .get_mut(id)
            .ok_or_else(|| ShellError::UnknownWindow(id.to_string()))
    }

    /// Close and forget a window. Returns `false` if it was not open.
    pub fn close(&mut self, id: &str) -> bool {
        match self.windows.remove(id) {
            Some(mut surface) => {
                surface.discard_background();
                surface.close();
                debug!(window_id = %id, "window closed");
                true
            }
            None => false,
        }
    }

    pub fn close_all(&mut self) {
        for id in self.open_ids() {
            self.close(&id);
        }
    }

    /// Ids of open windows, sorted.
    pub fn open_ids(&self) -> Vec<String> {
        self.windows.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &S)> {
        self.windows.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut S)> {
        self.windows.iter_mut()
    }

    pub fn open_count(&self) -> usize {
        self.windows.len()
    }

    pub fn hide_all(&mut self) {
        for surface in self.windows.values_mut() {
            surface.hide();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{configs, FakeFactory};
    use vitrine_common::PixelRect;

    #[test]
    fn open_creates_once_at_configured_geometry() {
        let mut registry = WindowRegistry::new(configs(&["a", "b"]));
        let mut factory = FakeFactory::default();

        registry.open("a", &mut factory).unwrap();
        registry.open("a", &mut factory).unwrap();
        assert_eq!(factory.created, vec!["a".to_string()]);
        assert_eq!(registry.open_count(), 1);

        let a = registry.get("a").unwrap();
        assert_eq!(a.geometry, PixelRect::new(100, 100, 800, 600));
        assert!(!a.visible);
    }

    #[test]
    fn open_unknown_window_fails() {
        let mut registry = WindowRegistry::new(configs(&["a"]));
        let mut factory = FakeFactory::default();
        assert!(matches!(
            registry.open("zzz", &mut factory),
            Err(ShellError::UnknownWindow(_))
        ));
        assert!(factory.created.is_empty());
    }

    #[test]
    fn close_discards_background_and_forgets() {
        let mut registry = WindowRegistry::new(configs(&["a", "b"]));
        let mut factory = FakeFactory::default();
        registry.open("a", &mut factory).unwrap();
        registry.open("b", &mut factory).unwrap();

        assert!(registry.close("a"));
        assert!(!registry.close("a"));
        assert_eq!(factory.log.take(), vec!["a:discard", "a:close"]);
        assert_eq!(registry.open_ids(), vec!["b".to_string()]);

        registry.close_all();
        assert_eq!(registry.open_count(), 0);
        assert!(registry.is_configured("a"));
    }
}
