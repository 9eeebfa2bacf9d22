//! Persisted layout and view records.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use vitrine_common::{FracRect, StoreError};

/// Slot id → window id, produced by the screen manager. Never persisted.
pub type Assignment = BTreeMap<String, String>;

/// One rectangle of a layout, waiting for a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub geometry: FracRect,
}

/// A named set of slots, independent of what fills them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub slots: Vec<Slot>,
}

impl Layout {
    pub fn slot(&self, id: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Slot ids must be unique and non-empty.
    pub fn validate(&self) -> Result<(), StoreError> {
        let mut seen = HashSet::new();
        for slot in &self.slots {
            if slot.id.is_empty() {
                return Err(StoreError::Invalid("slot id must not be empty".into()));
            }
            if !seen.insert(slot.id.as_str()) {
                return Err(StoreError::Invalid(format!(
                    "duplicate slot id '{}'",
                    slot.id
                )));
            }
        }
        Ok(())
    }
}

/// A window placed by a view, with its optional zoom in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowDef {
    pub id: String,
    pub position: FracRect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u32>,
}

/// A named arrangement of specific windows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Informational reference to the layout this view was derived from.
    #[serde(default)]
    pub layout: String,
    #[serde(default)]
    pub windows: Vec<WindowDef>,
}
