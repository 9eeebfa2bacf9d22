//! Turning live pane geometry into layout slots and view entries.

use vitrine_common::{PixelRect, ScreenSize};

use crate::normalize::normalize;
use crate::schema::{Slot, WindowDef};

/// Zoom level that is not worth recording.
pub const DEFAULT_ZOOM: u32 = 100;

/// A visible pane at the moment of saving.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedWindow {
    pub id: String,
    pub geometry: PixelRect,
    pub zoom: u32,
}

impl CapturedWindow {
    pub fn new(id: impl Into<String>, geometry: PixelRect, zoom: u32) -> Self {
        Self {
            id: id.into(),
            geometry,
            zoom,
        }
    }
}

/// Slot id used when a layout is saved from a window.
pub fn slot_id_for(window_id: &str) -> String {
    format!("Slot for {window_id}")
}

/// One slot per captured window, in capture order.
pub fn capture_slots(windows: &[CapturedWindow], screen: ScreenSize) -> Vec<Slot> {
    windows
        .iter()
        .map(|w| Slot {
            id: slot_id_for(&w.id),
            geometry: normalize(w.geometry, screen),
        })
        .collect()
}

/// One view entry per captured window. Zoom is omitted at 100%.
pub fn capture_window_defs(windows: &[CapturedWindow], screen: ScreenSize) -> Vec<WindowDef> {
    windows
        .iter()
        .map(|w| WindowDef {
            id: w.id.clone(),
            position: normalize(w.geometry, screen),
            zoom: (w.zoom != DEFAULT_ZOOM).then_some(w.zoom),
        })
        .collect()
}
