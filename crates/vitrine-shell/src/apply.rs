//! Placing windows according to a layout or a view.
//!
//! Both operations hide every open window first and then show only what the
//! target names, so the final state does not depend on what was visible
//! before.

use tracing::{debug, info, warn};
use vitrine_common::ScreenSize;
use vitrine_layout::{denormalize, Assignment, Layout, View};

use crate::registry::WindowRegistry;
use crate::surface::{PaneSurface, SurfaceFactory};

/// Zoom a pane is reset to when a view does not record one.
pub const DEFAULT_ZOOM: u32 = 100;

/// Outcome of placing windows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Window ids shown, in placement order.
    pub shown: Vec<String>,
    /// Slot ids (for layouts) or window ids (for views) that were not placed.
    pub skipped: Vec<String>,
}

/// Show the windows assigned to each slot of `layout`, hide the rest.
///
/// Slots without an assignment, or assigned to a window that is not
/// configured, are skipped without error.
pub fn apply_layout<S: PaneSurface>(
    registry: &mut WindowRegistry<S>,
    factory: &mut dyn SurfaceFactory<S>,
    layout: &Layout,
    assignment: &Assignment,
    screen: ScreenSize,
) -> ApplyReport {
    registry.hide_all();
    let mut report = ApplyReport::default();

    for slot in &layout.slots {
        let Some(window_id) = assignment.get(&slot.id) else {
            debug!(slot = %slot.id, "slot not assigned");
            report.skipped.push(slot.id.clone());
            continue;
        };
        if !registry.is_configured(window_id) {
            warn!(slot = %slot.id, window_id = %window_id, "assigned window is not configured");
            report.skipped.push(slot.id.clone());
            continue;
        }
        match registry.open(window_id, factory) {
            Ok(surface) => {
                let rect = denormalize(slot.geometry, screen);
                surface.set_geometry(rect);
                surface.show();
                debug!(slot = %slot.id, window_id = %window_id, %rect, "slot placed");
                report.shown.push(window_id.clone());
            }
            Err(e) => {
                warn!(window_id = %window_id, "could not open window: {e}");
                report.skipped.push(slot.id.clone());
            }
        }
    }

    info!(
        shown = report.shown.len(),
        skipped = report.skipped.len(),
        "layout applied"
    );
    report
}

/// Show the windows a view lists at their saved positions and zoom.
pub fn apply_view<S: PaneSurface>(
    registry: &mut WindowRegistry<S>,
    factory: &mut dyn SurfaceFactory<S>,
    view: &View,
    screen: ScreenSize,
) -> ApplyReport {
    registry.hide_all();
    let mut report = ApplyReport::default();

    for def in &view.windows {
        if !registry.is_configured(&def.id) {
            debug!(window_id = %def.id, "view names an unconfigured window, skipping");
            report.skipped.push(def.id.clone());
            continue;
        }
        match registry.open(&def.id, factory) {
            Ok(surface) => {
                surface.set_geometry(denormalize(def.position, screen));
                surface.set_zoom(def.zoom.unwrap_or(DEFAULT_ZOOM));
                surface.show();
                report.shown.push(def.id.clone());
            }
            Err(e) => {
                warn!(window_id = %def.id, "could not open window: {e}");
                report.skipped.push(def.id.clone());
            }
        }
    }

    info!(view = %view.name, shown = report.shown.len(), "view applied");
    report
}
