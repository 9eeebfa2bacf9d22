//! The orchestrator: owns the window registry, both stores, edit mode and
//! the per-pane refresh engines.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::{debug, info, warn};
use vitrine_common::{PixelRect, ScreenSize, ShellError};
use vitrine_config::schema::RefreshConfig;
use vitrine_config::WindowConfig;
use vitrine_layout::{
    capture_slots, capture_window_defs, derive_view_id, Assignment, CapturedWindow,
    LayoutStore, ViewStore,
};

use crate::actions::{menu_actions, Action};
use crate::apply::{self, ApplyReport};
use crate::edit::{hit_test, EditLimits, OverlayDrag};
use crate::refresh::{RefreshCommand, RefreshEngine, RefreshTimings};
use crate::registry::WindowRegistry;
use crate::surface::{PaneSurface, SurfaceFactory};

/// What the save dialog asked to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    View,
    Layout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub kind: SaveKind,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Stored under this key (layout name or view id).
    Saved { kind: SaveKind, key: String },
    /// The name existed and overwriting was declined.
    Cancelled,
}

pub struct Shell<S: PaneSurface> {
    registry: WindowRegistry<S>,
    layouts: LayoutStore,
    views: ViewStore,
    screen: ScreenSize,
    edit_mode: bool,
    limits: EditLimits,
    refresh: RefreshConfig,
    refreshers: BTreeMap<String, RefreshEngine>,
    drags: BTreeMap<String, OverlayDrag>,
}

impl<S: PaneSurface> Shell<S> {
    pub fn new(
        windows: Vec<WindowConfig>,
        layouts: LayoutStore,
        views: ViewStore,
        screen: ScreenSize,
    ) -> Self {
        Self {
            registry: WindowRegistry::new(windows),
            layouts,
            views,
            screen,
            edit_mode: false,
            limits: EditLimits::default(),
            refresh: RefreshConfig::default(),
            refreshers: BTreeMap::new(),
            drags: BTreeMap::new(),
        }
    }

    pub fn with_edit_limits(mut self, limits: EditLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_refresh_config(mut self, refresh: RefreshConfig) -> Self {
        self.refresh = refresh;
        self
    }

    pub fn registry(&self) -> &WindowRegistry<S> {
        &self.registry
    }

    /// Direct access to open surfaces, for binding-level work such as
    /// resizing web views or loading a popup in place.
    pub fn registry_mut(&mut self) -> &mut WindowRegistry<S> {
        &mut self.registry
    }

    pub fn layouts(&self) -> &LayoutStore {
        &self.layouts
    }

    pub fn views(&self) -> &ViewStore {
        &self.views
    }

    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    pub fn set_screen(&mut self, screen: ScreenSize) {
        if screen != self.screen {
            info!(%screen, "screen size changed");
            self.screen = screen;
        }
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn edit_limits(&self) -> EditLimits {
        self.limits
    }

    /// Floating-menu contents for the current mode.
    pub fn menu_actions(&self) -> Vec<Action> {
        menu_actions(self.edit_mode)
    }

    // -- Windows --------------------------------------------------------------

    /// Open a configured window at its configured geometry and show it.
    pub fn open_window(
        &mut self,
        id: &str,
        factory: &mut dyn SurfaceFactory<S>,
    ) -> Result<(), ShellError> {
        let fresh = !self.registry.is_open(id);
        let edit_mode = self.edit_mode;
        let surface = self.registry.open(id, factory)?;
        surface.set_edit_mode(edit_mode);
        surface.show();
        if fresh {
            self.start_refresh(id);
        }
        Ok(())
    }

    /// Open every configured window. Failures are logged and skipped.
    pub fn open_all(&mut self, factory: &mut dyn SurfaceFactory<S>) -> usize {
        let ids: Vec<String> = self.registry.configs().iter().map(|c| c.id.clone()).collect();
        let mut opened = 0;
        for id in ids {
            match self.open_window(&id, factory) {
                Ok(()) => opened += 1,
                Err(e) => warn!(window_id = %id, "failed to open window: {e}"),
            }
        }
        opened
    }

    pub fn close_window(&mut self, id: &str) -> bool {
        if let Some(mut engine) = self.refreshers.remove(id) {
            engine.cancel();
        }
        self.drags.remove(id);
        self.registry.close(id)
    }

    pub fn close_all(&mut self) {
        for id in self.registry.open_ids() {
            self.close_window(&id);
        }
    }

    pub fn reload_all(&mut self) {
        info!(count = self.registry.open_count(), "reloading all windows");
        for (_, surface) in self.registry.iter_mut() {
            surface.reload();
        }
    }

    /// Visible windows with their current geometry and zoom, in config order.
    pub fn visible_windows(&self) -> Vec<CapturedWindow> {
        self.registry
            .configs()
            .iter()
            .filter_map(|c| {
                let surface = self.registry.get(&c.id)?;
                surface
                    .is_visible()
                    .then(|| CapturedWindow::new(c.id.clone(), surface.geometry(), surface.zoom()))
            })
            .collect()
    }

    // -- Layouts and views ----------------------------------------------------

    /// Leave edit mode, then place windows per `assignment`.
    pub fn apply_layout(
        &mut self,
        name: &str,
        assignment: &Assignment,
        factory: &mut dyn SurfaceFactory<S>,
    ) -> Result<ApplyReport, ShellError> {
        let layout = self
            .layouts
            .get(name)
            .cloned()
            .ok_or_else(|| ShellError::LayoutNotFound(name.to_string()))?;

        self.set_edit_mode(false);
        let report = apply::apply_layout(
            &mut self.registry,
            factory,
            &layout,
            assignment,
            self.screen,
        );
        self.sync_refreshers();
        Ok(report)
    }

    /// Make `id` the current view and place its windows.
    pub fn switch_view(
        &mut self,
        id: &str,
        factory: &mut dyn SurfaceFactory<S>,
    ) -> Result<ApplyReport, ShellError> {
        let view = self
            .views
            .switch_view(id)
            .map_err(|_| ShellError::ViewNotFound(id.to_string()))?
            .clone();

        info!(view = %id, "switching view");
        let report = apply::apply_view(&mut self.registry, factory, &view, self.screen);
        let edit_mode = self.edit_mode;
        for window_id in &report.shown {
            if let Some(surface) = self.registry.get_mut(window_id) {
                surface.set_edit_mode(edit_mode);
            }
        }
        self.sync_refreshers();
        Ok(report)
    }

    /// Save the visible windows as a layout with one slot per window.
    pub fn save_current_layout(
        &mut self,
        name: &str,
        description: &str,
        confirm_overwrite: impl FnOnce(SaveKind, &str) -> bool,
    ) -> Result<SaveOutcome, ShellError> {
        let visible = self.visible_windows();
        if visible.is_empty() {
            return Err(ShellError::NoVisibleWindows);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(ShellError::EmptyName);
        }
        if self.layouts.contains(name) && !confirm_overwrite(SaveKind::Layout, name) {
            debug!(layout = %name, "overwrite declined");
            return Ok(SaveOutcome::Cancelled);
        }

        let slots = capture_slots(&visible, self.screen);
        self.layouts.save_layout(name, description, slots)?;
        Ok(SaveOutcome::Saved {
            kind: SaveKind::Layout,
            key: name.to_string(),
        })
    }

    /// Save the visible windows, with zoom, as a view keyed by its derived id.
    pub fn save_current_view(
        &mut self,
        name: &str,
        description: &str,
        confirm_overwrite: impl FnOnce(SaveKind, &str) -> bool,
    ) -> Result<SaveOutcome, ShellError> {
        let visible = self.visible_windows();
        if visible.is_empty() {
            return Err(ShellError::NoVisibleWindows);
        }
        let name = name.trim();
        let id = derive_view_id(name);
        if id.is_empty() {
            return Err(ShellError::EmptyName);
        }
        if self.views.contains(&id) && !confirm_overwrite(SaveKind::View, name) {
            debug!(view = %id, "overwrite declined");
            return Ok(SaveOutcome::Cancelled);
        }

        let defs = capture_window_defs(&visible, self.screen);
        let (id, _) = self.views.save_view(Some(&id), name, description, "", defs)?;
        Ok(SaveOutcome::Saved {
            kind: SaveKind::View,
            key: id,
        })
    }

    /// Entry point for the save dialog.
    pub fn save(
        &mut self,
        request: &SaveRequest,
        confirm_overwrite: impl FnOnce(SaveKind, &str) -> bool,
    ) -> Result<SaveOutcome, ShellError> {
        match request.kind {
            SaveKind::View => {
                self.save_current_view(&request.name, &request.description, confirm_overwrite)
            }
            SaveKind::Layout => {
                self.save_current_layout(&request.name, &request.description, confirm_overwrite)
            }
        }
    }

    pub fn delete_layout(&mut self, name: &str) -> Result<(), ShellError> {
        self.layouts.delete_layout(name)?;
        Ok(())
    }

    pub fn delete_view(&mut self, id: &str) -> Result<(), ShellError> {
        self.views.delete_view(id)?;
        Ok(())
    }

    // -- Edit mode ------------------------------------------------------------

    pub fn toggle_edit_mode(&mut self) -> bool {
        self.set_edit_mode(!self.edit_mode);
        self.edit_mode
    }

    /// Broadcast edit mode to every open window.
    pub fn set_edit_mode(&mut self, enabled: bool) {
        if self.edit_mode == enabled {
            return;
        }
        self.edit_mode = enabled;
        if !enabled {
            self.drags.clear();
        }
        for (_, surface) in self.registry.iter_mut() {
            surface.set_edit_mode(enabled);
        }
        info!(enabled, "edit mode changed");
    }

    /// Set a pane's zoom, clamped to the edit limits. Returns the applied value.
    pub fn set_zoom(&mut self, id: &str, percent: u32) -> Result<u32, ShellError> {
        let percent = self.limits.clamp_zoom(percent);
        let surface = self
            .registry
            .get_mut(id)
            .ok_or_else(|| ShellError::UnknownWindow(id.to_string()))?;
        surface.set_zoom(percent);
        debug!(window_id = %id, percent, "zoom set");
        Ok(percent)
    }

    /// Pointer pressed on a pane's overlay. `local` is relative to the pane,
    /// `pointer` in screen pixels.
    pub fn overlay_pointer_down(&mut self, id: &str, local: (i32, i32), pointer: (i32, i32)) {
        if !self.edit_mode {
            return;
        }
        let Some(surface) = self.registry.get(id) else {
            return;
        };
        let geometry = surface.geometry();
        let kind = hit_test(
            local.0,
            local.1,
            geometry.width,
            geometry.height,
            self.limits.handle_size,
        );
        self.drags
            .insert(id.to_string(), OverlayDrag::begin(kind, pointer, geometry));
    }

    /// Pointer moved during an overlay drag. Returns the new geometry.
    pub fn overlay_pointer_move(&mut self, id: &str, pointer: (i32, i32)) -> Option<PixelRect> {
        let drag = self.drags.get(id)?;
        let rect = drag.update(pointer, self.limits.min_size);
        let surface = self.registry.get_mut(id)?;
        surface.set_geometry(rect);
        Some(rect)
    }

    pub fn overlay_pointer_up(&mut self, id: &str) {
        if self.drags.remove(id).is_some() {
            if let Some(surface) = self.registry.get(id) {
                debug!(window_id = %id, rect = %surface.geometry(), "overlay drag finished");
            }
        }
    }

    // -- Background refresh ---------------------------------------------------

    /// Advance every refresh engine and carry out what they ask for.
    pub fn poll_refresh(&mut self, now: Instant) -> Vec<(String, RefreshCommand)> {
        let mut issued = Vec::new();
        for (id, engine) in self.refreshers.iter_mut() {
            let Some(command) = engine.poll(now) else {
                continue;
            };
            let Some(surface) = self.registry.get_mut(id) else {
                engine.cancel();
                continue;
            };
            match command {
                RefreshCommand::BeginBackgroundLoad => {
                    if let Err(e) = surface.start_background_load() {
                        warn!(window_id = %id, "background load not started: {e}");
                        if engine.on_load_finished(false, now).is_some() {
                            surface.discard_background();
                        }
                    }
                }
                RefreshCommand::Swap => {
                    if !surface.swap_background() {
                        warn!(window_id = %id, "swap requested without a background view");
                    }
                    engine.finish_swap();
                }
                RefreshCommand::Discard => surface.discard_background(),
            }
            issued.push((id.clone(), command));
        }
        issued
    }

    pub fn on_background_progress(&mut self, id: &str, percent: u8) {
        if let Some(engine) = self.refreshers.get_mut(id) {
            engine.on_progress(percent);
        }
    }

    pub fn on_background_finished(&mut self, id: &str, ok: bool, now: Instant) {
        let Some(engine) = self.refreshers.get_mut(id) else {
            return;
        };
        if let Some(RefreshCommand::Discard) = engine.on_load_finished(ok, now) {
            if let Some(surface) = self.registry.get_mut(id) {
                surface.discard_background();
            }
        }
    }

    /// When the event loop next needs to wake for a refresh timer.
    pub fn next_refresh_deadline(&self) -> Option<Instant> {
        self.refreshers.values().map(RefreshEngine::next_deadline).min()
    }

    pub fn refresh_engine(&self, id: &str) -> Option<&RefreshEngine> {
        self.refreshers.get(id)
    }

    fn start_refresh(&mut self, id: &str) {
        let Some(secs) = self.registry.config(id).and_then(|c| c.refresh_secs) else {
            return;
        };
        let timings = RefreshTimings::from_config(&self.refresh, secs);
        info!(window_id = %id, interval = ?timings.interval, "background refresh enabled");
        self.refreshers
            .insert(id.to_string(), RefreshEngine::new(timings, Instant::now()));
    }

    /// Start engines for windows opened indirectly by layouts and views.
    fn sync_refreshers(&mut self) {
        for id in self.registry.open_ids() {
            if !self.refreshers.contains_key(&id) {
                self.start_refresh(&id);
            }
        }
    }
}
