//! Presentation windows: view selector, floating menu, screen manager and
//! save dialog. Each is a small winit window hosting one local HTML page.

use std::sync::Arc;

use serde_json::json;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId, WindowLevel};

use vitrine_webview::{fill_bounds, WebViewHandle};

use crate::ui;

use super::core::VitrineApp;
use super::types::UiKind;

/// Margin of the floating menu from the top-left screen corner.
const MENU_MARGIN: i32 = 10;

pub(super) struct UiWindow {
    // Declared before the window so it drops first.
    view: WebViewHandle,
    window: Arc<Window>,
}

impl UiWindow {
    pub(super) fn window_id(&self) -> WindowId {
        self.window.id()
    }

    pub(super) fn send(&self, kind: &str, payload: &serde_json::Value) {
        if let Err(e) = self.view.send_ipc(kind, payload) {
            tracing::warn!(label = %self.view.label(), kind, error = %e, "Failed to send IPC");
        }
    }

    pub(super) fn fit(&self, size: PhysicalSize<u32>) {
        if let Err(e) = self.view.set_bounds(fill_bounds(size.width, size.height)) {
            tracing::warn!(label = %self.view.label(), error = %e, "Failed to resize web view");
        }
    }

    /// Start an OS-driven move while the mouse button is held.
    pub(super) fn drag(&self) {
        if let Err(e) = self.window.drag_window() {
            tracing::debug!(label = %self.view.label(), error = %e, "Window drag not started");
        }
    }

    pub(super) fn resize_logical(&self, width: f64, height: f64) {
        let size = LogicalSize::new(width.max(1.0), height.max(1.0));
        if let Some(applied) = self.window.request_inner_size(size) {
            self.fit(applied);
        }
    }

    fn focus(&self) {
        self.window.focus_window();
        if let Err(e) = self.view.focus() {
            tracing::debug!(label = %self.view.label(), error = %e, "Web view focus failed");
        }
    }
}

/// Top-left corner for a presentation window: the menu sits in the corner,
/// everything else is centered on the screen.
pub(super) fn ui_position(
    kind: UiKind,
    screen: (u32, u32),
    scale_factor: f64,
) -> PhysicalPosition<i32> {
    if kind == UiKind::Menu {
        return PhysicalPosition::new(MENU_MARGIN, MENU_MARGIN);
    }
    let (w, h) = kind.size();
    let w = (w * scale_factor).round() as i32;
    let h = (h * scale_factor).round() as i32;
    PhysicalPosition::new(
        ((screen.0 as i32 - w) / 2).max(0),
        ((screen.1 as i32 - h) / 2).max(0),
    )
}

impl VitrineApp {
    /// Open a presentation window, or focus it when already open.
    pub(super) fn open_ui(&mut self, event_loop: &ActiveEventLoop, kind: UiKind) {
        if let Some(existing) = self.ui.get(&kind) {
            existing.focus();
            return;
        }

        let scale_factor = event_loop
            .primary_monitor()
            .map(|m| m.scale_factor())
            .unwrap_or(1.0);
        let screen = self.shell.screen();
        let (width, height) = kind.size();

        let mut attrs = WindowAttributes::default()
            .with_title(kind.title())
            .with_inner_size(LogicalSize::new(width, height))
            .with_position(ui_position(
                kind,
                (screen.width(), screen.height()),
                scale_factor,
            ))
            .with_window_level(WindowLevel::AlwaysOnTop);
        if kind.floating() {
            attrs = attrs
                .with_decorations(false)
                .with_transparent(true)
                .with_resizable(false);
        }

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!(?kind, "Failed to create window: {e}");
                return;
            }
        };

        let html = self.ui_page(kind);
        let view = match self
            .shared
            .build_ui_view(&window, &kind.label(), html, kind.floating())
        {
            Ok(view) => view,
            Err(e) => {
                tracing::error!(?kind, "Failed to create web view: {e}");
                return;
            }
        };

        tracing::info!(?kind, "Presentation window opened");
        self.ui.insert(kind, UiWindow { view, window });
    }

    pub(super) fn close_ui(&mut self, kind: UiKind) {
        if self.ui.remove(&kind).is_some() {
            tracing::debug!(?kind, "Presentation window closed");
        }
    }

    /// Queue a window to open on the next poll, where the event loop is at hand.
    pub(super) fn request_ui(&mut self, kind: UiKind) {
        if !self.pending_ui.contains(&kind) {
            self.pending_ui.push(kind);
        }
    }

    pub(super) fn open_pending_ui(&mut self, event_loop: &ActiveEventLoop) {
        for kind in std::mem::take(&mut self.pending_ui) {
            self.open_ui(event_loop, kind);
        }
    }

    pub(super) fn send_ui(&self, kind: UiKind, msg: &str, payload: serde_json::Value) {
        if let Some(window) = self.ui.get(&kind) {
            window.send(msg, &payload);
        }
    }

    pub(super) fn ui_kind_for(&self, window_id: WindowId) -> Option<UiKind> {
        self.ui
            .iter()
            .find(|(_, w)| w.window_id() == window_id)
            .map(|(kind, _)| *kind)
    }

    pub(super) fn ui_window(&self, kind: UiKind) -> Option<&UiWindow> {
        self.ui.get(&kind)
    }

    /// Push the action set for the current mode to the menu.
    pub(super) fn refresh_menu(&self) {
        let actions = ui::action_entries(&self.shell.menu_actions());
        self.send_ui(UiKind::Menu, "set_actions", json!(actions));
    }

    pub(super) fn collapse_menu(&self) {
        self.send_ui(UiKind::Menu, "collapse", serde_json::Value::Null);
    }

    /// Refresh the screen manager's layout list after a change.
    pub(super) fn refresh_screen_manager(&self) {
        let layouts = ui::layout_entries(self.shell.layouts());
        self.send_ui(UiKind::ScreenManager, "set_layouts", json!(layouts));
    }

    fn ui_page(&self, kind: UiKind) -> String {
        match kind {
            UiKind::Selector => ui::selector_page(&ui::view_entries(self.shell.views())),
            UiKind::Menu => ui::menu_page(&ui::action_entries(&self.shell.menu_actions())),
            UiKind::ScreenManager => {
                let windows: Vec<String> = self
                    .shell
                    .registry()
                    .configs()
                    .iter()
                    .map(|c| c.id.clone())
                    .collect();
                ui::screen_manager_page(&ui::layout_entries(self.shell.layouts()), &windows)
            }
            UiKind::SaveDialog => {
                ui::save_dialog_page(&self.shell.views().ids(), &self.shell.layouts().names())
            }
        }
    }

    /// Find the pane owning a winit window.
    pub(super) fn pane_for(&self, window_id: WindowId) -> Option<String> {
        self.shell
            .registry()
            .iter()
            .find(|(_, pane)| pane.window_id() == window_id)
            .map(|(id, _)| id.clone())
    }
}
