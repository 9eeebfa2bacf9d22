//! Pane windows: one frameless winit window per configured pane, hosting a
//! foreground web view and, during a refresh, a hidden background one.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use vitrine_common::{PixelRect, ShellError};
use vitrine_config::WindowConfig;
use vitrine_shell::{PaneSurface, SurfaceFactory};
use vitrine_webview::ipc::{js_set_edit_mode, overlay_script, PROGRESS_SCRIPT};
use vitrine_webview::{fill_bounds, BrowserProfile, WebViewConfig, WebViewHandle, WebViewManager};
use wry::http::HeaderMap;

use super::types::pane_label;

/// Which of a pane's web views an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ViewRole {
    Foreground,
    Background,
}

/// Web view settings for a pane page. Background views capture popups too,
/// since a background view becomes the foreground after a swap.
fn pane_view_config(
    url: &str,
    visible: bool,
    headers: &HeaderMap,
    scripts: &[String],
    allowed_origins: &[String],
) -> WebViewConfig {
    WebViewConfig {
        url: Some(url.to_string()),
        visible,
        headers: headers.clone(),
        init_scripts: scripts.to_vec(),
        allowed_origins: allowed_origins.to_vec(),
        capture_popups: true,
        ..Default::default()
    }
}

/// State every pane and UI window builds its web views from.
pub(super) struct PaneShared {
    pub(super) profile: RefCell<BrowserProfile>,
    pub(super) manager: WebViewManager,
    /// Authorization header for pane loads, empty without credentials.
    pub(super) headers: HeaderMap,
    /// Progress reporter and edit overlay, injected into every pane page.
    pub(super) scripts: Vec<String>,
}

impl PaneShared {
    pub(super) fn new(
        profile: BrowserProfile,
        manager: WebViewManager,
        headers: HeaderMap,
        handle_size: i32,
        zoom_range: (u32, u32),
    ) -> Self {
        Self {
            profile: RefCell::new(profile),
            manager,
            headers,
            scripts: vec![
                PROGRESS_SCRIPT.to_string(),
                overlay_script(handle_size, zoom_range.0, zoom_range.1),
            ],
        }
    }

    fn build_pane_view(
        &self,
        window: &Window,
        label: &str,
        url: &str,
        visible: bool,
    ) -> Result<WebViewHandle, wry::Error> {
        let size = window.inner_size();
        let mut profile = self.profile.borrow_mut();
        let config = pane_view_config(
            url,
            visible,
            &self.headers,
            &self.scripts,
            profile.allowed_origins(),
        );
        self.manager.create(
            label,
            window,
            fill_bounds(size.width, size.height),
            config,
            &mut profile,
        )
    }

    /// Build a UI page web view. UI pages are local HTML and never restricted.
    pub(super) fn build_ui_view(
        &self,
        window: &Window,
        label: &str,
        html: String,
        transparent: bool,
    ) -> Result<WebViewHandle, wry::Error> {
        let size = window.inner_size();
        let config = WebViewConfig {
            html: Some(html),
            transparent,
            ..Default::default()
        };
        let mut profile = self.profile.borrow_mut();
        self.manager.create(
            label,
            window,
            fill_bounds(size.width, size.height),
            config,
            &mut profile,
        )
    }
}

pub(crate) struct PaneWindow {
    // Web views are declared before the window so they drop first.
    foreground: WebViewHandle,
    background: Option<WebViewHandle>,
    window: Arc<Window>,
    id: String,
    url: String,
    geometry: PixelRect,
    visible: bool,
    zoom: u32,
    edit_mode: bool,
    shared: Rc<PaneShared>,
}

impl PaneWindow {
    fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
        shared: Rc<PaneShared>,
    ) -> Result<Self, ShellError> {
        let g = config.geometry;
        let attrs = WindowAttributes::default()
            .with_title(format!("Vitrine - {}", config.id))
            .with_decorations(false)
            .with_visible(false)
            .with_position(PhysicalPosition::new(g.x, g.y))
            .with_inner_size(PhysicalSize::new(g.width.max(1) as u32, g.height.max(1) as u32));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| ShellError::WindowCreation {
                id: config.id.clone(),
                reason: e.to_string(),
            })?;

        let foreground = shared
            .build_pane_view(&window, &pane_label(&config.id), &config.url, true)
            .map_err(|e| ShellError::WindowCreation {
                id: config.id.clone(),
                reason: e.to_string(),
            })?;

        tracing::info!(window_id = %config.id, url = %config.url, rect = %g, "Pane window created");

        Ok(Self {
            foreground,
            background: None,
            window,
            id: config.id.clone(),
            url: config.url.clone(),
            geometry: g,
            visible: false,
            zoom: 100,
            edit_mode: false,
            shared,
        })
    }

    pub(super) fn window_id(&self) -> WindowId {
        self.window.id()
    }

    pub(super) fn role_of(&self, serial: u64) -> Option<ViewRole> {
        if self.foreground.serial() == serial {
            Some(ViewRole::Foreground)
        } else if self.background.as_ref().is_some_and(|bg| bg.serial() == serial) {
            Some(ViewRole::Background)
        } else {
            None
        }
    }

    /// Keep web views covering the client area after a resize.
    pub(super) fn fit_views(&self, size: PhysicalSize<u32>) {
        let bounds = fill_bounds(size.width, size.height);
        let views = std::iter::once(&self.foreground).chain(self.background.as_ref());
        for view in views {
            if let Err(e) = view.set_bounds(bounds) {
                tracing::warn!(window_id = %self.id, error = %e, "Failed to resize web view");
            }
        }
    }

    /// Navigate the foreground in place (popups end up here).
    pub(super) fn load_in_place(&mut self, url: &str) {
        if let Err(e) = self.foreground.load_url(url) {
            tracing::warn!(window_id = %self.id, url, error = %e, "Failed to load URL");
        }
    }

    /// Zoom and the overlay do not survive a navigation; put them back.
    pub(super) fn restore_page_state(&self) {
        self.apply_page_state(&self.foreground);
    }

    fn apply_page_state(&self, view: &WebViewHandle) {
        if let Err(e) = view.zoom(f64::from(self.zoom) / 100.0) {
            tracing::warn!(window_id = %self.id, error = %e, "Failed to set zoom");
        }
        if let Err(e) = view.evaluate_script(&js_set_edit_mode(self.edit_mode, self.zoom)) {
            tracing::warn!(window_id = %self.id, error = %e, "Failed to update edit overlay");
        }
    }
}

impl PaneSurface for PaneWindow {
    fn geometry(&self) -> PixelRect {
        self.geometry
    }

    fn set_geometry(&mut self, rect: PixelRect) {
        self.geometry = rect;
        let size = PhysicalSize::new(rect.width.max(1) as u32, rect.height.max(1) as u32);
        self.window
            .set_outer_position(PhysicalPosition::new(rect.x, rect.y));
        let _ = self.window.request_inner_size(size);
        self.fit_views(size);
    }

    fn show(&mut self) {
        self.window.set_visible(true);
        self.visible = true;
    }

    fn hide(&mut self) {
        self.window.set_visible(false);
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn reload(&mut self) {
        if let Err(e) = self.foreground.reload() {
            tracing::warn!(window_id = %self.id, error = %e, "Reload failed");
        }
    }

    fn zoom(&self) -> u32 {
        self.zoom
    }

    fn set_zoom(&mut self, percent: u32) {
        self.zoom = percent;
        if let Err(e) = self.foreground.zoom(f64::from(percent) / 100.0) {
            tracing::warn!(window_id = %self.id, error = %e, "Failed to set zoom");
        }
    }

    fn set_edit_mode(&mut self, enabled: bool) {
        self.edit_mode = enabled;
        let js = js_set_edit_mode(enabled, self.zoom);
        if let Err(e) = self.foreground.evaluate_script(&js) {
            tracing::warn!(window_id = %self.id, error = %e, "Failed to update edit overlay");
        }
    }

    fn start_background_load(&mut self) -> Result<(), ShellError> {
        self.discard_background();
        let view = self
            .shared
            .build_pane_view(&self.window, &pane_label(&self.id), &self.url, false)
            .map_err(|e| ShellError::WindowCreation {
                id: self.id.clone(),
                reason: format!("background view: {e}"),
            })?;
        if let Err(e) = view.zoom(f64::from(self.zoom) / 100.0) {
            tracing::debug!(window_id = %self.id, error = %e, "Background zoom not applied");
        }
        tracing::debug!(window_id = %self.id, serial = view.serial(), "Background load started");
        self.background = Some(view);
        Ok(())
    }

    fn swap_background(&mut self) -> bool {
        let Some(incoming) = self.background.take() else {
            return false;
        };
        if let Err(e) = incoming.set_visible(true) {
            tracing::warn!(window_id = %self.id, error = %e, "Failed to show refreshed view");
        }
        self.apply_page_state(&incoming);
        let outgoing = std::mem::replace(&mut self.foreground, incoming);
        let _ = outgoing.set_visible(false);
        drop(outgoing);
        tracing::info!(window_id = %self.id, "Refreshed content swapped in");
        true
    }

    fn discard_background(&mut self) {
        if let Some(view) = self.background.take() {
            tracing::debug!(window_id = %self.id, serial = view.serial(), "Background view discarded");
        }
    }

    fn close(&mut self) {
        self.discard_background();
        self.window.set_visible(false);
        self.visible = false;
        tracing::info!(window_id = %self.id, "Pane window closed");
    }
}

/// Creates pane windows for the shell. Lives for one shell call.
pub(super) struct PaneFactory<'a> {
    event_loop: &'a ActiveEventLoop,
    shared: Rc<PaneShared>,
}

impl<'a> PaneFactory<'a> {
    pub(super) fn new(event_loop: &'a ActiveEventLoop, shared: &Rc<PaneShared>) -> Self {
        Self {
            event_loop,
            shared: Rc::clone(shared),
        }
    }
}

impl SurfaceFactory<PaneWindow> for PaneFactory<'_> {
    fn create(&mut self, config: &WindowConfig) -> Result<PaneWindow, ShellError> {
        PaneWindow::create(self.event_loop, config, Rc::clone(&self.shared))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreground_and_background_views_capture_popups() {
        let scripts = vec!["/* progress */".to_string()];
        let origins = vec!["https://bi.example/".to_string()];
        for visible in [true, false] {
            let config = pane_view_config(
                "https://bi.example/r/1",
                visible,
                &HeaderMap::new(),
                &scripts,
                &origins,
            );
            assert!(config.capture_popups);
            assert_eq!(config.visible, visible);
            assert_eq!(config.url.as_deref(), Some("https://bi.example/r/1"));
            assert_eq!(config.init_scripts, scripts);
            assert_eq!(config.allowed_origins, origins);
        }
    }
}
