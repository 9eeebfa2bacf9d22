//! Startup: detect the screen, then either enter the requested view or
//! show the view selector.

use winit::event_loop::ActiveEventLoop;

use vitrine_common::ScreenSize;

use super::core::VitrineApp;
use super::types::UiKind;

impl VitrineApp {
    /// Lay panes out against the primary monitor. Keeps the default size
    /// when no monitor is reported.
    pub(super) fn detect_screen(&mut self, event_loop: &ActiveEventLoop) {
        let Some(monitor) = event_loop.primary_monitor() else {
            tracing::warn!(screen = %self.shell.screen(), "No primary monitor, using default size");
            return;
        };
        let size = monitor.size();
        match ScreenSize::new(size.width, size.height) {
            Some(screen) => {
                tracing::info!(%screen, scale = monitor.scale_factor(), "Screen detected");
                self.shell.set_screen(screen);
            }
            None => tracing::warn!("Primary monitor reports a zero size, using default"),
        }
    }

    pub(super) fn start(&mut self, event_loop: &ActiveEventLoop) {
        self.detect_screen(event_loop);

        match self.startup_view.take() {
            Some(id) if self.shell.views().contains(&id) => {
                tracing::info!(view = %id, "Opening startup view");
                self.enter_view(event_loop, &id);
            }
            Some(id) => {
                tracing::warn!(view = %id, "Unknown startup view, showing selector");
                self.open_ui(event_loop, UiKind::Selector);
            }
            None => self.open_ui(event_loop, UiKind::Selector),
        }
    }
}
