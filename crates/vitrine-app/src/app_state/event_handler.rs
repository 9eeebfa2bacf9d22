//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::VitrineApp;

impl ApplicationHandler for VitrineApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.started {
            return;
        }
        self.started = true;
        self.start(event_loop);
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(id) = self.pane_for(window_id) {
                    tracing::info!(window_id = %id, "Pane close requested");
                    self.shell.close_window(&id);
                } else if let Some(kind) = self.ui_kind_for(window_id) {
                    self.close_ui_requested(kind);
                }
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(id) = self.pane_for(window_id) {
                    if let Some(pane) = self.shell.registry().get(&id) {
                        pane.fit_views(size);
                    }
                } else if let Some(window) = self
                    .ui_kind_for(window_id)
                    .and_then(|kind| self.ui_window(kind))
                {
                    window.fit(size);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

impl VitrineApp {
    /// Close every pane and presentation window. Safe to call twice.
    pub(super) fn shutdown(&mut self) {
        if self.shell.registry().open_count() == 0 && self.ui.is_empty() {
            return;
        }
        tracing::info!("Initiating shutdown");
        self.pending_ui.clear();
        self.shell.close_all();
        self.ui.clear();
        tracing::info!("Shutdown complete");
    }
}
