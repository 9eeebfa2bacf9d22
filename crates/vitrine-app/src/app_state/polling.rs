//! Web view event draining and refresh timer scheduling.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use vitrine_shell::RefreshCommand;
use vitrine_webview::{PageLoadState, WebViewEvent};

use super::core::VitrineApp;
use super::panes::ViewRole;
use super::types::{Target, POLL_INTERVAL};

impl VitrineApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events(event_loop);
            self.open_pending_ui(event_loop);
        }

        for (id, command) in self.shell.poll_refresh(Instant::now()) {
            match command {
                RefreshCommand::Swap => tracing::debug!(window_id = %id, "Refreshed page swapped in"),
                other => tracing::debug!(window_id = %id, ?other, "Refresh step"),
            }
        }

        let next_poll = Instant::now() + POLL_INTERVAL;
        let wake = self
            .shell
            .next_refresh_deadline()
            .map_or(next_poll, |deadline| deadline.min(next_poll));
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
    }

    /// Drain and dispatch everything the web views reported since last poll.
    fn poll_webview_events(&mut self, event_loop: &ActiveEventLoop) {
        for event in self.shared.manager.drain_events() {
            match event {
                WebViewEvent::PageLoad {
                    label,
                    view,
                    state,
                    url,
                } => {
                    tracing::debug!(%label, view, ?state, %url, "Page load");
                    if state == PageLoadState::Finished {
                        self.on_page_finished(&label, view);
                    }
                }
                WebViewEvent::IpcMessage { label, view, body } => {
                    self.handle_ipc_message(event_loop, &label, view, &body);
                }
                WebViewEvent::NewWindowRequested { label, view, url } => {
                    self.on_popup(&label, view, &url);
                }
                WebViewEvent::NavigationBlocked { label, url } => {
                    tracing::info!(%label, %url, "Navigation blocked");
                }
            }
        }
    }

    /// Popups from a pane's visible page load in place. A background view's
    /// popups are dropped; it captures its own once swapped in.
    fn on_popup(&mut self, label: &str, view: u64, url: &str) {
        let Some(Target::Pane(id)) = Target::parse(label) else {
            tracing::debug!(%label, %url, "Popup ignored");
            return;
        };
        let Some(pane) = self.shell.registry_mut().get_mut(&id) else {
            return;
        };
        match pane.role_of(view) {
            Some(ViewRole::Foreground) => {
                tracing::info!(window_id = %id, %url, "Popup opened in place");
                pane.load_in_place(url);
            }
            _ => tracing::debug!(window_id = %id, %url, "Popup from background view dropped"),
        }
    }

    fn on_page_finished(&mut self, label: &str, view: u64) {
        let Some(Target::Pane(id)) = Target::parse(label) else {
            return;
        };
        let Some(pane) = self.shell.registry().get(&id) else {
            return;
        };
        match pane.role_of(view) {
            Some(ViewRole::Foreground) => pane.restore_page_state(),
            Some(ViewRole::Background) => {
                self.shell.on_background_finished(&id, true, Instant::now())
            }
            // Swapped out or discarded meanwhile.
            None => {}
        }
    }
}
