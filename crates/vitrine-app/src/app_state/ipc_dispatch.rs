//! IPC message validation and dispatch from web views to the shell.

use winit::event_loop::ActiveEventLoop;

use vitrine_shell::PaneSurface;
use vitrine_webview::{IpcMessage, PaneMessage};

use crate::ui::{self, IdPayload, SizePayload};

use super::core::VitrineApp;
use super::panes::ViewRole;
use super::types::{Target, UiKind};

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Message kinds the presentation pages may send.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_UI_KINDS: &[&str] = &[
    "action",
    "select_view",
    "open_all",
    "apply_layout",
    "delete_layout",
    "delete_view",
    "save",
    "close",
    "drag_window",
    "menu_resize",
];

/// Check whether a presentation-page message kind is in the allowlist.
pub fn is_ui_kind_allowed(kind: &str) -> bool {
    ALLOWED_UI_KINDS.contains(&kind)
}

// =============================================================================
// DISPATCH
// =============================================================================

impl VitrineApp {
    /// Handle a single IPC message from a web view.
    pub(super) fn handle_ipc_message(
        &mut self,
        event_loop: &ActiveEventLoop,
        label: &str,
        view: u64,
        body: &str,
    ) {
        match Target::parse(label) {
            Some(Target::Pane(id)) => self.handle_pane_message(&id, view, body),
            Some(Target::Ui(kind)) => self.handle_ui_message(event_loop, kind, body),
            None => tracing::warn!(%label, "IPC message from unknown web view"),
        }
    }

    /// Messages from the scripts injected into pane pages. Pages are remote
    /// content, so anything that does not parse is dropped.
    fn handle_pane_message(&mut self, id: &str, view: u64, body: &str) {
        let Some(msg) = PaneMessage::from_json(body) else {
            tracing::debug!(window_id = %id, body_len = body.len(), "Pane message ignored");
            return;
        };
        let Some(pane) = self.shell.registry().get(id) else {
            return;
        };
        let role = pane.role_of(view);
        let geometry = pane.geometry();
        let origin = (geometry.x, geometry.y);

        match (role, msg) {
            (Some(ViewRole::Background), PaneMessage::Progress { percent }) => {
                self.shell.on_background_progress(id, percent);
            }
            (Some(ViewRole::Foreground), PaneMessage::OverlayDown { x, y }) => {
                self.shell
                    .overlay_pointer_down(id, (x, y), (origin.0 + x, origin.1 + y));
            }
            (Some(ViewRole::Foreground), PaneMessage::OverlayMove { x, y }) => {
                self.shell.overlay_pointer_move(id, (origin.0 + x, origin.1 + y));
            }
            (Some(ViewRole::Foreground), PaneMessage::OverlayUp) => {
                self.shell.overlay_pointer_up(id);
            }
            (Some(ViewRole::Foreground), PaneMessage::Zoom { percent }) => {
                if let Err(e) = self.shell.set_zoom(id, percent) {
                    tracing::warn!(window_id = %id, "Zoom failed: {e}");
                }
            }
            // Foreground progress and stale views carry nothing for us.
            _ => {}
        }
    }

    fn handle_ui_message(&mut self, event_loop: &ActiveEventLoop, kind: UiKind, body: &str) {
        let msg = match IpcMessage::from_json(body) {
            Some(m) => m,
            None => {
                tracing::warn!(
                    ?kind,
                    body_len = body.len(),
                    "IPC message rejected: failed to parse"
                );
                return;
            }
        };

        if !is_ui_kind_allowed(&msg.kind) {
            tracing::warn!(?kind, msg_kind = %msg.kind, "IPC message rejected: unknown kind");
            return;
        }

        tracing::debug!(?kind, msg_kind = %msg.kind, "IPC message dispatched");

        match msg.kind.as_str() {
            "action" => {
                let Some(IdPayload { id }) = ui::parse_payload(&msg.payload) else {
                    return;
                };
                match self.actions.resolve(&id) {
                    Some(handler) => handler(self),
                    None => tracing::warn!(action = %id, "Unknown menu action"),
                }
            }
            "select_view" => {
                if let Some(IdPayload { id }) = ui::parse_payload(&msg.payload) {
                    self.enter_view(event_loop, &id);
                }
            }
            "open_all" => self.enter_all(event_loop),
            "apply_layout" => self.apply_layout_from_ui(event_loop, &msg.payload),
            "delete_layout" => self.delete_layout_from_ui(&msg.payload),
            "delete_view" => self.delete_view_from_ui(&msg.payload),
            "save" => self.save_from_ui(&msg.payload),
            "close" => self.close_ui_requested(kind),
            "drag_window" => {
                if let Some(window) = self.ui_window(kind) {
                    window.drag();
                }
            }
            "menu_resize" => {
                let Some(SizePayload { width, height }) = ui::parse_payload(&msg.payload) else {
                    return;
                };
                if let Some(window) = self.ui_window(kind) {
                    window.resize_logical(width, height);
                }
            }
            _ => {}
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowlist_accepts_page_messages() {
        for kind in [
            "action",
            "select_view",
            "open_all",
            "apply_layout",
            "delete_layout",
            "delete_view",
            "save",
            "close",
            "drag_window",
            "menu_resize",
        ] {
            assert!(is_ui_kind_allowed(kind), "{kind} should be allowed");
        }
    }

    #[test]
    fn allowlist_rejects_unknown() {
        assert!(!is_ui_kind_allowed("progress"));
        assert!(!is_ui_kind_allowed("eval"));
        assert!(!is_ui_kind_allowed(""));
    }

    #[test]
    fn allowlist_rejects_lookalikes() {
        assert!(!is_ui_kind_allowed("Action"));
        assert!(!is_ui_kind_allowed("save "));
        assert!(!is_ui_kind_allowed("save\0"));
        assert!(!is_ui_kind_allowed("close; quit"));
    }
}
