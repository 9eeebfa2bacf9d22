//! Commands coming from the presentation windows.

use serde_json::{json, Value};
use winit::event_loop::ActiveEventLoop;

use vitrine_common::ShellError;
use vitrine_shell::{SaveKind, SaveOutcome};

use crate::ui::{self, ApplyLayoutPayload, IdPayload, NamePayload, SavePayload};

use super::core::VitrineApp;
use super::dialogs;
use super::panes::PaneFactory;
use super::types::UiKind;

impl VitrineApp {
    /// Expand the menu's view list.
    pub(super) fn show_views_menu(&mut self) {
        let views = ui::view_entries(self.shell.views());
        let current = self.shell.views().current_view_id();
        self.send_ui(
            UiKind::Menu,
            "show_views",
            json!({ "views": views, "current": current }),
        );
    }

    /// Switch to a saved view and bring up the floating menu.
    pub(super) fn enter_view(&mut self, event_loop: &ActiveEventLoop, id: &str) {
        let mut factory = PaneFactory::new(event_loop, &self.shared);
        match self.shell.switch_view(id, &mut factory) {
            Ok(report) => {
                tracing::info!(
                    view = %id,
                    shown = report.shown.len(),
                    skipped = report.skipped.len(),
                    "View applied"
                );
                self.close_ui(UiKind::Selector);
                self.open_ui(event_loop, UiKind::Menu);
                self.refresh_menu();
                self.collapse_menu();
            }
            Err(e) => {
                tracing::error!(view = %id, "View switch failed: {e}");
                dialogs::error("View Error", &format!("Could not open view '{id}': {e}"));
            }
        }
    }

    /// Open every configured window at its configured geometry.
    pub(super) fn enter_all(&mut self, event_loop: &ActiveEventLoop) {
        let mut factory = PaneFactory::new(event_loop, &self.shared);
        let opened = self.shell.open_all(&mut factory);
        tracing::info!(opened, "Opened all windows");
        self.close_ui(UiKind::Selector);
        self.open_ui(event_loop, UiKind::Menu);
    }

    pub(super) fn apply_layout_from_ui(&mut self, event_loop: &ActiveEventLoop, payload: &Value) {
        let Some(req) = ui::parse_payload::<ApplyLayoutPayload>(payload) else {
            tracing::warn!("apply_layout: malformed payload");
            return;
        };
        let mut factory = PaneFactory::new(event_loop, &self.shared);
        match self
            .shell
            .apply_layout(&req.layout, &req.assignment, &mut factory)
        {
            Ok(report) => {
                tracing::info!(
                    layout = %req.layout,
                    shown = report.shown.len(),
                    skipped = report.skipped.len(),
                    "Layout applied"
                );
                self.close_ui(UiKind::ScreenManager);
                self.refresh_menu();
            }
            Err(e) => {
                tracing::error!(layout = %req.layout, "Layout apply failed: {e}");
                dialogs::error("Layout Error", &e.to_string());
            }
        }
    }

    pub(super) fn delete_layout_from_ui(&mut self, payload: &Value) {
        let Some(NamePayload { name }) = ui::parse_payload(payload) else {
            tracing::warn!("delete_layout: malformed payload");
            return;
        };
        if !dialogs::confirm(
            "Delete Layout",
            &format!("Delete the layout '{name}'? This cannot be undone."),
        ) {
            return;
        }
        match self.shell.delete_layout(&name) {
            Ok(()) => self.refresh_screen_manager(),
            Err(e) => {
                tracing::error!(layout = %name, "Layout delete failed: {e}");
                dialogs::error("Delete Failed", &e.to_string());
            }
        }
    }

    pub(super) fn delete_view_from_ui(&mut self, payload: &Value) {
        let Some(IdPayload { id }) = ui::parse_payload(payload) else {
            tracing::warn!("delete_view: malformed payload");
            return;
        };
        let name = self
            .shell
            .views()
            .get(&id)
            .map_or_else(|| id.clone(), |view| view.name.clone());
        if !dialogs::confirm(
            "Delete View",
            &format!("Delete the view '{name}'? This cannot be undone."),
        ) {
            return;
        }
        match self.shell.delete_view(&id) {
            Ok(()) => {
                let views = ui::view_entries(self.shell.views());
                self.send_ui(UiKind::Selector, "set_views", json!({ "views": views }));
            }
            Err(e) => {
                tracing::error!(view = %id, "View delete failed: {e}");
                dialogs::error("Delete Failed", &e.to_string());
            }
        }
    }

    pub(super) fn save_from_ui(&mut self, payload: &Value) {
        let Some(request) = ui::parse_payload::<SavePayload>(payload).and_then(SavePayload::into_request)
        else {
            tracing::warn!("save: malformed payload");
            return;
        };

        match self.shell.save(&request, dialogs::confirm_overwrite) {
            Ok(SaveOutcome::Saved { kind, key }) => {
                self.close_ui(UiKind::SaveDialog);
                let what = match kind {
                    SaveKind::View => "View",
                    SaveKind::Layout => "Layout",
                };
                dialogs::info("Saved", &format!("{what} '{key}' saved."));
            }
            // Overwrite declined: leave the dialog up for another name.
            Ok(SaveOutcome::Cancelled) => {}
            Err(ShellError::NoVisibleWindows) => {
                self.close_ui(UiKind::SaveDialog);
                dialogs::warn("No Windows", "There are no visible windows to save.");
            }
            Err(ShellError::EmptyName) => {
                dialogs::warn("Name Required", "Please enter a name.");
            }
            Err(e) => {
                tracing::error!(name = %request.name, "Save failed: {e}");
                dialogs::error("Save Failed", &e.to_string());
            }
        }
    }

    /// A presentation window asked to close, by button or title bar.
    pub(super) fn close_ui_requested(&mut self, kind: UiKind) {
        match kind {
            UiKind::Selector if self.shell.registry().open_count() == 0 => {
                tracing::info!("Selector closed with nothing open, exiting");
                self.should_exit = true;
            }
            UiKind::Menu => {
                tracing::info!("Menu closed, exiting");
                self.should_exit = true;
            }
            _ => self.close_ui(kind),
        }
    }
}
