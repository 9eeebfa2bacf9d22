//! Floating-menu action handlers.

use vitrine_shell::{Action, ActionRegistry};

use super::core::VitrineApp;
use super::dialogs;
use super::types::UiKind;

pub(super) fn build_registry() -> ActionRegistry<VitrineApp> {
    let mut registry = ActionRegistry::new();
    registry
        .register(Action::ShowViews, VitrineApp::show_views_menu)
        .register(Action::OpenScreenManager, |app| {
            app.collapse_menu();
            app.request_ui(UiKind::ScreenManager);
        })
        .register(Action::ReloadAll, |app| {
            app.shell.reload_all();
            app.collapse_menu();
        })
        .register(Action::SaveView, |app| {
            app.collapse_menu();
            if app.shell.visible_windows().is_empty() {
                dialogs::warn("No Windows", "There are no visible windows to save.");
                return;
            }
            app.request_ui(UiKind::SaveDialog);
        })
        .register(Action::ToggleEditMode, |app| {
            app.shell.toggle_edit_mode();
            app.refresh_menu();
            app.collapse_menu();
        })
        .register(Action::Quit, |app| {
            tracing::info!("Quit requested");
            app.should_exit = true;
        });
    registry
}
