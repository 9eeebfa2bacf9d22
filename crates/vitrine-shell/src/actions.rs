//! Floating-menu actions and their dispatch table.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

/// Every action the floating menu can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ShowViews,
    OpenScreenManager,
    ReloadAll,
    SaveView,
    ToggleEditMode,
    Quit,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::ShowViews,
        Action::OpenScreenManager,
        Action::ReloadAll,
        Action::SaveView,
        Action::ToggleEditMode,
        Action::Quit,
    ];

    /// Stable id used by the presentation layer.
    pub fn id(self) -> &'static str {
        match self {
            Action::ShowViews => "show_views",
            Action::OpenScreenManager => "open_screen_manager",
            Action::ReloadAll => "reload_all",
            Action::SaveView => "save_view",
            Action::ToggleEditMode => "toggle_edit_mode",
            Action::Quit => "quit",
        }
    }

    pub fn from_id(id: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|a| a.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::ShowViews => "Views",
            Action::OpenScreenManager => "Screen Manager",
            Action::ReloadAll => "Reload All",
            Action::SaveView => "Save",
            Action::ToggleEditMode => "Edit Mode",
            Action::Quit => "Quit",
        }
    }

    /// Glyph shown on the menu button.
    pub fn icon(self) -> &'static str {
        match self {
            Action::ShowViews => "\u{1F4CA}",
            Action::OpenScreenManager => "\u{2630}",
            Action::ReloadAll => "\u{21BB}",
            Action::SaveView => "\u{2713}",
            Action::ToggleEditMode => "\u{270E}",
            Action::Quit => "Q",
        }
    }
}

/// Menu contents for the current mode, top to bottom.
pub fn menu_actions(edit_mode: bool) -> Vec<Action> {
    if edit_mode {
        vec![
            Action::OpenScreenManager,
            Action::ReloadAll,
            Action::SaveView,
            Action::ToggleEditMode,
            Action::Quit,
        ]
    } else {
        vec![
            Action::ShowViews,
            Action::OpenScreenManager,
            Action::ReloadAll,
            Action::ToggleEditMode,
            Action::Quit,
        ]
    }
}

/// Maps actions to handlers on a context `C`.
///
/// Handlers are plain function pointers so one can be looked up and then
/// called with the context that owns the registry.
pub struct ActionRegistry<C> {
    handlers: HashMap<Action, fn(&mut C)>,
}

impl<C> ActionRegistry<C> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register(&mut self, action: Action, handler: fn(&mut C)) -> &mut Self {
        self.handlers.insert(action, handler);
        self
    }

    pub fn handler(&self, action: Action) -> Option<fn(&mut C)> {
        self.handlers.get(&action).copied()
    }

    /// Resolve an id coming from the presentation layer.
    pub fn resolve(&self, id: &str) -> Option<fn(&mut C)> {
        let Some(action) = Action::from_id(id) else {
            warn!(action = %id, "unknown action id");
            return None;
        };
        let handler = self.handler(action);
        if handler.is_none() {
            warn!(action = %id, "no handler registered");
        }
        handler
    }

    /// Look up and run the handler for `id`. Returns whether one ran.
    pub fn dispatch(&self, id: &str, ctx: &mut C) -> bool {
        match self.resolve(id) {
            Some(handler) => {
                debug!(action = %id, "dispatching action");
                handler(ctx);
                true
            }
            None => false,
        }
    }

    pub fn is_registered(&self, action: Action) -> bool {
        self.handlers.contains_key(&action)
    }
}

impl<C> Default for ActionRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for action in Action::ALL {
            assert_eq!(Action::from_id(action.id()), Some(action));
            assert!(!action.label().is_empty());
            assert!(!action.icon().is_empty());
        }
        assert_eq!(Action::from_id("nope"), None);
    }

    #[test]
    fn menu_depends_on_mode() {
        let normal = menu_actions(false);
        assert_eq!(normal[0], Action::ShowViews);
        assert!(!normal.contains(&Action::SaveView));

        let edit = menu_actions(true);
        assert!(edit.contains(&Action::SaveView));
        assert!(!edit.contains(&Action::ShowViews));
        assert_eq!(edit.last(), Some(&Action::Quit));
    }

    #[test]
    fn serializes_as_id() {
        let json = serde_json::to_string(&Action::OpenScreenManager).unwrap();
        assert_eq!(json, "\"open_screen_manager\"");
    }

    #[derive(Default)]
    struct Counter {
        reloads: u32,
        quit: bool,
    }

    #[test]
    fn dispatch_runs_registered_handler() {
        let mut registry = ActionRegistry::<Counter>::new();
        registry
            .register(Action::ReloadAll, |c| c.reloads += 1)
            .register(Action::Quit, |c| c.quit = true);

        let mut ctx = Counter::default();
        assert!(registry.dispatch("reload_all", &mut ctx));
        assert!(registry.dispatch("reload_all", &mut ctx));
        assert!(registry.dispatch("quit", &mut ctx));
        assert!(!registry.dispatch("save_view", &mut ctx));
        assert!(!registry.dispatch("bogus", &mut ctx));

        assert_eq!(ctx.reloads, 2);
        assert!(ctx.quit);
        assert!(registry.is_registered(Action::Quit));
        assert!(!registry.is_registered(Action::SaveView));
    }
}
