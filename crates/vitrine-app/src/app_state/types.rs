//! Internal types and constants for the app state module.

use std::time::Duration;

/// How often to drain web view events (approx 60 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Web view labels of pane windows carry this prefix.
const PANE_PREFIX: &str = "pane:";
const UI_PREFIX: &str = "ui:";

/// The small presentation windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(super) enum UiKind {
    Selector,
    Menu,
    ScreenManager,
    SaveDialog,
}

impl UiKind {
    pub(super) const ALL: [UiKind; 4] = [
        UiKind::Selector,
        UiKind::Menu,
        UiKind::ScreenManager,
        UiKind::SaveDialog,
    ];

    fn slug(self) -> &'static str {
        match self {
            UiKind::Selector => "selector",
            UiKind::Menu => "menu",
            UiKind::ScreenManager => "screen_manager",
            UiKind::SaveDialog => "save_dialog",
        }
    }

    pub(super) fn label(self) -> String {
        format!("{UI_PREFIX}{}", self.slug())
    }

    pub(super) fn title(self) -> &'static str {
        match self {
            UiKind::Selector => "Select View",
            UiKind::Menu => "Vitrine",
            UiKind::ScreenManager => "Screen Manager",
            UiKind::SaveDialog => "Save",
        }
    }

    /// Initial inner size in logical pixels.
    pub(super) fn size(self) -> (f64, f64) {
        match self {
            UiKind::Selector => (1200.0, 180.0),
            UiKind::Menu => (64.0, 64.0),
            UiKind::ScreenManager => (1100.0, 680.0),
            UiKind::SaveDialog => (440.0, 330.0),
        }
    }

    /// Frameless, transparent and always on top.
    pub(super) fn floating(self) -> bool {
        matches!(self, UiKind::Selector | UiKind::Menu)
    }
}

/// Which window a web view label refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Target {
    Pane(String),
    Ui(UiKind),
}

impl Target {
    pub(super) fn parse(label: &str) -> Option<Target> {
        if let Some(id) = label.strip_prefix(PANE_PREFIX) {
            return Some(Target::Pane(id.to_string()));
        }
        let slug = label.strip_prefix(UI_PREFIX)?;
        UiKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == slug)
            .map(Target::Ui)
    }
}

pub(super) fn pane_label(window_id: &str) -> String {
    format!("{PANE_PREFIX}{window_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pane_labels_round_trip() {
        let label = pane_label("grafana:ops");
        assert_eq!(label, "pane:grafana:ops");
        assert_eq!(Target::parse(&label), Some(Target::Pane("grafana:ops".into())));
    }

    #[test]
    fn ui_labels_round_trip() {
        for kind in UiKind::ALL {
            assert_eq!(Target::parse(&kind.label()), Some(Target::Ui(kind)));
        }
    }

    #[test]
    fn unknown_labels_rejected() {
        assert_eq!(Target::parse("ui:terminal"), None);
        assert_eq!(Target::parse("grafana"), None);
        assert_eq!(Target::parse(""), None);
    }

    #[test]
    fn floating_windows() {
        assert!(UiKind::Menu.floating());
        assert!(UiKind::Selector.floating());
        assert!(!UiKind::ScreenManager.floating());
        assert!(!UiKind::SaveDialog.floating());
    }
}
