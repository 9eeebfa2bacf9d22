//! VitrineApp struct definition and constructor.

use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Instant;

use vitrine_shell::{ActionRegistry, AuthBroker, ChallengeKind, Shell};
use vitrine_webview::{auth_headers, BrowserProfile, WebViewManager};

use super::panes::{PaneShared, PaneWindow};
use super::types::UiKind;
use super::ui_windows::UiWindow;

/// Top-level application state.
pub struct VitrineApp {
    pub(super) shell: Shell<PaneWindow>,
    pub(super) shared: Rc<PaneShared>,

    // Presentation windows, and those to open on the next poll
    pub(super) ui: BTreeMap<UiKind, UiWindow>,
    pub(super) pending_ui: Vec<UiKind>,

    pub(super) actions: ActionRegistry<VitrineApp>,

    /// `--view` from the command line, consumed at startup.
    pub(super) startup_view: Option<String>,
    pub(super) started: bool,
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl VitrineApp {
    pub fn new(
        shell: Shell<PaneWindow>,
        profile: BrowserProfile,
        broker: &AuthBroker,
        startup_view: Option<String>,
    ) -> Self {
        if broker.credentials_for(ChallengeKind::Proxy).is_some() {
            tracing::info!("Proxy credentials configured; proxy challenges are left to the engine");
        }
        let limits = shell.edit_limits();
        let shared = PaneShared::new(
            profile,
            WebViewManager::new(),
            auth_headers(broker),
            limits.handle_size,
            (limits.zoom_min, limits.zoom_max),
        );
        Self {
            shell,
            shared: Rc::new(shared),
            ui: BTreeMap::new(),
            pending_ui: Vec::new(),
            actions: super::actions::build_registry(),
            startup_view,
            started: false,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
