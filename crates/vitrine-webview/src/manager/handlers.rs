use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// Check a URL against a list of allowed prefixes. An empty list allows
/// everything; `about:blank` is always allowed.
pub fn is_navigation_allowed(url: &str, allowed: &[String]) -> bool {
    if allowed.is_empty() || url == "about:blank" {
        return true;
    }
    allowed.iter().any(|prefix| url.starts_with(prefix.as_str()))
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

type EventSink = Arc<Mutex<Vec<WebViewEvent>>>;

fn push(events: &EventSink, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        label: String,
        view: u64,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    label = %label,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            }

            push(
                &events,
                WebViewEvent::IpcMessage {
                    label: label.clone(),
                    view,
                    body,
                },
            );
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        label: String,
        view: u64,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(label = %label, view, ?state, url = %url, "page load");
            push(
                &events,
                WebViewEvent::PageLoad {
                    label: label.clone(),
                    view,
                    state,
                    url,
                },
            );
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        label: String,
        allowed: Vec<String>,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if is_navigation_allowed(&url, &allowed) {
                return true;
            }
            warn!(label = %label, url = %url, "navigation blocked: URL not in allowlist");
            push(
                &events,
                WebViewEvent::NavigationBlocked {
                    label: label.clone(),
                    url,
                },
            );
            false
        })
    }

    /// Popups never get a window of their own. When `capture` is set the URL
    /// is forwarded so the pane can load it in place.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        label: String,
        view: u64,
        capture: bool,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            debug!(label = %label, view, url = %url, capture, "popup requested");
            if let Some(event) = popup_event(&label, view, url, capture) {
                push(&events, event);
            }
            false
        })
    }
}

/// The event a popup request turns into, if it is forwarded at all.
fn popup_event(label: &str, view: u64, url: String, capture: bool) -> Option<WebViewEvent> {
    capture.then(|| WebViewEvent::NewWindowRequested {
        label: label.to_string(),
        view,
        url,
    })
}

// =============================================================================
// TESTS
// =============================================================================
