//! WebView event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView. `label` names the owning window and `view`
/// is the serial of the web view inside it, so events from a background
/// preload can be told apart from the visible page.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    PageLoad {
        label: String,
        view: u64,
        state: PageLoadState,
        url: String,
    },
    /// A JSON message posted from JavaScript.
    IpcMessage {
        label: String,
        view: u64,
        body: String,
    },
    /// The page tried to open a popup; the URL is handed to the owner.
    NewWindowRequested {
        label: String,
        view: u64,
        url: String,
    },
    NavigationBlocked { label: String, url: String },
}

impl WebViewEvent {
    pub fn label(&self) -> &str {
        match self {
            Self::PageLoad { label, .. }
            | Self::IpcMessage { label, .. }
            | Self::NewWindowRequested { label, .. }
            | Self::NavigationBlocked { label, .. } => label,
        }
    }
}
