use wry::http::HeaderMap;
use wry::WebView;

use crate::auth::credentials_allowed;

/// Handle to a managed WebView instance.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    /// Label of the owning window.
    pub(super) label: String,
    /// Tags the events this view emits.
    pub(super) serial: u64,
    /// URL the view was created with; its https origin owns `headers`.
    pub(super) home_url: String,
    /// Current URL (best-effort tracking).
    pub(super) current_url: String,
    /// Credential headers, re-sent on loads back to the home origin.
    pub(super) headers: HeaderMap,
}

impl WebViewHandle {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Navigate to a URL. Credential headers are attached only when the URL
    /// shares the https origin of the view's home URL.
    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.current_url = url.to_string();
        if self.headers.is_empty() || !credentials_allowed(url, &self.home_url) {
            self.webview.load_url(url)
        } else {
            self.webview.load_url_with_headers(url, self.headers.clone())
        }
    }

    /// Reload the current page.
    pub fn reload(&self) -> Result<(), wry::Error> {
        self.webview.evaluate_script("window.location.reload();")
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Send a typed IPC message to JavaScript.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script)
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    /// Set page zoom; `1.0` is 100%.
    pub fn zoom(&self, scale: f64) -> Result<(), wry::Error> {
        self.webview.zoom(scale)
    }

    /// Give keyboard focus to the page.
    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }
}
