use wry::http::HeaderMap;

/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Initial HTML content to render (mutually exclusive with `url`).
    pub html: Option<String>,
    pub visible: bool,
    pub transparent: bool,
    /// Credential headers, sent only to the https origin of `url`.
    pub headers: HeaderMap,
    /// Scripts injected at document start, after the IPC bridge.
    pub init_scripts: Vec<String>,
    /// URL prefixes this view may navigate to. Empty allows everything.
    pub allowed_origins: Vec<String>,
    /// Hand popups to the owner instead of dropping them.
    pub capture_popups: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            visible: true,
            transparent: false,
            headers: HeaderMap::new(),
            init_scripts: Vec::new(),
            allowed_origins: Vec::new(),
            capture_popups: false,
        }
    }
}
