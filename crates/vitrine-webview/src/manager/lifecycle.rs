use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::auth::credentials_allowed;
use crate::ipc::IPC_INIT_SCRIPT;
use crate::profile::BrowserProfile;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a new WebView as a child of the given window, using the shared
    /// profile's web context.
    ///
    /// The returned handle carries a serial that tags every event the view
    /// emits.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        label: &str,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
        profile: &mut BrowserProfile,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);
        let view = self.allocate_serial();
        let user_agent = profile.user_agent().to_string();
        let devtools = profile.devtools();
        #[cfg(windows)]
        let engine_args = profile.engine_args().join(" ");

        let mut builder = WebViewBuilder::with_web_context(profile.context_mut())
            .with_bounds(bounds)
            .with_visible(config.visible)
            .with_transparent(config.transparent)
            .with_devtools(devtools)
            .with_user_agent(&user_agent)
            .with_focused(false);

        #[cfg(windows)]
        {
            use wry::WebViewBuilderExtWindows;
            builder = builder.with_additional_browser_args(&engine_args);
        }

        builder = builder.with_initialization_script(IPC_INIT_SCRIPT);
        for script in &config.init_scripts {
            builder = builder.with_initialization_script(script);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), label.to_string(), view);
        builder =
            Self::attach_page_load_handler(builder, Arc::clone(&events), label.to_string(), view);
        builder = Self::attach_navigation_handler(
            builder,
            Arc::clone(&events),
            label.to_string(),
            config.allowed_origins.clone(),
        );
        builder = Self::attach_new_window_handler(
            builder,
            Arc::clone(&events),
            label.to_string(),
            view,
            config.capture_popups,
        );

        let initial_url;
        if let Some(url) = &config.url {
            builder = builder.with_url(url);
            if !config.headers.is_empty() && credentials_allowed(url, url) {
                builder = builder.with_headers(config.headers.clone());
            }
            initial_url = url.clone();
        } else if let Some(html) = &config.html {
            builder = builder.with_html(html);
            initial_url = "about:blank".to_string();
        } else {
            builder = builder.with_html("<html><body></body></html>");
            initial_url = "about:blank".to_string();
        }

        let webview = builder.build_as_child(window)?;

        debug!(label, view, url = %initial_url, "WebView created");

        Ok(WebViewHandle {
            webview,
            label: label.to_string(),
            serial: view,
            home_url: initial_url.clone(),
            current_url: initial_url,
            headers: config.headers,
        })
    }
}
