//! The persistent browser profile shared by every pane.

use std::path::{Path, PathBuf};

use tracing::info;
use vitrine_config::schema::BrowserConfig;
use wry::WebContext;

/// Cookies, cache and local storage live in one data directory that outlives
/// restarts. All web views are built against the same `WebContext`.
pub struct BrowserProfile {
    context: WebContext,
    data_dir: PathBuf,
    user_agent: String,
    devtools: bool,
    engine_args: Vec<String>,
    allowed_origins: Vec<String>,
}

impl BrowserProfile {
    pub fn new(config: &BrowserConfig, data_dir: PathBuf) -> Self {
        let engine_args = config.engine_args();
        info!(
            data_dir = %data_dir.display(),
            args = engine_args.len(),
            "browser profile ready"
        );
        Self {
            context: WebContext::new(Some(data_dir.clone())),
            data_dir,
            user_agent: config.user_agent.clone(),
            devtools: config.devtools,
            engine_args,
            allowed_origins: config.allowed_origins.clone(),
        }
    }

    pub fn context_mut(&mut self) -> &mut WebContext {
        &mut self.context
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn devtools(&self) -> bool {
        self.devtools
    }

    /// Command-line switches for engines that accept them (WebView2).
    pub fn engine_args(&self) -> &[String] {
        &self.engine_args
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
