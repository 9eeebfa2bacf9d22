//! WebView lifecycle management.
//!
//! `WebViewManager` builds `wry::WebView` instances against the shared
//! browser profile: pane content, background preloads and the UI pages.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

/// Cheap to clone; clones share the event sink.
#[derive(Clone)]
pub struct WebViewManager {
    /// Event sink: handlers push here, the event loop drains.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    next_serial: Arc<AtomicU64>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            next_serial: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }

    pub(super) fn allocate_serial(&self) -> u64 {
        self.next_serial.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
