//! Browser engine binding for Vitrine panes.
//!
//! Wraps the `wry` crate to provide:
//! - WebViews built against one persistent browser profile
//! - Bidirectional IPC (Rust <-> JavaScript)
//! - Injected scripts for load progress and the edit overlay
//! - Basic-auth request headers from configured credentials
//! - Navigation allowlisting and popup capture

pub mod auth;
pub mod bounds;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod profile;

pub use auth::{auth_headers, BasicAuthHeader};
pub use bounds::fill_bounds;
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, PaneMessage};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
pub use profile::BrowserProfile;
