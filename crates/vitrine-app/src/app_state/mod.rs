//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the shell, the pane windows and the presentation windows.

mod actions;
mod commands;
mod core;
mod dialogs;
mod event_handler;
mod init;
mod ipc_dispatch;
mod panes;
mod polling;
mod types;
mod ui_windows;

pub use core::VitrineApp;
