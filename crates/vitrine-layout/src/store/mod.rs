//! JSON-backed layout and view stores.

mod layouts;
mod persist;
mod views;

pub use layouts::LayoutStore;
pub use views::{derive_view_id, ViewStore};
