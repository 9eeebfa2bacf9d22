//! Screen layouts and views for Vitrine.
//!
//! Geometry is stored as fractions of the screen so an arrangement saved on
//! one monitor can be restored on another. The stores keep the whole JSON map
//! in memory and rewrite it on every change.

pub mod capture;
pub mod normalize;
pub mod schema;
pub mod store;

pub use capture::{capture_slots, capture_window_defs, CapturedWindow};
pub use normalize::{denormalize, normalize};
pub use schema::{Assignment, Layout, Slot, View, WindowDef};
pub use store::{derive_view_id, LayoutStore, ViewStore};
