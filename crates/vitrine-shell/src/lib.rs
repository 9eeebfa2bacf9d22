//! Window orchestration for Vitrine.
//!
//! Everything here is independent of the windowing toolkit and the browser
//! engine: panes are reached through the `PaneSurface` trait, so the whole
//! shell can be driven by in-memory surfaces in tests.

pub mod actions;
pub mod apply;
pub mod auth;
pub mod controller;
pub mod edit;
pub mod refresh;
pub mod registry;
pub mod surface;

#[cfg(test)]
mod testing;

pub use actions::{menu_actions, Action, ActionRegistry};
pub use apply::ApplyReport;
pub use auth::{AuthBroker, ChallengeKind, CredentialSink};
pub use controller::{SaveKind, SaveOutcome, SaveRequest, Shell};
pub use edit::{DragKind, EditLimits, OverlayDrag};
pub use refresh::{RefreshCommand, RefreshEngine, RefreshPhase, RefreshTimings};
pub use registry::WindowRegistry;
pub use surface::{PaneSurface, SurfaceFactory};
