//! The seam between orchestration and the windowing/engine binding.
//!
//! A `PaneSurface` is one frameless window hosting a foreground web view and,
//! while a refresh is in flight, a hidden background web view of the same
//! size. Everything the shell does to a pane goes through this trait.

use vitrine_common::{PixelRect, ShellError};
use vitrine_config::WindowConfig;

pub trait PaneSurface {
    /// Outer geometry in screen pixels.
    fn geometry(&self) -> PixelRect;
    fn set_geometry(&mut self, rect: PixelRect);

    fn show(&mut self);
    fn hide(&mut self);
    fn is_visible(&self) -> bool;

    /// Reload the foreground content.
    fn reload(&mut self);

    /// Current zoom in percent.
    fn zoom(&self) -> u32;
    fn set_zoom(&mut self, percent: u32);

    /// Show or hide the input-capturing edit overlay.
    fn set_edit_mode(&mut self, enabled: bool);

    /// Create a hidden background view and start loading the pane URL into it.
    fn start_background_load(&mut self) -> Result<(), ShellError>;

    /// Promote the background view to the foreground and release the old one.
    /// Returns `false` when there was no background view to promote.
    fn swap_background(&mut self) -> bool;

    /// Drop the background view, if any.
    fn discard_background(&mut self);

    /// Tear down the window. The surface is not used afterwards.
    fn close(&mut self);
}

/// Creates surfaces on demand. The desktop binding borrows the event loop and
/// browser profile for the duration of one call.
pub trait SurfaceFactory<S: PaneSurface> {
    fn create(&mut self, config: &WindowConfig) -> Result<S, ShellError>;
}
