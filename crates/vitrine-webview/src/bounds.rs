//! Web view placement inside a pane window.

/// Bounds covering the whole client area of a window, in physical pixels.
pub fn fill_bounds(width: u32, height: u32) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(width.max(1), height.max(1))),
    }
}
