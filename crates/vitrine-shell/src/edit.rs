//! Edit-mode pointer math: moving and resizing a pane from its overlay.
//!
//! The overlay reports pointer positions in screen pixels. A press inside the
//! bottom-right handle starts a resize, anywhere else a move. Geometry during
//! the drag is always computed from the state at press time, so events that
//! arrive late or coalesced do not accumulate error.

use vitrine_common::PixelRect;
use vitrine_config::schema::EditConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Move,
    Resize,
}

/// Limits applied while editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditLimits {
    pub handle_size: i32,
    pub min_size: i32,
    pub zoom_min: u32,
    pub zoom_max: u32,
}

impl EditLimits {
    pub fn from_config(config: &EditConfig) -> Self {
        Self {
            handle_size: config.resize_margin as i32,
            min_size: config.min_window_size as i32,
            zoom_min: config.zoom_min,
            zoom_max: config.zoom_max.max(config.zoom_min),
        }
    }

    pub fn clamp_zoom(&self, percent: u32) -> u32 {
        percent.clamp(self.zoom_min, self.zoom_max)
    }
}

impl Default for EditLimits {
    fn default() -> Self {
        Self::from_config(&EditConfig::default())
    }
}

/// Classify a press at `(x, y)` relative to a pane of `width` x `height`.
pub fn hit_test(x: i32, y: i32, width: i32, height: i32, handle_size: i32) -> DragKind {
    let handle = PixelRect::new(
        width - handle_size,
        height - handle_size,
        handle_size,
        handle_size,
    );
    if handle.contains(x, y) {
        DragKind::Resize
    } else {
        DragKind::Move
    }
}

/// An in-progress overlay drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayDrag {
    pub kind: DragKind,
    start_pointer: (i32, i32),
    start_geometry: PixelRect,
}

impl OverlayDrag {
    pub fn begin(kind: DragKind, pointer: (i32, i32), geometry: PixelRect) -> Self {
        Self {
            kind,
            start_pointer: pointer,
            start_geometry: geometry,
        }
    }

    /// Geometry for the pointer at `pointer`.
    pub fn update(&self, pointer: (i32, i32), min_size: i32) -> PixelRect {
        let dx = pointer.0 - self.start_pointer.0;
        let dy = pointer.1 - self.start_pointer.1;
        let g = self.start_geometry;
        match self.kind {
            DragKind::Move => PixelRect::new(g.x + dx, g.y + dy, g.width, g.height),
            DragKind::Resize => PixelRect::new(
                g.x,
                g.y,
                (g.width + dx).max(min_size),
                (g.height + dy).max(min_size),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_is_bottom_right_square() {
        assert_eq!(hit_test(790, 590, 800, 600, 16), DragKind::Resize);
        assert_eq!(hit_test(784, 584, 800, 600, 16), DragKind::Resize);
        assert_eq!(hit_test(783, 590, 800, 600, 16), DragKind::Move);
        assert_eq!(hit_test(10, 10, 800, 600, 16), DragKind::Move);
    }

    #[test]
    fn move_translates_from_press_state() {
        let drag = OverlayDrag::begin(
            DragKind::Move,
            (500, 400),
            PixelRect::new(100, 100, 800, 600),
        );
        assert_eq!(drag.update((520, 390), 200), PixelRect::new(120, 90, 800, 600));
        // Later events are relative to the press, not the previous event.
        assert_eq!(drag.update((400, 400), 200), PixelRect::new(0, 100, 800, 600));
    }

    #[test]
    fn move_may_leave_screen() {
        let drag = OverlayDrag::begin(DragKind::Move, (0, 0), PixelRect::new(0, 0, 300, 300));
        assert_eq!(drag.update((-500, -20), 200), PixelRect::new(-500, -20, 300, 300));
    }

    #[test]
    fn resize_respects_minimum() {
        let drag = OverlayDrag::begin(
            DragKind::Resize,
            (900, 700),
            PixelRect::new(100, 100, 800, 600),
        );
        assert_eq!(drag.update((1000, 750), 200), PixelRect::new(100, 100, 900, 650));
        assert_eq!(drag.update((0, 0), 200), PixelRect::new(100, 100, 200, 200));
    }

    #[test]
    fn zoom_clamped_to_limits() {
        let limits = EditLimits::default();
        assert_eq!(limits.clamp_zoom(10), 25);
        assert_eq!(limits.clamp_zoom(125), 125);
        assert_eq!(limits.clamp_zoom(1000), 300);
        assert_eq!(limits.handle_size, 16);
        assert_eq!(limits.min_size, 200);
    }
}
