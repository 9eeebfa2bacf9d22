//! Conversion between pixel rectangles and screen-relative fractions.
//!
//! Width and height are clamped on the way in so a saved slot is never
//! degenerate and never larger than twice the screen. The origin is left
//! alone: a pane parked off-screen stays off-screen after a save/restore.
//! Denormalizing truncates to whole pixels, so a round trip may lose up to
//! one pixel per component.

use vitrine_common::{FracRect, PixelRect, ScreenSize};

/// Smallest fractional width/height a slot may have.
pub const MIN_FRACTION: f64 = 0.05;

/// Largest fractional width/height a slot may have.
pub const MAX_FRACTION: f64 = 2.0;

/// Express a pixel rectangle as fractions of the screen.
pub fn normalize(rect: PixelRect, screen: ScreenSize) -> FracRect {
    let sw = f64::from(screen.width());
    let sh = f64::from(screen.height());
    FracRect {
        x: f64::from(rect.x) / sw,
        y: f64::from(rect.y) / sh,
        width: clamp_extent(f64::from(rect.width) / sw),
        height: clamp_extent(f64::from(rect.height) / sh),
    }
}

/// Scale a fractional rectangle back to pixels, truncating toward zero.
pub fn denormalize(rect: FracRect, screen: ScreenSize) -> PixelRect {
    let sw = f64::from(screen.width());
    let sh = f64::from(screen.height());
    PixelRect {
        x: (rect.x * sw) as i32,
        y: (rect.y * sh) as i32,
        width: (rect.width * sw) as i32,
        height: (rect.height * sh) as i32,
    }
}

fn clamp_extent(value: f64) -> f64 {
    value.clamp(MIN_FRACTION, MAX_FRACTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(w: u32, h: u32) -> ScreenSize {
        ScreenSize::new(w, h).unwrap()
    }

    #[test]
    fn normalize_divides_by_screen() {
        let r = normalize(PixelRect::new(960, 540, 480, 270), screen(1920, 1080));
        assert!((r.x - 0.5).abs() < 1e-12);
        assert!((r.y - 0.5).abs() < 1e-12);
        assert!((r.width - 0.25).abs() < 1e-12);
        assert!((r.height - 0.25).abs() < 1e-12);
    }

    #[test]
    fn width_three_screens_clamps_to_two() {
        let r = normalize(PixelRect::new(0, 0, 5760, 3240), screen(1920, 1080));
        assert_eq!(r.width, 2.0);
        assert_eq!(r.height, 2.0);
    }

    #[test]
    fn tiny_extent_clamps_to_minimum() {
        let r = normalize(PixelRect::new(0, 0, 10, 0), screen(1920, 1080));
        assert_eq!(r.width, MIN_FRACTION);
        assert_eq!(r.height, MIN_FRACTION);
    }

    #[test]
    fn origin_is_never_clamped() {
        let r = normalize(PixelRect::new(-3840, 2160, 400, 300), screen(1920, 1080));
        assert_eq!(r.x, -2.0);
        assert_eq!(r.y, 2.0);
        let back = denormalize(r, screen(1920, 1080));
        assert_eq!(back.x, -3840);
        assert_eq!(back.y, 2160);
    }

    #[test]
    fn denormalize_truncates() {
        let r = denormalize(FracRect::new(0.3333, 0.6667, 0.5, 0.5), screen(1000, 1000));
        assert_eq!(r, PixelRect::new(333, 666, 500, 500));
    }

    #[test]
    fn round_trip_within_one_pixel() {
        let screens = [(1920, 1080), (1366, 768), (3840, 2160), (1280, 1024), (1023, 767)];
        let rects = [
            PixelRect::new(0, 0, 1152, 756),
            PixelRect::new(17, 333, 641, 479),
            PixelRect::new(-250, -13, 999, 333),
            PixelRect::new(1919, 1079, 301, 297),
            PixelRect::new(7, 3, 1300, 700),
        ];
        for (w, h) in screens {
            let s = screen(w, h);
            for r in rects {
                let back = denormalize(normalize(r, s), s);
                assert!(
                    back.approx_eq(&r, 1),
                    "{r} on {s} came back as {back}"
                );
            }
        }
    }
}
