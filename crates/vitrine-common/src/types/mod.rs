mod geometry;

pub use geometry::{FracRect, PixelRect, ScreenSize};
