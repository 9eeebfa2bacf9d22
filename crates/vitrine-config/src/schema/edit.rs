//! Edit-mode overlay settings.

use serde::{Deserialize, Serialize};

/// Drag/resize overlay and zoom slider limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditConfig {
    /// Side of the square resize handle in the bottom-right corner
    /// (valid range: 4-64).
    pub resize_margin: u32,
    /// Smallest width/height a pane can be resized to (valid range: 50-2000).
    pub min_window_size: u32,
    /// Zoom slider lower bound in percent (valid range: 10-100).
    pub zoom_min: u32,
    /// Zoom slider upper bound in percent (valid range: 100-500).
    pub zoom_max: u32,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            resize_margin: 16,
            min_window_size: 200,
            zoom_min: 25,
            zoom_max: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_defaults() {
        let config = EditConfig::default();
        assert_eq!(config.resize_margin, 16);
        assert_eq!(config.min_window_size, 200);
        assert_eq!(config.zoom_min, 25);
        assert_eq!(config.zoom_max, 300);
    }
}
