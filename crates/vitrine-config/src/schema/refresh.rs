//! Background refresh timing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing of the preload-and-swap refresh cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Interval used when a window enables refresh without its own interval
    /// (valid range: 5-86400).
    pub default_interval_secs: u64,
    /// Delay between "load finished" and the completeness check
    /// (valid range: 100-60000).
    pub recheck_delay_ms: u64,
    /// Delay between a successful check and the swap, letting the page paint
    /// (valid range: 0-60000).
    pub settle_delay_ms: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            default_interval_secs: 60,
            recheck_delay_ms: 2000,
            settle_delay_ms: 1000,
        }
    }
}

impl RefreshConfig {
    pub fn recheck_delay(&self) -> Duration {
        Duration::from_millis(self.recheck_delay_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}
