//! Flicker-free periodic refresh.
//!
//! Each refreshing pane owns a `RefreshEngine`. The engine never touches a
//! surface itself: the shell feeds it time, progress and load results, and
//! carries out the `RefreshCommand`s it returns. A cycle runs
//!
//! ```text
//! Idle -> Loading -> ProgressTracking -> PendingSwap -> Swapping -> Idle
//! ```
//!
//! A swap is only ever issued after a progress of 100 has been recorded and
//! the settle delay has passed.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};
use vitrine_config::schema::RefreshConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPhase {
    /// Waiting for the next tick. No background surface exists.
    Idle,
    /// Background load requested, no progress reported yet.
    Loading,
    /// Progress events are arriving.
    ProgressTracking,
    /// Fully loaded; waiting for the settle delay.
    PendingSwap,
    /// Swap issued, waiting for the shell to confirm it.
    Swapping,
}

/// What the shell must do to the pane's surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshCommand {
    BeginBackgroundLoad,
    Swap,
    Discard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTimings {
    pub interval: Duration,
    pub recheck: Duration,
    pub settle: Duration,
}

impl RefreshTimings {
    /// Timings for a pane refreshing every `interval_secs`; `0` picks the
    /// configured default.
    pub fn from_config(config: &RefreshConfig, interval_secs: u64) -> Self {
        let secs = if interval_secs == 0 {
            config.default_interval_secs
        } else {
            interval_secs
        };
        Self {
            interval: Duration::from_secs(secs.max(1)),
            recheck: config.recheck_delay(),
            settle: config.settle_delay(),
        }
    }
}

#[derive(Debug)]
pub struct RefreshEngine {
    timings: RefreshTimings,
    phase: RefreshPhase,
    last_progress: u8,
    next_tick: Instant,
    /// Recheck deadline while loading, settle deadline while pending.
    deadline: Option<Instant>,
}

impl RefreshEngine {
    pub fn new(timings: RefreshTimings, now: Instant) -> Self {
        Self {
            timings,
            phase: RefreshPhase::Idle,
            last_progress: 0,
            next_tick: now + timings.interval,
            deadline: None,
        }
    }

    pub fn phase(&self) -> RefreshPhase {
        self.phase
    }

    pub fn last_progress(&self) -> u8 {
        self.last_progress
    }

    /// Earliest instant at which `poll` may have something to do.
    pub fn next_deadline(&self) -> Instant {
        match self.deadline {
            Some(d) => d.min(self.next_tick),
            None => self.next_tick,
        }
    }

    /// Advance timers.
    pub fn poll(&mut self, now: Instant) -> Option<RefreshCommand> {
        match self.phase {
            RefreshPhase::Idle => {
                if now < self.next_tick {
                    return None;
                }
                self.next_tick = now + self.timings.interval;
                self.last_progress = 0;
                self.deadline = None;
                self.phase = RefreshPhase::Loading;
                debug!("refresh tick, starting background load");
                Some(RefreshCommand::BeginBackgroundLoad)
            }
            RefreshPhase::Loading | RefreshPhase::ProgressTracking => match self.deadline {
                // A whole interval went by without reaching 100.
                _ if now >= self.next_tick => {
                    warn!(
                        progress = self.last_progress,
                        "background load did not complete in time, discarding"
                    );
                    self.reset();
                    Some(RefreshCommand::Discard)
                }
                // Finished; recheck whether progress made it to 100.
                Some(deadline) if now >= deadline => {
                    if self.last_progress >= 100 {
                        self.phase = RefreshPhase::PendingSwap;
                        self.deadline = Some(now + self.timings.settle);
                        debug!("background load complete, settling");
                    } else {
                        debug!(
                            progress = self.last_progress,
                            "load finished early, rechecking"
                        );
                        self.deadline = Some(now + self.timings.recheck);
                    }
                    None
                }
                _ => None,
            },
            RefreshPhase::PendingSwap => match self.deadline {
                Some(deadline) if now >= deadline => {
                    self.phase = RefreshPhase::Swapping;
                    self.deadline = None;
                    Some(RefreshCommand::Swap)
                }
                _ => None,
            },
            RefreshPhase::Swapping => None,
        }
    }

    /// Record a progress report from the background load.
    pub fn on_progress(&mut self, percent: u8) {
        if matches!(
            self.phase,
            RefreshPhase::Loading | RefreshPhase::ProgressTracking
        ) {
            self.phase = RefreshPhase::ProgressTracking;
            self.last_progress = percent.min(100);
        }
    }

    /// The background load reported it finished.
    pub fn on_load_finished(&mut self, ok: bool, now: Instant) -> Option<RefreshCommand> {
        if !matches!(
            self.phase,
            RefreshPhase::Loading | RefreshPhase::ProgressTracking
        ) {
            return None;
        }
        if !ok {
            warn!("background load failed, keeping current content");
            self.reset();
            return Some(RefreshCommand::Discard);
        }
        if self.deadline.is_none() {
            self.deadline = Some(now + self.timings.recheck);
        }
        None
    }

    /// The shell carried out a `Swap`.
    pub fn finish_swap(&mut self) {
        if self.phase == RefreshPhase::Swapping {
            info!("background content swapped in");
            self.reset();
        }
    }

    /// Abort any cycle in flight. Returns `true` if a background surface may
    /// exist and must be discarded.
    pub fn cancel(&mut self) -> bool {
        let in_flight = self.phase != RefreshPhase::Idle;
        self.reset();
        in_flight
    }

    fn reset(&mut self) {
        self.phase = RefreshPhase::Idle;
        self.last_progress = 0;
        self.deadline = None;
    }
}
