//! Session configuration.

use std::time::Duration;

/// Seconds on the clock at the start of every session.
pub const DEFAULT_SESSION_DURATION_SECS: u32 = 100;

/// Wall-clock time represented by one clock tick.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Horizontal drag distance beyond which a swipe counts as an answer.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 100.0;

/// Review session configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Starting value of the countdown, in ticks.
    pub duration_secs: u32,
    /// Interval between ticks (host scheduler)
    pub tick_interval: Duration,
    /// Minimum absolute horizontal drag that classifies a swipe
    pub swipe_threshold: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_SESSION_DURATION_SECS,
            tick_interval: DEFAULT_TICK_INTERVAL,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl SessionConfig {
    /// Config with a different session length.
    #[must_use]
    pub fn with_duration_secs(mut self, duration_secs: u32) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    /// Config with a different swipe threshold.
    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }
}
