#[cfg(feature = "logging")]
use defmt::debug;

pub const DEFAULT_PING_INTERVAL_SECS: u32 = 120; // 2 minutes

/// Decides when the server should be pinged. Sending the ping is the
/// caller's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PingSchedule {
    /// Seconds between pings. 0 disables pinging.
    pub interval_secs: u32,
    /// Seconds elapsed since the last ping.
    pub ping_count: u32,
    /// Display loop iterations; wraps on overflow.
    pub loop_count: u32,
}

impl PingSchedule {
    pub const fn new() -> Self {
        Self::with_interval(DEFAULT_PING_INTERVAL_SECS)
    }

    pub const fn with_interval(interval_secs: u32) -> Self {
        Self {
            interval_secs,
            ping_count: 0,
            loop_count: 0,
        }
    }

    pub fn record_loop(&mut self) {
        self.loop_count = self.loop_count.wrapping_add(1);
    }

    /// Advances the schedule by one second. Returns `true` when a ping is due,
    /// in which case the elapsed count starts over.
    pub fn on_second(&mut self) -> bool {
        if self.interval_secs == 0 {
            return false;
        }

        self.ping_count += 1;
        if self.ping_count < self.interval_secs {
            return false;
        }

        self.ping_count = 0;
        #[cfg(feature = "logging")]
        debug!("ping due after {} s", self.interval_secs);
        true
    }

    /// `None` while pinging is disabled.
    pub fn seconds_until_ping(&self) -> Option<u32> {
        (self.interval_secs != 0).then(|| self.interval_secs.saturating_sub(self.ping_count))
    }
}

impl Default for PingSchedule {
    fn default() -> Self {
        Self::new()
    }
}
