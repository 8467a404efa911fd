use heapless::String;

#[cfg(feature = "logging")]
use defmt::info;

use crate::error::Error;

pub const MODE_LABEL_CAPACITY: usize = 16;
pub const DEFAULT_FALLBACK_SECS: u32 = 30;

/// Lifetime of the eye animation.
///
/// An animation runs for `period_secs` seconds once started, or for
/// `fallback_secs` when no period was requested. Seconds are fed in by the
/// caller through [`AnimationState::on_second`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    mode: String<MODE_LABEL_CAPACITY>,
    active: bool,
    active_count: u32,
    pub period_secs: u32,
    pub fallback_secs: u32,
    movement: i32,
}

impl AnimationState {
    pub const fn new() -> Self {
        Self {
            mode: String::new(),
            active: false,
            active_count: 0,
            period_secs: 0,
            fallback_secs: DEFAULT_FALLBACK_SECS,
            movement: 0,
        }
    }

    /// Starts `mode` for `period_secs` seconds (0 means the fallback period).
    ///
    /// A label longer than [`MODE_LABEL_CAPACITY`] is rejected and the
    /// current animation is left as it was.
    pub fn start(&mut self, mode: &str, period_secs: u32) -> Result<(), Error> {
        let mut label: String<MODE_LABEL_CAPACITY> = String::new();
        label.push_str(mode).map_err(|()| Error::ModeLabelOverflow {
            len: mode.len(),
            capacity: MODE_LABEL_CAPACITY,
        })?;

        self.mode = label;
        self.period_secs = period_secs;
        self.active = true;
        self.active_count = 0;

        #[cfg(feature = "logging")]
        info!(
            "animation '{}' started for {} s",
            self.mode.as_str(),
            self.effective_period()
        );
        Ok(())
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.active_count = 0;
    }

    pub fn effective_period(&self) -> u32 {
        if self.period_secs == 0 {
            self.fallback_secs
        } else {
            self.period_secs
        }
    }

    /// Counts one second of activity. Returns `true` on the second the
    /// animation runs out, after which it is inactive.
    pub fn on_second(&mut self) -> bool {
        if !self.active {
            return false;
        }

        self.active_count = self.active_count.saturating_add(1);
        if self.active_count < self.effective_period() {
            return false;
        }

        #[cfg(feature = "logging")]
        info!("animation '{}' finished", self.mode.as_str());
        self.stop();
        true
    }

    pub fn mode(&self) -> &str {
        self.mode.as_str()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn active_count(&self) -> u32 {
        self.active_count
    }

    pub fn movement(&self) -> i32 {
        self.movement
    }

    pub fn set_movement(&mut self, offset: i32) {
        self.movement = offset;
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}
