#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(feature = "logging")]
use defmt_rtt as _;

pub mod animation;
pub mod cursor;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod marquee;
pub mod max7219;
pub mod ping;
pub mod renderer;

pub use animation::AnimationState;
pub use cursor::CursorState;
pub use error::Error;
pub use frame::MatrixFrame;
pub use geometry::{MatrixGeometry, GEOMETRY};
pub use marquee::{MarqueeBuffer, MARQUEE_CAPACITY};
pub use ping::PingSchedule;

use renderer::{MarqueeRenderer, MAX_PUPIL_SHIFT};

/// What one second of wall time changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecondTick {
    pub ping_due: bool,
    pub animation_done: bool,
}

/// Everything the display loop reads and mutates, in one place.
///
/// Construct one with [`DisplayState::new`] and hand out references; there is
/// no process-wide instance in this crate.
#[derive(Debug, Clone)]
pub struct DisplayState {
    pub cursor: CursorState,
    pub ping: PingSchedule,
    pub animation: AnimationState,
    pub marquee: MarqueeBuffer,
}

impl DisplayState {
    pub const fn new() -> Self {
        Self {
            cursor: CursorState::new(),
            ping: PingSchedule::new(),
            animation: AnimationState::new(),
            marquee: MarqueeBuffer::new(),
        }
    }

    /// Geometry is fixed at build time, so this is the same for every state.
    pub const fn geometry(&self) -> &'static MatrixGeometry {
        &GEOMETRY
    }

    /// Parks the cursor past the right edge so the marquee scrolls in.
    pub fn restart_marquee(&mut self) {
        self.cursor.enter_from_right(GEOMETRY.columns() as i32);
    }

    /// Feeds one second into the ping schedule and the animation. When the
    /// animation runs out the marquee starts over from the right edge.
    pub fn on_second(&mut self) -> SecondTick {
        let ping_due = self.ping.on_second();
        let animation_done = self.animation.on_second();
        if animation_done {
            self.restart_marquee();
        }
        SecondTick {
            ping_due,
            animation_done,
        }
    }

    /// Counts one display frame and moves the cursor for the next one.
    ///
    /// While the eyes are up the pupil moves every `step_frames` frames
    /// (0 moves it every frame). Otherwise the marquee scrolls one column, and
    /// once it has fully left the panel the eyes start playing `mode` for
    /// `period_secs`.
    pub fn advance_frame(
        &mut self,
        step_frames: u32,
        mode: &str,
        period_secs: u32,
    ) -> Result<(), Error> {
        self.ping.record_loop();

        if self.animation.is_active() {
            if self.ping.loop_count % step_frames.max(1) == 0 {
                self.cursor.bounce(-MAX_PUPIL_SHIFT, MAX_PUPIL_SHIFT);
                let movement = self.cursor.x;
                self.animation.set_movement(movement);
            }
            return Ok(());
        }

        let columns = GEOMETRY.columns() as i32;
        let text_width = MarqueeRenderer::text_width(self.marquee.as_str());
        self.cursor.scroll(text_width, columns);

        if self.cursor.x == columns {
            self.animation.start(mode, period_secs)?;
        }
        Ok(())
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_documented_initial_values() {
        let state = DisplayState::new();

        assert_eq!((state.cursor.x, state.cursor.y, state.cursor.s), (-1, 0, true));
        assert_eq!(state.ping.interval_secs, 120);
        assert_eq!(state.ping.ping_count, 0);
        assert_eq!(state.ping.loop_count, 0);
        assert!(!state.animation.is_active());
        assert_eq!(state.animation.active_count(), 0);
        assert_eq!(state.animation.period_secs, 0);
        assert_eq!(state.animation.fallback_secs, 30);
        assert_eq!(state.animation.movement(), 0);
        assert!(state.marquee.is_empty());
        assert_eq!(state.marquee.capacity(), 100);
    }

    #[test]
    fn marquee_wrap_starts_eyes() {
        let mut state = DisplayState::new();
        state.marquee.set("Hi").unwrap();
        let width = MarqueeRenderer::text_width("Hi");
        state.cursor.x = -width;

        state.advance_frame(5, "look", 3).unwrap();

        assert!(state.animation.is_active());
        assert_eq!(state.animation.mode(), "look");
        assert_eq!(state.animation.period_secs, 3);
        assert_eq!(state.ping.loop_count, 1);
    }

    #[test]
    fn pupil_moves_only_every_step_frames() {
        let mut state = DisplayState::new();
        state.animation.start("look", 10).unwrap();

        let mut moves = 0;
        for _ in 0..10 {
            let before = state.cursor.x;
            state.advance_frame(5, "look", 10).unwrap();
            if state.cursor.x != before {
                moves += 1;
                assert_eq!(state.animation.movement(), state.cursor.x);
            }
        }
        assert_eq!(moves, 2);
    }

    #[test]
    fn failed_eyes_start_keeps_marquee_running() {
        let mut state = DisplayState::new();
        state.marquee.set("Hi").unwrap();
        state.cursor.x = -MarqueeRenderer::text_width("Hi");

        let err = state.advance_frame(5, "a-very-long-eye-mode-label", 3);

        assert!(matches!(err, Err(Error::ModeLabelOverflow { .. })));
        assert!(!state.animation.is_active());
        assert_eq!(state.cursor.x, 32);
    }

    #[test]
    fn finished_animation_restarts_marquee_from_right() {
        let mut state = DisplayState::new();
        state.animation.start("look", 2).unwrap();
        state.cursor.x = 1;

        assert_eq!(state.on_second(), SecondTick::default());
        let tick = state.on_second();

        assert!(tick.animation_done && !tick.ping_due);
        assert_eq!(state.cursor, CursorState { x: 32, y: 0, s: true });
    }

    #[test]
    fn default_matches_new() {
        let state = DisplayState::default();
        assert_eq!(state.cursor, CursorState::new());
        assert_eq!(state.geometry().width, 31);
    }
}
