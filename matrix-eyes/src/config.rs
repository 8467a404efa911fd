use embassy_time::Duration;
use matrix_state::geometry::SCROLL_SPEED_MS;

// --- Display Config ---
pub const INTENSITY: u8 = 4; // MAX7219 brightness, 0..=15
pub const SPI_FREQUENCY_MHZ: u32 = 2;

// --- Content Config ---
pub const MARQUEE_TEXT: &str = "Hello from the LED matrix";
pub const EYE_MODE: &str = "look";
pub const ANIMATION_PERIOD_SECS: u32 = 0; // 0 falls back to the state's fallback period
pub const EYE_STEP_FRAMES: u32 = 5; // Frames between pupil moves

// --- Task Timing ---
pub const CLOCK_TICK: Duration = Duration::from_secs(1);
pub const FRAME_INTERVAL: Duration = Duration::from_millis(SCROLL_SPEED_MS);
