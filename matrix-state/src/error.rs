#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Marquee text of {len} bytes does not fit capacity {capacity}")]
    MarqueeOverflow { len: usize, capacity: usize },

    #[error("Eye mode label of {len} bytes does not fit capacity {capacity}")]
    ModeLabelOverflow { len: usize, capacity: usize },

    #[error("MAX7219 intensity {0} is above 15")]
    InvalidIntensity(u8),
}

#[cfg(feature = "logging")]
impl defmt::Format for Error {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Error: {}", defmt::Display2Format(self))
    }
}
