use core::fmt;

use heapless::String;

#[cfg(feature = "logging")]
use defmt::warn;

use crate::error::Error;

pub const MARQUEE_CAPACITY: usize = 100;

/// Bounded text slot for the scrolling message.
///
/// Capacity is counted in bytes. Writes that do not fit either fail and leave
/// the buffer untouched ([`set`], [`push_str`]) or keep the longest prefix
/// that ends on a char boundary ([`set_truncated`]).
///
/// [`set`]: MarqueeBuffer::set
/// [`push_str`]: MarqueeBuffer::push_str
/// [`set_truncated`]: MarqueeBuffer::set_truncated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarqueeBuffer {
    text: String<MARQUEE_CAPACITY>,
}

impl MarqueeBuffer {
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    pub fn set(&mut self, text: &str) -> Result<(), Error> {
        if text.len() > MARQUEE_CAPACITY {
            #[cfg(feature = "logging")]
            warn!("marquee text of {} bytes rejected", text.len());
            return Err(Error::MarqueeOverflow {
                len: text.len(),
                capacity: MARQUEE_CAPACITY,
            });
        }
        self.text.clear();
        self.push_str(text)
    }

    /// Stores as much of `text` as fits. Returns `true` if anything was cut.
    pub fn set_truncated(&mut self, text: &str) -> bool {
        self.text.clear();
        let mut end = text.len().min(MARQUEE_CAPACITY);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        let stored = self.text.push_str(&text[..end]);
        debug_assert!(stored.is_ok(), "prefix is at most MARQUEE_CAPACITY bytes");
        end < text.len()
    }

    pub fn push_str(&mut self, text: &str) -> Result<(), Error> {
        self.text.push_str(text).map_err(|()| Error::MarqueeOverflow {
            len: self.text.len() + text.len(),
            capacity: MARQUEE_CAPACITY,
        })
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        MARQUEE_CAPACITY
    }
}

impl fmt::Display for MarqueeBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
