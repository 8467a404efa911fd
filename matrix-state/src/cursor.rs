#[cfg(feature = "logging")]
use defmt::trace;

/// Position the renderers draw from.
///
/// A fresh cursor sits at `x = -1`, one column left of the panel, which
/// draws text with its first column clipped off. [`scroll`] keeps moving it
/// left from there. `s` is the horizontal direction used by [`bounce`]:
/// `true` moves towards increasing `x`.
///
/// [`bounce`]: CursorState::bounce
/// [`scroll`]: CursorState::scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    pub x: i32,
    pub y: i32,
    pub s: bool,
}

impl CursorState {
    pub const fn new() -> Self {
        Self { x: -1, y: 0, s: true }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Moves `x` one step in direction `s` within `min_x..=max_x`.
    ///
    /// At a bound the direction flips and `x` steps back the other way, so
    /// the cursor never leaves the range. A cursor that starts outside the
    /// range is first clamped into it.
    pub fn bounce(&mut self, min_x: i32, max_x: i32) {
        if min_x >= max_x {
            self.x = min_x;
            return;
        }

        self.x = self.x.clamp(min_x, max_x);

        if self.s && self.x >= max_x {
            self.s = false;
        } else if !self.s && self.x <= min_x {
            self.s = true;
        }

        self.x += if self.s { 1 } else { -1 };

        #[cfg(feature = "logging")]
        trace!("cursor bounce: x={} s={}", self.x, self.s);
    }

    /// Parks the cursor just past the right edge so the next scroll steps
    /// bring text in from the right.
    pub fn enter_from_right(&mut self, columns: i32) {
        *self = Self {
            x: columns,
            y: 0,
            s: true,
        };
    }

    /// Moves `x` one column left; once text `text_width` wide has fully left
    /// the panel, wraps it back to enter from the right edge.
    pub fn scroll(&mut self, text_width: i32, columns: i32) {
        self.x -= 1;
        if self.x < -text_width {
            self.x = columns;
        }
    }
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_cursor() {
        let cursor = CursorState::new();
        assert_eq!(cursor.x, -1);
        assert_eq!(cursor.y, 0);
        assert!(cursor.s);
    }

    #[test]
    fn bounce_flips_direction_at_bounds() {
        let mut cursor = CursorState::new();

        cursor.bounce(0, 2);
        assert_eq!((cursor.x, cursor.s), (1, true), "clamped to 0 then stepped");
        cursor.bounce(0, 2);
        assert_eq!((cursor.x, cursor.s), (2, true));
        cursor.bounce(0, 2);
        assert_eq!((cursor.x, cursor.s), (1, false), "flip at max");
        cursor.bounce(0, 2);
        assert_eq!((cursor.x, cursor.s), (0, false));
        cursor.bounce(0, 2);
        assert_eq!((cursor.x, cursor.s), (1, true), "flip at min");
    }

    #[test]
    fn bounce_on_degenerate_range_pins_cursor() {
        let mut cursor = CursorState { x: 7, y: 0, s: true };
        cursor.bounce(3, 3);
        assert_eq!(cursor.x, 3);
        cursor.bounce(3, 3);
        assert_eq!(cursor.x, 3);
    }

    #[test]
    fn scroll_wraps_after_text_leaves_panel() {
        let mut cursor = CursorState { x: 0, y: 0, s: true };
        cursor.scroll(2, 32);
        assert_eq!(cursor.x, -1);
        cursor.scroll(2, 32);
        assert_eq!(cursor.x, -2);
        cursor.scroll(2, 32);
        assert_eq!(cursor.x, 32);
    }

    #[test]
    fn scroll_from_fresh_cursor_moves_further_left() {
        let mut cursor = CursorState::new();
        cursor.scroll(10, 32);
        assert_eq!(cursor.x, -2);
    }

    #[test]
    fn enter_from_right_parks_past_last_column() {
        let mut cursor = CursorState { x: -2, y: 3, s: false };
        cursor.enter_from_right(32);
        assert_eq!(cursor, CursorState { x: 32, y: 0, s: true });
        cursor.scroll(10, 32);
        assert_eq!(cursor.x, 31, "First scroll step shows the leading column");
    }

    #[test]
    fn reset_restores_initial_position() {
        let mut cursor = CursorState { x: 12, y: 3, s: false };
        cursor.reset();
        assert_eq!(cursor, CursorState::new());
    }
}
