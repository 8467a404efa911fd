use embedded_graphics::{geometry::Point, prelude::Size};

// --- Matrix Config ---
// Dimensions are given as highest index (0-n), so a 32x8 panel is 31x7.
pub const WIDTH: i32 = 31;
pub const HEIGHT: i32 = 7;
pub const SEGMENTS: usize = 4; // 8x8 MAX7219 modules in the chain
pub const CS_PIN: u8 = 5; // GPIO5, silkscreened D1 on D1-mini boards

// --- Timing Config ---
pub const SCROLL_SPEED_MS: u64 = 100; // Display frame period

pub const COLUMNS: usize = (WIDTH + 1) as usize;
pub const ROWS: usize = (HEIGHT + 1) as usize;
pub const SEGMENT_COLUMNS: usize = COLUMNS / SEGMENTS;

/// Physical layout of the LED matrix and the pin it is selected with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixGeometry {
    pub width: i32,
    pub height: i32,
    pub segments: usize,
    pub cs_pin: u8,
}

pub const GEOMETRY: MatrixGeometry = MatrixGeometry {
    width: WIDTH,
    height: HEIGHT,
    segments: SEGMENTS,
    cs_pin: CS_PIN,
};

impl MatrixGeometry {
    pub const fn columns(&self) -> usize {
        (self.width + 1) as usize
    }

    pub const fn rows(&self) -> usize {
        (self.height + 1) as usize
    }

    pub const fn segment_columns(&self) -> usize {
        self.columns() / self.segments
    }

    pub const fn pixel_count(&self) -> usize {
        self.columns() * self.rows()
    }

    pub const fn size(&self) -> Size {
        Size::new(self.columns() as u32, self.rows() as u32)
    }

    pub fn contains(&self, point: Point) -> bool {
        (0..=self.width).contains(&point.x) && (0..=self.height).contains(&point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_panel() {
        assert_eq!(GEOMETRY.width, 31);
        assert_eq!(GEOMETRY.height, 7);
        assert_eq!(GEOMETRY.segments, 4);
        assert_eq!(GEOMETRY.cs_pin, 5);
        assert_eq!(SCROLL_SPEED_MS, 100);
    }

    #[test]
    fn derived_dimensions() {
        assert_eq!(GEOMETRY.columns(), 32);
        assert_eq!(GEOMETRY.rows(), 8);
        assert_eq!(GEOMETRY.segment_columns(), 8);
        assert_eq!(GEOMETRY.pixel_count(), 256);
        assert_eq!(GEOMETRY.size(), Size::new(32, 8));
        assert_eq!((COLUMNS, ROWS, SEGMENT_COLUMNS), (32, 8, 8));
    }

    #[test]
    fn contains_is_inclusive_of_highest_index() {
        assert!(GEOMETRY.contains(Point::new(0, 0)));
        assert!(GEOMETRY.contains(Point::new(31, 7)));
        assert!(!GEOMETRY.contains(Point::new(32, 7)));
        assert!(!GEOMETRY.contains(Point::new(-1, 0)));
        assert!(!GEOMETRY.contains(Point::new(0, 8)));
    }
}
