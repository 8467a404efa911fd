use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::geometry::{COLUMNS, GEOMETRY, ROWS, SEGMENT_COLUMNS};

// One bit per column, column 0 in bit 0. Fits because the panel is 32 wide.
const _: () = assert!(COLUMNS <= u32::BITS as usize);

/// Monochrome frame for the whole panel.
///
/// Pixels outside the panel are dropped, so text can be drawn at negative or
/// past-the-edge offsets while it scrolls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatrixFrame {
    rows: [u32; ROWS],
}

impl MatrixFrame {
    pub const fn new() -> Self {
        Self { rows: [0; ROWS] }
    }

    pub fn clear_all(&mut self) {
        self.rows = [0; ROWS];
    }

    pub fn set_pixel(&mut self, point: Point, on: bool) {
        if !GEOMETRY.contains(point) {
            return;
        }
        let bit = 1u32 << point.x;
        let row = &mut self.rows[point.y as usize];
        if on {
            *row |= bit;
        } else {
            *row &= !bit;
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> bool {
        GEOMETRY.contains(Point::new(x, y)) && self.rows[y as usize] & (1u32 << x) != 0
    }

    pub fn lit_count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    /// Packs one row of one 8x8 segment into a byte, leftmost pixel in the
    /// most significant bit. Segment 0 is the leftmost one.
    pub fn segment_row(&self, segment: usize, row: usize) -> u8 {
        if segment >= GEOMETRY.segments || row >= ROWS {
            return 0;
        }
        let shifted = self.rows[row] >> (segment * SEGMENT_COLUMNS);
        (shifted as u8).reverse_bits()
    }
}

impl OriginDimensions for MatrixFrame {
    fn size(&self) -> Size {
        GEOMETRY.size()
    }
}

impl DrawTarget for MatrixFrame {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point, color.is_on());
        }
        Ok(())
    }
}
