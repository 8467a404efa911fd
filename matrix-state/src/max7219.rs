//! Register framing for a daisy chain of MAX7219 8x8 segments.
//!
//! Every SPI transaction carries one `(register, data)` pair per segment.
//! The first pair clocked out ends up in the segment farthest from the MCU,
//! which is the leftmost segment of the panel.

use crate::error::Error;
use crate::frame::MatrixFrame;
use crate::geometry::{ROWS, SEGMENTS};

pub const REG_NOOP: u8 = 0x00;
pub const REG_DIGIT0: u8 = 0x01;
pub const REG_DECODE_MODE: u8 = 0x09;
pub const REG_INTENSITY: u8 = 0x0A;
pub const REG_SCAN_LIMIT: u8 = 0x0B;
pub const REG_SHUTDOWN: u8 = 0x0C;
pub const REG_DISPLAY_TEST: u8 = 0x0F;

pub const MAX_INTENSITY: u8 = 0x0F;

/// Bytes in one chain-wide transaction.
pub const CHAIN_BYTES: usize = 2 * SEGMENTS;

pub type ChainCommand = [u8; CHAIN_BYTES];

/// Same register write for every segment in the chain.
pub fn broadcast(register: u8, data: u8) -> ChainCommand {
    let mut command = [0u8; CHAIN_BYTES];
    for pair in command.chunks_exact_mut(2) {
        pair[0] = register;
        pair[1] = data;
    }
    command
}

/// Commands that bring the chain out of shutdown with all digits scanned,
/// no BCD decoding and the given brightness.
pub fn init_sequence(intensity: u8) -> Result<[ChainCommand; 5], Error> {
    if intensity > MAX_INTENSITY {
        return Err(Error::InvalidIntensity(intensity));
    }

    Ok([
        broadcast(REG_DISPLAY_TEST, 0x00),
        broadcast(REG_SCAN_LIMIT, 0x07),
        broadcast(REG_DECODE_MODE, 0x00),
        broadcast(REG_INTENSITY, intensity),
        broadcast(REG_SHUTDOWN, 0x01),
    ])
}

/// One transaction per panel row, addressed to digit register `row + 1`.
pub fn frame_rows(frame: &MatrixFrame) -> [ChainCommand; ROWS] {
    let mut commands = [[0u8; CHAIN_BYTES]; ROWS];
    for (row, command) in commands.iter_mut().enumerate() {
        for (segment, pair) in command.chunks_exact_mut(2).enumerate() {
            pair[0] = REG_DIGIT0 + row as u8;
            pair[1] = frame.segment_row(segment, row);
        }
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::geometry::Point;

    #[test]
    fn broadcast_repeats_pair_per_segment() {
        assert_eq!(
            broadcast(REG_INTENSITY, 3),
            [0x0A, 3, 0x0A, 3, 0x0A, 3, 0x0A, 3]
        );
    }

    #[test]
    fn init_sequence_ends_with_wake_up() {
        let sequence = init_sequence(8).unwrap();
        assert_eq!(sequence.len(), 5);
        assert_eq!(sequence[3], broadcast(REG_INTENSITY, 8));
        assert_eq!(sequence[4], broadcast(REG_SHUTDOWN, 1));
    }

    #[test]
    fn init_sequence_rejects_out_of_range_intensity() {
        assert_eq!(init_sequence(16), Err(Error::InvalidIntensity(16)));
        assert!(init_sequence(MAX_INTENSITY).is_ok());
    }

    #[test]
    fn frame_rows_address_digits_and_order_segments() {
        let mut frame = MatrixFrame::new();
        frame.set_pixel(Point::new(0, 0), true); // leftmost segment
        frame.set_pixel(Point::new(31, 7), true); // rightmost segment

        let rows = frame_rows(&frame);

        assert_eq!(rows[0], [1, 0x80, 1, 0, 1, 0, 1, 0]);
        assert_eq!(rows[7], [8, 0, 8, 0, 8, 0, 8, 0x01]);
        assert!(rows[1..7]
            .iter()
            .all(|row| row.chunks_exact(2).all(|pair| pair[1] == 0)));
    }
}
