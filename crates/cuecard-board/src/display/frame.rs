//! 1bpp in-memory frame for the 400x240 panel.
//!
//! Bit mapping within one line byte: bit 7 is the first pixel in that
//! byte. A set bit is ink.

use core::convert::{Infallible, TryFrom};

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
};

/// Panel width in pixels.
pub const WIDTH: usize = 400;
/// Panel height in pixels.
pub const HEIGHT: usize = 240;
/// Bytes per display line.
pub const LINE_BYTES: usize = WIDTH / 8;

const BUFFER_SIZE: usize = LINE_BYTES * HEIGHT;

#[derive(Clone)]
pub struct Frame {
    bytes: [u8; BUFFER_SIZE],
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    /// Creates a blank (no ink) frame.
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; BUFFER_SIZE],
        }
    }

    /// Removes all ink.
    pub fn clear(&mut self) {
        self.bytes.fill(0x00);
    }

    /// Sets one pixel. Out-of-bounds writes are ignored and reported
    /// via the return value.
    pub fn set_pixel(&mut self, x: usize, y: usize, ink: bool) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }

        let byte_index = y * LINE_BYTES + (x / 8);
        let bit_mask = 1u8 << (7 - (x % 8));

        if ink {
            self.bytes[byte_index] |= bit_mask;
        } else {
            self.bytes[byte_index] &= !bit_mask;
        }

        true
    }

    /// Reads one pixel.
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }

        let byte_index = y * LINE_BYTES + (x / 8);
        let bit_mask = 1u8 << (7 - (x % 8));
        Some((self.bytes[byte_index] & bit_mask) != 0)
    }

    /// Payload for wire line 1..=240.
    pub fn line(&self, line: u16) -> Option<&[u8; LINE_BYTES]> {
        if !(1..=HEIGHT as u16).contains(&line) {
            return None;
        }

        let start = (line as usize - 1) * LINE_BYTES;
        let end = start + LINE_BYTES;
        <&[u8; LINE_BYTES]>::try_from(&self.bytes[start..end]).ok()
    }
}

impl DrawTarget for Frame {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }

            let _ = self.set_pixel(point.x as usize, point.y as usize, color.is_on());
        }

        Ok(())
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_bit_mapping_is_msb_first_within_byte() {
        let mut frame = Frame::new();

        assert!(frame.set_pixel(0, 0, true));
        assert!(frame.set_pixel(7, 0, true));
        assert!(frame.set_pixel(8, 0, true));

        let line1 = frame.line(1).unwrap();
        assert_eq!(line1[0], 0b1000_0001);
        assert_eq!(line1[1], 0b1000_0000);
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut frame = Frame::new();

        assert!(!frame.set_pixel(WIDTH, 0, true));
        assert!(!frame.set_pixel(0, HEIGHT, true));
        assert_eq!(frame.pixel(0, 0), Some(false));
    }

    #[test]
    fn clear_removes_all_ink() {
        let mut frame = Frame::new();
        frame.set_pixel(WIDTH - 1, HEIGHT - 1, true);
        frame.clear();
        assert_eq!(frame.pixel(WIDTH - 1, HEIGHT - 1), Some(false));
    }
}
