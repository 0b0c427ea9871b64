//! RGB image data types

use crate::image_pipeline::common::error::{Result, SimulationError};

/// Number of interleaved channels per pixel.
pub const CHANNELS: usize = 3;

/// Decoded 8-bit RGB image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...]
    pub data: Vec<u8>,
}

impl RgbImageData {
    /// Wraps an interleaved buffer, rejecting one that is not `width * height` RGB triples.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let image = Self { width, height, data };
        image.check_layout()?;
        Ok(image)
    }

    /// Image of the given size where every pixel is `pixel`.
    pub fn filled(width: usize, height: usize, pixel: [u8; 3]) -> Result<Self> {
        let pixels = width
            .checked_mul(height)
            .filter(|n| n.checked_mul(CHANNELS).is_some())
            .ok_or_else(|| overflow(width, height))?;
        let data = pixel.repeat(pixels);
        Ok(Self { width, height, data })
    }

    /// Byte length of a `width x height` RGB buffer, `None` if it does not fit in `usize`.
    pub fn expected_len(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)?
            .checked_mul(CHANNELS)
    }

    /// Fails with `InvalidInput` unless the buffer holds exactly one RGB triple per pixel.
    pub fn check_layout(&self) -> Result<()> {
        let expected = self
            .expected_len()
            .ok_or_else(|| overflow(self.width, self.height))?;
        if self.data.len() != expected {
            return Err(SimulationError::InvalidInput(format!(
                "expected {} bytes of 3-channel RGB for {}x{}, got {}",
                expected,
                self.width,
                self.height,
                self.data.len()
            )));
        }
        Ok(())
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = y
            .checked_mul(self.width)?
            .checked_add(x)?
            .checked_mul(CHANNELS)?;
        self.data
            .get(offset..offset.checked_add(CHANNELS)?)
            .map(|p| [p[0], p[1], p[2]])
    }

    pub fn row_len(&self) -> usize {
        self.width.saturating_mul(CHANNELS)
    }
}

fn overflow(width: usize, height: usize) -> SimulationError {
    SimulationError::InvalidInput(format!("{}x{} RGB image does not fit in memory", width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_wrong_channel_count() {
        // 2x2 RGBA is 16 bytes, not 12
        let result = RgbImageData::new(2, 2, vec![0u8; 16]);
        assert!(matches!(result, Err(SimulationError::InvalidInput(_))));
    }

    #[test]
    fn new_accepts_rgb_buffer() {
        let image = RgbImageData::new(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(image.pixel(1, 0), Some([4, 5, 6]));
        assert_eq!(image.pixel(2, 0), None);
    }

    #[test]
    fn oversized_dimensions_are_invalid_input() {
        let result = RgbImageData::new(usize::MAX / 2, 3, Vec::new());
        assert!(matches!(result, Err(SimulationError::InvalidInput(_))));

        let result = RgbImageData::filled(usize::MAX, 2, [0, 0, 0]);
        assert!(matches!(result, Err(SimulationError::InvalidInput(_))));

        // width * height fits but the byte length does not
        let result = RgbImageData::filled(usize::MAX / 2, 1, [0, 0, 0]);
        assert!(matches!(result, Err(SimulationError::InvalidInput(_))));
    }

    #[test]
    fn pixel_lookup_on_unchecked_huge_image_is_none() {
        let image = RgbImageData { width: usize::MAX, height: usize::MAX, data: Vec::new() };
        assert_eq!(image.pixel(usize::MAX - 1, usize::MAX - 1), None);
    }

    #[test]
    fn filled_repeats_pixel() {
        let image = RgbImageData::filled(3, 2, [9, 8, 7]).unwrap();
        assert_eq!(image.data.len(), 18);
        assert_eq!(image.pixel(2, 1), Some([9, 8, 7]));
        assert!(image.check_layout().is_ok());
    }
}
