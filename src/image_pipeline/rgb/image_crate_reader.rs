//! Reader for uploaded JPEG and PNG files backed by the `image` crate.

use image::ImageFormat;
use tracing::debug;

use crate::image_pipeline::common::error::{Result, SimulationError};
use crate::image_pipeline::rgb::reader::RgbImageReader;
use crate::image_pipeline::rgb::types::RgbImageData;

/// Decodes PNG or JPEG bytes and normalizes them to 8-bit RGB.
///
/// Grayscale, alpha and 16-bit sources are converted to RGB8 here, so the
/// transform only ever sees 3-channel data. Alpha is dropped, not blended.
pub struct ImageCrateReader;

const ACCEPTED_FORMATS: [ImageFormat; 2] = [ImageFormat::Png, ImageFormat::Jpeg];

impl RgbImageReader for ImageCrateReader {
    fn read_rgb(&self, data: &[u8]) -> Result<RgbImageData> {
        debug!("Decoding image, {} bytes", data.len());

        let format = image::guess_format(data)
            .map_err(|e| SimulationError::UnsupportedFormat(e.to_string()))?;
        if !ACCEPTED_FORMATS.contains(&format) {
            return Err(SimulationError::UnsupportedFormat(format!(
                "{:?} (expected PNG or JPEG)",
                format
            )));
        }

        let decoded = image::load_from_memory_with_format(data, format)
            .map_err(|e| SimulationError::DecodeError(e.to_string()))?;

        debug!(
            "Decoded {:?} image: {}x{} ({:?})",
            format,
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();

        RgbImageData::new(width as usize, height as usize, rgb.into_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GrayImage, ImageBuffer, Rgba};
    use std::io::Cursor;

    fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, format).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn rgba_png_drops_alpha() {
        let rgba = ImageBuffer::from_pixel(2, 3, Rgba([10u8, 20, 30, 40]));
        let bytes = encode(DynamicImage::ImageRgba8(rgba), ImageFormat::Png);

        let image = ImageCrateReader.read_rgb(&bytes).unwrap();

        assert_eq!((image.width, image.height), (2, 3));
        assert_eq!(image.data.len(), 2 * 3 * 3);
        assert_eq!(image.pixel(1, 2), Some([10, 20, 30]));
    }

    #[test]
    fn grayscale_png_expands_to_rgb() {
        let gray = GrayImage::from_pixel(4, 4, image::Luma([77u8]));
        let bytes = encode(DynamicImage::ImageLuma8(gray), ImageFormat::Png);

        let image = ImageCrateReader.read_rgb(&bytes).unwrap();

        assert_eq!(image.pixel(3, 3), Some([77, 77, 77]));
    }

    #[test]
    fn jpeg_is_accepted() {
        let rgb = image::RgbImage::from_pixel(8, 8, image::Rgb([200u8, 100, 50]));
        let bytes = encode(DynamicImage::ImageRgb8(rgb), ImageFormat::Jpeg);

        let image = ImageCrateReader.read_rgb(&bytes).unwrap();

        assert_eq!((image.width, image.height), (8, 8));
        assert!(image.check_layout().is_ok());
    }

    #[test]
    fn other_formats_are_rejected() {
        let rgb = image::RgbImage::from_pixel(2, 2, image::Rgb([1u8, 2, 3]));
        let bytes = encode(DynamicImage::ImageRgb8(rgb), ImageFormat::Bmp);

        let result = ImageCrateReader.read_rgb(&bytes);

        assert!(matches!(result, Err(SimulationError::UnsupportedFormat(_))));
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let result = ImageCrateReader.read_rgb(b"definitely not an image");
        assert!(matches!(result, Err(SimulationError::UnsupportedFormat(_))));
    }

    #[test]
    fn truncated_png_fails_to_decode() {
        let rgb = image::RgbImage::from_pixel(16, 16, image::Rgb([1u8, 2, 3]));
        let mut bytes = encode(DynamicImage::ImageRgb8(rgb), ImageFormat::Png);
        bytes.truncate(40);

        let result = ImageCrateReader.read_rgb(&bytes);

        assert!(matches!(result, Err(SimulationError::DecodeError(_))));
    }
}
