use std::io::Write;

use image::ImageEncoder;
use image::codecs::jpeg::JpegEncoder;
use tracing::debug;

use crate::image_pipeline::common::error::{Result, SimulationError};
use crate::image_pipeline::config::SimulationConfig;
use crate::image_pipeline::output::png_writer::encoder_dimensions;
use crate::image_pipeline::output::writer::RgbImageWriter;
use crate::image_pipeline::rgb::types::RgbImageData;

pub struct JpegWriter;

impl RgbImageWriter for JpegWriter {
    fn write_rgb(&self, image: &RgbImageData, output: &mut dyn Write, config: &SimulationConfig) -> Result<()> {
        debug!(
            "Encoding JPEG image: {}x{} at quality {}",
            image.width, image.height, config.jpeg_quality
        );
        let (width, height) = encoder_dimensions(image)?;

        JpegEncoder::new_with_quality(output, config.jpeg_quality)
            .write_image(&image.data, width, height, image::ExtendedColorType::Rgb8)
            .map_err(|e| SimulationError::EncodeError(e.to_string()))?;

        debug!("JPEG encoding complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_jpeg_is_readable() {
        let image = RgbImageData::filled(16, 8, [120, 60, 30]).unwrap();
        let mut bytes = Vec::new();

        JpegWriter.write_rgb(&image, &mut bytes, &SimulationConfig::default()).unwrap();

        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 8));
    }
}
