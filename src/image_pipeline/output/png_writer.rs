use std::io::Write;

use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use tracing::debug;

use crate::image_pipeline::common::error::{Result, SimulationError};
use crate::image_pipeline::config::SimulationConfig;
use crate::image_pipeline::output::writer::RgbImageWriter;
use crate::image_pipeline::rgb::types::RgbImageData;

pub struct PngWriter;

impl RgbImageWriter for PngWriter {
    fn write_rgb(&self, image: &RgbImageData, output: &mut dyn Write, _config: &SimulationConfig) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width, image.height);
        let (width, height) = encoder_dimensions(image)?;

        PngEncoder::new(output)
            .write_image(&image.data, width, height, image::ExtendedColorType::Rgb8)
            .map_err(|e| SimulationError::EncodeError(e.to_string()))?;

        debug!("PNG encoding complete");
        Ok(())
    }
}

/// Encoders take `u32` sides; anything larger cannot be written.
pub(crate) fn encoder_dimensions(image: &RgbImageData) -> Result<(u32, u32)> {
    image.check_layout()?;
    match (u32::try_from(image.width), u32::try_from(image.height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(SimulationError::InvalidDimensions(image.width, image.height)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_png_decodes_to_same_pixels() {
        let image = RgbImageData::new(2, 1, vec![255, 0, 0, 0, 128, 255]).unwrap();
        let mut bytes = Vec::new();

        PngWriter.write_rgb(&image, &mut bytes, &SimulationConfig::default()).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (2, 1));
        assert_eq!(decoded.into_raw(), image.data);
    }

    #[test]
    fn malformed_buffer_is_not_encoded() {
        let image = RgbImageData { width: 4, height: 4, data: vec![0; 3] };
        let mut bytes = Vec::new();

        let result = PngWriter.write_rgb(&image, &mut bytes, &SimulationConfig::default());

        assert!(matches!(result, Err(SimulationError::InvalidInput(_))));
        assert!(bytes.is_empty());
    }
}
