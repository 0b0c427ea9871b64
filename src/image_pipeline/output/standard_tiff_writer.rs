use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::{Result, SimulationError};
use crate::image_pipeline::config::SimulationConfig;
use crate::image_pipeline::output::png_writer::encoder_dimensions;
use crate::image_pipeline::output::types::TiffCompression;
use crate::image_pipeline::output::writer::RgbImageWriter;
use crate::image_pipeline::rgb::types::RgbImageData;

pub struct StandardTiffWriter;

impl RgbImageWriter for StandardTiffWriter {
    fn write_rgb(&self, image: &RgbImageData, output: &mut dyn Write, config: &SimulationConfig) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}", image.width, image.height);
        let (width, height) = encoder_dimensions(image)?;

        // TiffEncoder needs Seek, so encode into memory first
        let mut buffer = Vec::new();

        let compression = match config.compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::DeflateFast => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Balanced),
            TiffCompression::DeflateBest => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Best),
        };

        let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| SimulationError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                2 => tiff::tags::Predictor::Horizontal,
                _ => tiff::tags::Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        encoder.write_image::<tiff::encoder::colortype::RGB8>(width, height, &image.data)
            .map_err(|e| SimulationError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
