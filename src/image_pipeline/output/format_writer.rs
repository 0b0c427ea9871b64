use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::config::SimulationConfig;
use crate::image_pipeline::output::types::OutputFormat;
use crate::image_pipeline::output::writer::RgbImageWriter;
use crate::image_pipeline::output::{JpegWriter, PngWriter, StandardTiffWriter};
use crate::image_pipeline::rgb::types::RgbImageData;

/// Dispatches to the encoder named by `config.output_format`.
pub struct FormatWriter;

impl RgbImageWriter for FormatWriter {
    fn write_rgb(&self, image: &RgbImageData, output: &mut dyn Write, config: &SimulationConfig) -> Result<()> {
        match config.output_format {
            OutputFormat::Png => PngWriter.write_rgb(image, output, config),
            OutputFormat::Jpeg => JpegWriter.write_rgb(image, output, config),
            OutputFormat::Tiff => StandardTiffWriter.write_rgb(image, output, config),
        }
    }
}
