use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::config::SimulationConfig;
use crate::image_pipeline::rgb::types::RgbImageData;

pub trait RgbImageWriter {
    fn write_rgb(&self, image: &RgbImageData, output: &mut dyn Write, config: &SimulationConfig) -> Result<()>;
}
