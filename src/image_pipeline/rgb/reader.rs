use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::rgb::types::RgbImageData;

pub trait RgbImageReader {
    fn read_rgb(&self, data: &[u8]) -> Result<RgbImageData>;
}
