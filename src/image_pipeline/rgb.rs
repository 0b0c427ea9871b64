//! RGB image input module
//!
//! Decoding of uploaded JPEG/PNG files into interleaved 8-bit RGB buffers.

mod reader;
mod image_crate_reader;
pub mod types;

pub use reader::RgbImageReader;
pub use image_crate_reader::ImageCrateReader;
pub use types::RgbImageData;
