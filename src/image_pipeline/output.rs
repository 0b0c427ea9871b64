//! Image output module
//!
//! Encoders for simulated images: PNG and JPEG through the `image` crate,
//! TIFF through the `tiff` crate.

mod writer;
mod png_writer;
mod jpeg_writer;
mod standard_tiff_writer;
mod format_writer;
pub mod types;

pub use writer::RgbImageWriter;
pub use png_writer::PngWriter;
pub use jpeg_writer::JpegWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use format_writer::FormatWriter;
pub use types::{OutputFormat, TiffCompression};
