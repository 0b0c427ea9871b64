//! Output encoding types

use std::path::Path;

use crate::image_pipeline::common::error::{Result, SimulationError};

/// Encoding of the simulated image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless, the default
    #[default]
    Png,
    /// Lossy, quality taken from the config
    Jpeg,
    /// Uncompressed or LZW/Deflate compressed TIFF
    Tiff,
}

impl OutputFormat {
    /// Picks the format from the file extension, case-insensitively.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "tif" | "tiff" => Ok(OutputFormat::Tiff),
            _ => Err(SimulationError::UnsupportedFormat(format!(
                "{} (expected .png, .jpg, .jpeg, .tif or .tiff)",
                path.display()
            ))),
        }
    }
}

/// TIFF compression methods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    #[default]
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression - fast level
    DeflateFast,
    /// Deflate compression - balanced
    DeflateBalanced,
    /// Deflate compression - best compression (slower)
    DeflateBest,
}
