//! Simulation pipeline configuration

use crate::image_pipeline::deficiency::DeficiencyType;
use crate::image_pipeline::output::types::{OutputFormat, TiffCompression};

/// Configuration for decoding, simulating and re-encoding an image
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Deficiency to simulate
    pub deficiency: DeficiencyType,
    /// Encoding of the written image
    pub output_format: OutputFormat,
    /// Compression method for TIFF output
    pub compression: TiffCompression,
    /// Predictor value for TIFF compression (2 for horizontal differencing)
    pub predictor: Option<u16>,
    /// JPEG quality, 1-100
    pub jpeg_quality: u8,
    /// Whether to validate image dimensions before simulating
    pub validate_dimensions: bool,
    /// Largest accepted width or height when validating
    pub max_dimension: Option<usize>,
    /// Whether to split rows across the rayon pool
    pub parallel: bool,
    /// Write original and simulated images next to each other instead of the simulation alone
    pub side_by_side: bool,
    /// Width in pixels of the white separator in side-by-side output
    pub comparison_gap: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            deficiency: DeficiencyType::default(),
            output_format: OutputFormat::default(),
            compression: TiffCompression::default(),
            predictor: None,
            jpeg_quality: 90,
            validate_dimensions: true,
            max_dimension: None,
            parallel: true,
            side_by_side: false,
            comparison_gap: 16,
        }
    }
}

impl SimulationConfig {
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }
}

/// Builder for SimulationConfig
#[derive(Default)]
pub struct SimulationConfigBuilder {
    deficiency: Option<DeficiencyType>,
    output_format: Option<OutputFormat>,
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    jpeg_quality: Option<u8>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    parallel: Option<bool>,
    side_by_side: Option<bool>,
    comparison_gap: Option<usize>,
}

impl SimulationConfigBuilder {
    pub fn deficiency(mut self, deficiency: DeficiencyType) -> Self {
        self.deficiency = Some(deficiency);
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    /// Clamped to 1..=100.
    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = Some(quality.clamp(1, 100));
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn parallel(mut self, enable: bool) -> Self {
        self.parallel = Some(enable);
        self
    }

    pub fn side_by_side(mut self, enable: bool) -> Self {
        self.side_by_side = Some(enable);
        self
    }

    pub fn comparison_gap(mut self, gap: usize) -> Self {
        self.comparison_gap = Some(gap);
        self
    }

    pub fn build(self) -> SimulationConfig {
        let default = SimulationConfig::default();
        SimulationConfig {
            deficiency: self.deficiency.unwrap_or(default.deficiency),
            output_format: self.output_format.unwrap_or(default.output_format),
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            jpeg_quality: self.jpeg_quality.unwrap_or(default.jpeg_quality),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            parallel: self.parallel.unwrap_or(default.parallel),
            side_by_side: self.side_by_side.unwrap_or(default.side_by_side),
            comparison_gap: self.comparison_gap.unwrap_or(default.comparison_gap),
        }
    }
}
