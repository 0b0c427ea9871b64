//! Image processing pipeline module
//!
//! Color-vision deficiency simulation with separate modules for decoding
//! uploads, the per-pixel transform, output encoding, and orchestration.

pub mod rgb;
pub mod deficiency;
pub mod transform;
pub mod compare;
pub mod output;
pub mod config;
pub mod conversions;
pub mod common;

pub use common::{
    PipelineTimings,
    Result,
    SimulationError,
};

pub use rgb::{
    ImageCrateReader,
    RgbImageData,
    RgbImageReader,
};

pub use deficiency::{
    DeficiencyMatrix,
    DeficiencyType,
};

pub use transform::{
    ColorVisionTransformer,
    PixelTrace,
    explain_pixel,
};

pub use compare::side_by_side;

pub use output::{
    FormatWriter,
    OutputFormat,
    RgbImageWriter,
    TiffCompression,
};

pub use config::{
    SimulationConfig,
    SimulationConfigBuilder,
};

pub use conversions::{
    SimulationOutcome,
    SimulationPipeline,
};
