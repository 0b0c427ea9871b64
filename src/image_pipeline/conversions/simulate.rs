use tracing::{info, instrument, warn};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{Result, SimulationError},
    common::timing::PipelineTimings,
    compare::side_by_side,
    config::SimulationConfig,
    deficiency::DeficiencyType,
    output::{FormatWriter, RgbImageWriter},
    rgb::{ImageCrateReader, RgbImageData, RgbImageReader},
    transform::ColorVisionTransformer,
};

/// The decoded input next to its simulation.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub deficiency: DeficiencyType,
    pub original: RgbImageData,
    pub simulated: RgbImageData,
}

pub struct SimulationPipeline<R: RgbImageReader, W: RgbImageWriter> {
    reader: R,
    writer: W,
    config: SimulationConfig,
}

impl SimulationPipeline<ImageCrateReader, FormatWriter> {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            writer: FormatWriter,
            config,
        }
    }
}

impl<R: RgbImageReader, W: RgbImageWriter> SimulationPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: SimulationConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(SimulationError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(width, height, max, "Image exceeds maximum dimension");
                return Err(SimulationError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    fn transformer(&self) -> ColorVisionTransformer {
        ColorVisionTransformer::with_parallel(self.config.parallel)
    }

    /// Decodes and simulates with the configured deficiency, without encoding.
    pub fn simulate(&self, input_data: &[u8]) -> Result<SimulationOutcome> {
        self.simulate_timed(input_data, self.config.deficiency, &mut PipelineTimings::new())
    }

    /// Like [`simulate`](Self::simulate) but with a deficiency given by name.
    /// An unknown name fails before the input is decoded.
    pub fn simulate_named(&self, input_data: &[u8], selector: &str) -> Result<SimulationOutcome> {
        let deficiency: DeficiencyType = selector.parse()?;
        self.simulate_timed(input_data, deficiency, &mut PipelineTimings::new())
    }

    #[instrument(skip_all, fields(input_size = input_data.len(), deficiency = deficiency.name()))]
    fn simulate_timed(
        &self,
        input_data: &[u8],
        deficiency: DeficiencyType,
        timings: &mut PipelineTimings,
    ) -> Result<SimulationOutcome> {
        let original = timings.time("decode_input", || {
            let _span = tracing::info_span!("decode_input").entered();
            self.reader.read_rgb(input_data)
        })?;

        timings.time("validate_dimensions", || {
            let _span = tracing::info_span!("validate_dimensions",
                width = original.width,
                height = original.height
            ).entered();
            self.validate_dimensions(original.width, original.height)
        })?;

        let simulated = timings.time("simulate", || {
            let _span = tracing::info_span!("simulate").entered();
            self.transformer().transform(&original, deficiency)
        })?;

        Ok(SimulationOutcome {
            deficiency,
            original,
            simulated,
        })
    }

    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        self.convert_with_timings(input_data, output).map(|_| ())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert_with_timings(
        &self,
        input_data: &[u8],
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!(deficiency = %self.config.deficiency, "Starting simulation");

        let outcome = self.simulate_timed(input_data, self.config.deficiency, &mut timings)?;

        let composed;
        let result = if self.config.side_by_side {
            composed = timings.time("compose_comparison", || {
                let _span = tracing::info_span!("compose_comparison").entered();
                side_by_side(&outcome.original, &outcome.simulated, self.config.comparison_gap)
            })?;
            &composed
        } else {
            &outcome.simulated
        };

        timings.time("encode_output", || {
            let _span = tracing::info_span!("encode_output",
                format = ?self.config.output_format
            ).entered();
            self.writer.write_rgb(result, output, &self.config)
        })?;

        info!(
            width = outcome.original.width,
            height = outcome.original.height,
            elapsed_ms = timings.total_duration().as_secs_f64() * 1000.0,
            "Simulation complete"
        );
        Ok(timings)
    }

    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        self.convert_file_with_timings(input_path, output_path).map(|_| ())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file_with_timings<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let mut timings = PipelineTimings::new();

        let input_data = timings.time("read_input_file", || {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                SimulationError::InputReadError(format!("{}: {}", input_path.display(), e))
            })
        })?;

        // Encode into memory so a failed simulation never leaves a truncated output file behind
        let mut encoded = Vec::new();
        let conversion_timings = self.convert_with_timings(&input_data, &mut encoded)?;
        for step in conversion_timings.steps() {
            timings.add_step(step.name.clone(), step.duration);
        }

        timings.time("write_output_file", || {
            let _span = tracing::info_span!("write_output_file", bytes = encoded.len()).entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                SimulationError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })
        })?;

        Ok(timings)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SimulationConfig) {
        self.config = config;
    }
}
