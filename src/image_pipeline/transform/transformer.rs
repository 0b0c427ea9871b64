use rayon::prelude::*;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::deficiency::{DeficiencyMatrix, DeficiencyType};
use crate::image_pipeline::rgb::types::{CHANNELS, RgbImageData};

const CHANNEL_MAX: f64 = 255.0;

/// Applies a deficiency matrix to every pixel of an RGB image.
///
/// Output bytes are `trunc(clamp(M · rgb / 255, 0, 1) * 255)`. Truncation is
/// deliberate: results must match a float multiply followed by an integer
/// cast, never round-to-nearest.
#[derive(Debug, Clone, Copy)]
pub struct ColorVisionTransformer {
    parallel: bool,
}

impl Default for ColorVisionTransformer {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl ColorVisionTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits rows across the rayon pool when `parallel` is set. Output is identical either way.
    pub fn with_parallel(parallel: bool) -> Self {
        Self { parallel }
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn transform(&self, image: &RgbImageData, deficiency: DeficiencyType) -> Result<RgbImageData> {
        self.apply_matrix(image, deficiency.matrix())
    }

    /// Parses `selector` first; an unknown name fails before any pixel is read.
    pub fn transform_named(&self, image: &RgbImageData, selector: &str) -> Result<RgbImageData> {
        let deficiency: DeficiencyType = selector.parse()?;
        self.transform(image, deficiency)
    }

    pub fn apply_matrix(&self, image: &RgbImageData, matrix: &DeficiencyMatrix) -> Result<RgbImageData> {
        image.check_layout()?;

        let mut data = vec![0u8; image.data.len()];
        let row_len = image.row_len();

        if !data.is_empty() {
            if self.parallel {
                data.par_chunks_mut(row_len)
                    .zip(image.data.par_chunks(row_len))
                    .for_each(|(dst, src)| transform_row(src, dst, matrix));
            } else {
                data.chunks_mut(row_len)
                    .zip(image.data.chunks(row_len))
                    .for_each(|(dst, src)| transform_row(src, dst, matrix));
            }
        }

        Ok(RgbImageData {
            width: image.width,
            height: image.height,
            data,
        })
    }
}

fn transform_row(src: &[u8], dst: &mut [u8], matrix: &DeficiencyMatrix) {
    for (out, pixel) in dst.chunks_exact_mut(CHANNELS).zip(src.chunks_exact(CHANNELS)) {
        out.copy_from_slice(&simulate_pixel([pixel[0], pixel[1], pixel[2]], matrix));
    }
}

/// Simulates a single pixel.
#[inline]
pub fn simulate_pixel(pixel: [u8; 3], matrix: &DeficiencyMatrix) -> [u8; 3] {
    matrix.apply(normalize(pixel)).map(to_byte)
}

#[inline]
pub(crate) fn normalize(pixel: [u8; 3]) -> [f64; 3] {
    pixel.map(|c| c as f64 / CHANNEL_MAX)
}

#[inline]
pub(crate) fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Float-to-int cast truncates toward zero.
#[inline]
pub(crate) fn to_byte(value: f64) -> u8 {
    (clamp_unit(value) * CHANNEL_MAX) as u8
}
