//! Before/after comparison images

use crate::image_pipeline::common::error::{Result, SimulationError};
use crate::image_pipeline::rgb::types::{CHANNELS, RgbImageData};

const BACKGROUND: [u8; 3] = [255, 255, 255];

/// Places `left` and `right` next to each other, separated by a `gap`-pixel white column.
///
/// The result is as tall as the taller input; shorter inputs are top-aligned on white.
pub fn side_by_side(left: &RgbImageData, right: &RgbImageData, gap: usize) -> Result<RgbImageData> {
    left.check_layout()?;
    right.check_layout()?;

    for image in [left, right] {
        if image.width == 0 || image.height == 0 {
            return Err(SimulationError::InvalidDimensions(image.width, image.height));
        }
    }

    let width = left
        .width
        .checked_add(gap)
        .and_then(|w| w.checked_add(right.width))
        .ok_or(SimulationError::InvalidDimensions(usize::MAX, left.height.max(right.height)))?;
    let height = left.height.max(right.height);
    let mut canvas = RgbImageData::filled(width, height, BACKGROUND)?;

    blit(&mut canvas, left, 0);
    blit(&mut canvas, right, left.width + gap);

    Ok(canvas)
}

fn blit(canvas: &mut RgbImageData, image: &RgbImageData, x_offset: usize) {
    let canvas_row = canvas.row_len();
    let offset = x_offset * CHANNELS;

    for (y, row) in image.data.chunks_exact(image.row_len()).enumerate() {
        let start = y * canvas_row + offset;
        canvas.data[start..start + row.len()].copy_from_slice(row);
    }
}
