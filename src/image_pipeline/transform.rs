//! Color-vision deficiency transform
//!
//! The per-pixel linear simulation and a step-by-step trace of it for a single pixel.

mod transformer;
mod trace;

pub use transformer::{ColorVisionTransformer, simulate_pixel};
pub use trace::{ChannelTrace, PixelTrace, explain_pixel, explain_pixel_with};
