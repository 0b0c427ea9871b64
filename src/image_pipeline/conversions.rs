//! Pipeline conversions module
//!
//! Orchestrates decode, simulation and re-encoding of uploaded images.

mod simulate;


pub use simulate::{SimulationOutcome, SimulationPipeline};
