//! Color-vision deficiency types and their simulation matrices

pub mod matrix;
pub mod types;

pub use matrix::DeficiencyMatrix;
pub use types::DeficiencyType;
