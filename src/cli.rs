//! Command-line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand, value_parser};

use crate::image_pipeline::DeficiencyType;

/// Simulate color-vision deficiency on JPEG and PNG images
#[derive(Debug, Parser)]
#[command(name = "cvd_simulator", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Simulate a deficiency on an image and write the result
    Simulate {
        /// PNG or JPEG input
        input: PathBuf,
        /// Output file; .png, .jpg/.jpeg or .tif/.tiff
        output: PathBuf,
        /// Deficiency to simulate
        #[arg(short = 't', long = "type", value_enum, ignore_case = true, default_value = "deuteranopia")]
        deficiency: DeficiencyType,
        /// Write original and simulation side by side
        #[arg(long)]
        compare: bool,
        /// Log per-step timings
        #[arg(long)]
        timings: bool,
    },
    /// Walk through the simulation of a single pixel
    Explain {
        #[arg(value_parser = value_parser!(u8))]
        r: u8,
        #[arg(value_parser = value_parser!(u8))]
        g: u8,
        #[arg(value_parser = value_parser!(u8))]
        b: u8,
        /// Deficiency to simulate
        #[arg(short = 't', long = "type", value_enum, ignore_case = true, default_value = "deuteranopia")]
        deficiency: DeficiencyType,
    },
    /// List the supported deficiency types
    Types,
}
