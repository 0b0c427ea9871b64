//! Deficiency type selector

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use clap::builder::PossibleValue;

use crate::image_pipeline::common::error::SimulationError;
use crate::image_pipeline::deficiency::matrix::DeficiencyMatrix;

/// The three simulated color-vision deficiencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DeficiencyType {
    /// Missing or malfunctioning L-cones (red)
    Protanopia,
    /// Missing or malfunctioning M-cones (green)
    #[default]
    Deuteranopia,
    /// Missing S-cones (blue)
    Tritanopia,
}

impl DeficiencyType {
    pub const ALL: [DeficiencyType; 3] = [
        DeficiencyType::Protanopia,
        DeficiencyType::Deuteranopia,
        DeficiencyType::Tritanopia,
    ];

    pub fn matrix(self) -> &'static DeficiencyMatrix {
        match self {
            DeficiencyType::Protanopia => &DeficiencyMatrix::PROTANOPIA,
            DeficiencyType::Deuteranopia => &DeficiencyMatrix::DEUTERANOPIA,
            DeficiencyType::Tritanopia => &DeficiencyMatrix::TRITANOPIA,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DeficiencyType::Protanopia => "protanopia",
            DeficiencyType::Deuteranopia => "deuteranopia",
            DeficiencyType::Tritanopia => "tritanopia",
        }
    }

    /// Selector label naming the affected cone.
    pub fn label(self) -> &'static str {
        match self {
            DeficiencyType::Protanopia => "Protanopia (red)",
            DeficiencyType::Deuteranopia => "Deuteranopia (green)",
            DeficiencyType::Tritanopia => "Tritanopia (blue)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DeficiencyType::Protanopia => {
                "L-cones missing or malfunctioning; reds look dark or brownish"
            }
            DeficiencyType::Deuteranopia => {
                "M-cones missing or malfunctioning; red and green are hard to tell apart"
            }
            DeficiencyType::Tritanopia => {
                "S-cones missing; blue and green get confused, yellows may vanish"
            }
        }
    }

    /// Comma-separated list of accepted names, used in error messages.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for DeficiencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DeficiencyType {
    type Err = SimulationError;

    /// Accepts the bare name or the full label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selector = s.trim();

        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(selector) || t.label().eq_ignore_ascii_case(selector))
            .ok_or_else(|| SimulationError::invalid_argument(s, Self::valid_names()))
    }
}

impl ValueEnum for DeficiencyType {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(
            PossibleValue::new(self.name())
                .alias(self.label())
                .help(self.description()),
        )
    }
}
