use std::fmt;

use crate::image_pipeline::deficiency::{DeficiencyMatrix, DeficiencyType};
use crate::image_pipeline::transform::transformer::{clamp_unit, normalize, to_byte};

const CHANNEL_NAMES: [&str; 3] = ["R", "G", "B"];

/// How one output channel was computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelTrace {
    /// `M[c][k] * in[k]` for k = R, G, B
    pub terms: [f64; 3],
    pub sum: f64,
    pub clamped: f64,
    pub byte: u8,
}

/// Every intermediate value of the simulation for a single pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelTrace {
    pub input: [u8; 3],
    pub deficiency: Option<DeficiencyType>,
    pub matrix: DeficiencyMatrix,
    pub normalized: [f64; 3],
    pub channels: [ChannelTrace; 3],
}

impl PixelTrace {
    pub fn output(&self) -> [u8; 3] {
        self.channels.map(|c| c.byte)
    }
}

pub fn explain_pixel(pixel: [u8; 3], deficiency: DeficiencyType) -> PixelTrace {
    let mut trace = explain_pixel_with(pixel, deficiency.matrix());
    trace.deficiency = Some(deficiency);
    trace
}

pub fn explain_pixel_with(pixel: [u8; 3], matrix: &DeficiencyMatrix) -> PixelTrace {
    let normalized = normalize(pixel);
    let sums = matrix.apply(normalized);
    let rows = matrix.rows();

    let channels = std::array::from_fn(|c| {
        let terms = std::array::from_fn(|k| rows[c][k] * normalized[k]);
        ChannelTrace {
            terms,
            sum: sums[c],
            clamped: clamp_unit(sums[c]),
            byte: to_byte(sums[c]),
        }
    });

    PixelTrace {
        input: pixel,
        deficiency: None,
        matrix: *matrix,
        normalized,
        channels,
    }
}

impl fmt::Display for PixelTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.input;
        match self.deficiency {
            Some(deficiency) => writeln!(f, "Simulating {} for pixel [{r}, {g}, {b}]", deficiency)?,
            None => writeln!(f, "Simulating custom matrix for pixel [{r}, {g}, {b}]")?,
        }

        let [nr, ng, nb] = self.normalized;
        writeln!(f, "1. Normalize to [0,1]: [{nr:.5}, {ng:.5}, {nb:.5}]")?;

        writeln!(f, "2. Multiply by the matrix rows:")?;
        let rows = self.matrix.rows();
        for (c, channel) in self.channels.iter().enumerate() {
            write!(f, "   {}_sim =", CHANNEL_NAMES[c])?;
            for k in 0..3 {
                let sep = if k == 0 { " " } else { " + " };
                write!(f, "{sep}{}*{:.5}", rows[c][k], self.normalized[k])?;
            }
            writeln!(f, " = {:.5}", channel.sum)?;
        }

        let clamped = self.channels.map(|c| c.clamped);
        writeln!(
            f,
            "3. Clamp to [0,1]: [{:.5}, {:.5}, {:.5}]",
            clamped[0], clamped[1], clamped[2]
        )?;

        let [or, og, ob] = self.output();
        write!(f, "4. Scale by 255 and truncate: [{or}, {og}, {ob}]")
    }
}
