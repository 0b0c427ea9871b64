//! Linear RGB simulation matrices
//!
//! Each matrix is row-major and applied as `output = input · Mᵀ`, so row `c`
//! holds the weights of the input channels that make up output channel `c`.

/// A 3x3 linear transform over normalized RGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeficiencyMatrix(pub [[f64; 3]; 3]);

impl DeficiencyMatrix {
    pub const PROTANOPIA: Self = Self([
        [0.56667, 0.43333, 0.0],
        [0.55833, 0.44167, 0.0],
        [0.0, 0.24167, 0.75833],
    ]);

    pub const DEUTERANOPIA: Self = Self([
        [0.625, 0.375, 0.0],
        [0.7, 0.3, 0.0],
        [0.0, 0.3, 0.7],
    ]);

    pub const TRITANOPIA: Self = Self([
        [0.95, 0.05, 0.0],
        [0.0, 0.43333, 0.56667],
        [0.0, 0.475, 0.525],
    ]);

    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self(rows)
    }

    pub fn rows(&self) -> &[[f64; 3]; 3] {
        &self.0
    }

    /// Unclamped product for one normalized pixel.
    #[inline]
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        let m = &self.0;
        [
            m[0][0] * rgb[0] + m[0][1] * rgb[1] + m[0][2] * rgb[2],
            m[1][0] * rgb[0] + m[1][1] * rgb[1] + m[1][2] * rgb[2],
            m[2][0] * rgb[0] + m[2][1] * rgb[1] + m[2][2] * rgb[2],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulation_rows_sum_to_one() {
        // white stays (nearly) white under every simulation matrix
        for matrix in [
            DeficiencyMatrix::PROTANOPIA,
            DeficiencyMatrix::DEUTERANOPIA,
            DeficiencyMatrix::TRITANOPIA,
        ] {
            for row in matrix.rows() {
                let sum: f64 = row.iter().sum();
                assert!((sum - 1.0).abs() < 1e-9, "row {:?} sums to {}", row, sum);
            }
        }
    }

    #[test]
    fn apply_uses_rows_as_output_channels() {
        let out = DeficiencyMatrix::PROTANOPIA.apply([1.0, 0.0, 0.0]);
        assert_eq!(out, [0.56667, 0.55833, 0.0]);
    }

    #[test]
    fn identity_is_a_no_op() {
        let pixel = [0.2, 0.4, 0.6];
        assert_eq!(DeficiencyMatrix::IDENTITY.apply(pixel), pixel);
    }
}
