use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Invalid argument '{given}', expected one of: {valid}")]
    InvalidArgument { given: String, valid: String },

    #[error("Invalid input image: {0}")]
    InvalidInput(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SimulationError {
    pub fn invalid_argument(given: impl Into<String>, valid: impl Into<String>) -> Self {
        SimulationError::InvalidArgument {
            given: given.into(),
            valid: valid.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_lists_valid_set() {
        let err = SimulationError::invalid_argument("Achromatopsia", "protanopia, deuteranopia, tritanopia");
        let message = err.to_string();
        assert!(message.contains("Achromatopsia"));
        assert!(message.contains("protanopia, deuteranopia, tritanopia"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SimulationError = io.into();
        assert!(matches!(err, SimulationError::IoError(_)));
    }
}
