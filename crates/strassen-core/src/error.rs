//! Error type shared by the matrix engine and its collaborators.

/// Error type for matrix construction, multiplication and input handling.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// An operand that must be square is not.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Operands of a multiplication have different sizes.
    #[error("dimension mismatch: {left}x{left} cannot be multiplied with {right}x{right}")]
    DimensionMismatch { left: usize, right: usize },

    /// A row passed to `Matrix::from_rows` has the wrong length.
    #[error("ragged rows: row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Flat data does not match the requested shape.
    #[error("data length {found} does not match a {rows}x{cols} matrix")]
    LengthMismatch {
        rows: usize,
        cols: usize,
        found: usize,
    },

    /// The driver input ended before both operands were read.
    #[error("input has {found} values, expected at least {expected}")]
    MissingValues { expected: usize, found: usize },

    /// A line of driver input is not an integer.
    #[error("line {line}: cannot parse {value:?} as an integer")]
    Parse { line: usize, value: String },

    /// A matrix given to the graph routines is not a 0/1 adjacency matrix.
    #[error("not an adjacency matrix: {0}")]
    NotAdjacency(String),

    /// An edge probability outside `[0, 1]`.
    #[error("edge probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Configuration error, such as an unknown multiplier name.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different multipliers don't match.
    #[error("result mismatch between multipliers")]
    Mismatch,
}

impl MatrixError {
    /// Whether the error was caused by malformed caller-supplied data.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::NotSquare { .. }
                | Self::DimensionMismatch { .. }
                | Self::RaggedRows { .. }
                | Self::LengthMismatch { .. }
                | Self::MissingValues { .. }
                | Self::Parse { .. }
                | Self::NotAdjacency(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MatrixError::NotSquare { rows: 2, cols: 3 };
        assert_eq!(err.to_string(), "matrix is not square: 2x3");

        let err = MatrixError::Mismatch;
        assert_eq!(err.to_string(), "result mismatch between multipliers");

        let err = MatrixError::Parse {
            line: 4,
            value: "x".into(),
        };
        assert_eq!(err.to_string(), "line 4: cannot parse \"x\" as an integer");
    }

    #[test]
    fn input_error_classification() {
        assert!(MatrixError::MissingValues {
            expected: 8,
            found: 3
        }
        .is_input_error());
        assert!(!MatrixError::Mismatch.is_input_error());
        assert!(!MatrixError::Config("bad".into()).is_input_error());
        assert!(!MatrixError::InvalidProbability(2.0).is_input_error());
    }
}
