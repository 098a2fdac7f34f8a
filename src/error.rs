use crate::matrix::matrix::Shape;
use thiserror::Error;

/// Every failure the engine and its boundary adapter can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// Operand shapes are incompatible for an element-wise or product operation.
    #[error("matrix dimensions incompatible for {operation}: {left} and {right}")]
    DimensionMismatch {
        operation: &'static str,
        left: Shape,
        right: Shape,
    },

    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// `|det|` fell below the configured tolerance.
    #[error("matrix is singular (determinant {determinant:e})")]
    Singular { determinant: f64 },

    #[error("malformed matrix input: {reason}")]
    MalformedInput { reason: String },

    #[error("matrix of order {order} exceeds the configured maximum of {max_order}")]
    TooLarge { order: usize, max_order: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
