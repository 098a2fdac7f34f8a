// Conversions between host-side representations (nested lists, text cells)
// and the engine's matrix type, plus the host-facing error wording.

use crate::error::{MatrixError, Result};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::MatrixDense;

pub fn matrix_from_nested(lines: Vec<Vec<f64>>) -> Result<MatrixDense> {
    MatrixDense::from_list(lines)
}

pub fn matrix_to_nested(matrix: &MatrixDense) -> Vec<Vec<f64>> {
    matrix.to_list()
}

/// Parses a grid of text cells as typed into a form.
///
/// Every cell must hold a finite number; blanks are rejected rather than read
/// as zero.
pub fn parse_matrix<S: AsRef<str>>(cells: &[Vec<S>]) -> Result<MatrixDense> {
    let lines = cells
        .iter()
        .enumerate()
        .map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(|(col, cell)| parse_cell(cell.as_ref(), row, col))
                .collect::<Result<Vec<f64>>>()
        })
        .collect::<Result<Vec<Vec<f64>>>>()?;

    MatrixDense::from_list(lines)
}

fn parse_cell(cell: &str, row: usize, col: usize) -> Result<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Err(MatrixError::MalformedInput {
            reason: format!("cell ({}, {}) is empty", row, col),
        });
    }

    match cell.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(MatrixError::MalformedInput {
            reason: format!("cell ({}, {}) is not a number: {:?}", row, col, cell),
        }),
    }
}

/// Message shown to a user for each kind of failure.
pub fn user_message(error: &MatrixError) -> String {
    match error {
        MatrixError::DimensionMismatch {
            operation,
            left,
            right,
        } => format!(
            "Cannot apply {} to a {} and a {} matrix",
            operation, left, right
        ),
        MatrixError::NotSquare { rows, cols } => format!(
            "The matrix must be square, but it is {}x{}",
            rows, cols
        ),
        MatrixError::Singular { .. } => {
            "The matrix is singular (its determinant is zero) and has no inverse".into()
        }
        MatrixError::MalformedInput { reason } => format!("Invalid matrix: {}", reason),
        MatrixError::TooLarge { order, max_order } => format!(
            "Matrices larger than {}x{} are not supported (got {}x{})",
            max_order, max_order, order, order
        ),
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
