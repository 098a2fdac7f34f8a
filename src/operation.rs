use crate::engine::MatrixEngine;
use crate::error::Result;
use crate::matrix::matrix::{Matrix, Shape};
use crate::matrix::matrix_dense::MatrixDense;
use std::fmt;
use std::str::FromStr;

/// Binary operations a host can offer on two matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixOperation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl MatrixOperation {
    pub const ALL: [MatrixOperation; 4] = [
        MatrixOperation::Add,
        MatrixOperation::Subtract,
        MatrixOperation::Multiply,
        MatrixOperation::Divide,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            MatrixOperation::Add => "+",
            MatrixOperation::Subtract => "-",
            MatrixOperation::Multiply => "×",
            MatrixOperation::Divide => "÷",
        }
    }

    /// Shape-only check, so a UI can disable operations before any input is
    /// typed. A singular divisor still fails in [`MatrixOperation::apply`].
    pub fn is_valid(&self, a: Shape, b: Shape) -> bool {
        match self {
            MatrixOperation::Add | MatrixOperation::Subtract => a == b,
            MatrixOperation::Multiply => a.cols == b.rows,
            MatrixOperation::Divide => b.is_square() && a.cols == b.rows,
        }
    }

    pub fn apply(
        &self,
        engine: &MatrixEngine,
        a: &MatrixDense,
        b: &MatrixDense,
    ) -> Result<MatrixDense> {
        match self {
            MatrixOperation::Add => engine.add(a, b),
            MatrixOperation::Subtract => engine.subtract(a, b),
            MatrixOperation::Multiply => engine.multiply(a, b),
            MatrixOperation::Divide => engine.divide(a, b),
        }
    }

    /// Operations whose shape check passes for `a` and `b`.
    pub fn available(a: &MatrixDense, b: &MatrixDense) -> Vec<MatrixOperation> {
        MatrixOperation::ALL
            .into_iter()
            .filter(|op| op.is_valid(a.shape(), b.shape()))
            .collect()
    }
}

impl fmt::Display for MatrixOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for MatrixOperation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "+" | "add" => Ok(MatrixOperation::Add),
            "-" | "subtract" => Ok(MatrixOperation::Subtract),
            "×" | "*" | "x" | "multiply" => Ok(MatrixOperation::Multiply),
            "÷" | "/" | "divide" => Ok(MatrixOperation::Divide),
            other => Err(format!("Unknown matrix operation: {}", other)),
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
