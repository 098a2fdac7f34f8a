use crate::config::EngineConfig;
use crate::error::{MatrixError, Result};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::MatrixDense;

/// Validates operands and runs the arithmetic on [`MatrixDense`] values.
///
/// Every operation is pure: operands are only borrowed and a fresh matrix
/// (or scalar) is returned. A failed check aborts the whole operation.
#[derive(Debug, Clone, Default)]
pub struct MatrixEngine {
    config: EngineConfig,
}

impl MatrixEngine {
    pub fn new(config: EngineConfig) -> Self {
        MatrixEngine { config }
    }

    pub fn add(&self, a: &MatrixDense, b: &MatrixDense) -> Result<MatrixDense> {
        log::debug!("add {} + {}", a.shape(), b.shape());
        a + b
    }

    pub fn subtract(&self, a: &MatrixDense, b: &MatrixDense) -> Result<MatrixDense> {
        log::debug!("subtract {} - {}", a.shape(), b.shape());
        a - b
    }

    pub fn multiply(&self, a: &MatrixDense, b: &MatrixDense) -> Result<MatrixDense> {
        log::debug!("multiply {} x {}", a.shape(), b.shape());
        a * b
    }

    pub fn determinant(&self, matrix: &MatrixDense) -> Result<f64> {
        log::debug!("determinant of {}", matrix.shape());
        self.check_square(matrix)?;
        self.check_order(matrix)?;
        Ok(matrix.determinant())
    }

    pub fn invert(&self, matrix: &MatrixDense) -> Result<MatrixDense> {
        log::debug!("invert {}", matrix.shape());
        self.check_square(matrix)?;
        self.check_order(matrix)?;

        matrix
            .inverse_with_tolerance(self.config.singular_tolerance)
            .map_err(|err| {
                if let MatrixError::Singular { determinant } = &err {
                    log::warn!(
                        "refusing to invert singular {} matrix (determinant {:e})",
                        matrix.shape(),
                        determinant
                    );
                }
                err
            })
    }

    /// `a` times the inverse of `b`.
    ///
    /// `b` is checked for squareness and inverted before `a` is looked at, so
    /// an incompatible `a` surfaces as the multiplication's mismatch.
    pub fn divide(&self, a: &MatrixDense, b: &MatrixDense) -> Result<MatrixDense> {
        log::debug!("divide {} / {}", a.shape(), b.shape());
        self.check_square(b)?;

        let b_inverse = self.invert(b)?;
        self.multiply(a, &b_inverse)
    }

    fn check_square(&self, matrix: &MatrixDense) -> Result<()> {
        if !matrix.shape().is_square() {
            return Err(MatrixError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }
        Ok(())
    }

    fn check_order(&self, matrix: &MatrixDense) -> Result<()> {
        match self.config.max_order {
            Some(max_order) if matrix.rows() > max_order => Err(MatrixError::TooLarge {
                order: matrix.rows(),
                max_order,
            }),
            _ => Ok(()),
        }
    }
}

pub fn add_matrices(a: &MatrixDense, b: &MatrixDense) -> Result<MatrixDense> {
    MatrixEngine::default().add(a, b)
}

pub fn subtract_matrices(a: &MatrixDense, b: &MatrixDense) -> Result<MatrixDense> {
    MatrixEngine::default().subtract(a, b)
}

pub fn multiply_matrices(a: &MatrixDense, b: &MatrixDense) -> Result<MatrixDense> {
    MatrixEngine::default().multiply(a, b)
}

pub fn divide_matrices(a: &MatrixDense, b: &MatrixDense) -> Result<MatrixDense> {
    MatrixEngine::default().divide(a, b)
}

pub fn determinant(matrix: &MatrixDense) -> Result<f64> {
    MatrixEngine::default().determinant(matrix)
}

pub fn invert_matrix(matrix: &MatrixDense) -> Result<MatrixDense> {
    MatrixEngine::default().invert(matrix)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
