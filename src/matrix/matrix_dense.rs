use crate::error::{MatrixError, Result};
use crate::matrix::matrix::{Matrix, Shape};
use itertools::{iproduct, Itertools};
use std::fmt;
use std::ops;

/// Below this `|det|` a matrix is treated as singular.
pub const SINGULAR_TOLERANCE: f64 = 1e-10;

/// Dense real matrix, cells stored row by row.
///
/// Always rectangular with at least one row and one column: the only way to
/// build one from outside the crate is [`Matrix::from_list`], which checks it.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixDense {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl Matrix<f64> for MatrixDense {
    fn from_list(lines: Vec<Vec<f64>>) -> Result<Self> {
        let rows = lines.len();
        let cols = lines.first().map(|line| line.len()).unwrap_or(0);

        if rows == 0 || cols == 0 {
            return Err(MatrixError::MalformedInput {
                reason: format!("matrix must not be empty, got {}x{}", rows, cols),
            });
        }

        if let Some((row, line)) = lines.iter().find_position(|line| line.len() != cols) {
            return Err(MatrixError::MalformedInput {
                reason: format!(
                    "row {} has {} columns, expected {}",
                    row,
                    line.len(),
                    cols
                ),
            });
        }

        Ok(MatrixDense {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    fn to_list(&self) -> Vec<Vec<f64>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.to_vec())
            .collect()
    }

    fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// `n` must be at least 1.
    fn identity(n: usize) -> MatrixDense {
        debug_assert!(n > 0, "identity matrix of order 0");
        MatrixDense {
            rows: n,
            cols: n,
            cells: iproduct!(0..n, 0..n)
                .map(|(i, j)| if i == j { 1.0 } else { 0.0 })
                .collect(),
        }
    }

    fn transpose(&self) -> MatrixDense {
        MatrixDense {
            rows: self.cols,
            cols: self.rows,
            cells: iproduct!(0..self.cols, 0..self.rows)
                .map(|(c, r)| self.at(r, c))
                .collect(),
        }
    }

    fn minor(&self, row: usize, col: usize) -> MatrixDense {
        MatrixDense {
            rows: self.rows - 1,
            cols: self.cols - 1,
            cells: (0..self.rows)
                .filter(|&r| r != row)
                .flat_map(|r| {
                    (0..self.cols)
                        .filter(move |&c| c != col)
                        .map(move |c| self.at(r, c))
                })
                .collect(),
        }
    }

    /// Cofactor expansion along the first row, with closed forms up to 3x3.
    ///
    /// The matrix must be square; this is not checked here. Runs in O(n!).
    fn determinant(&self) -> f64 {
        debug_assert!(self.shape().is_square(), "determinant of {}", self.shape());
        let m = |r: usize, c: usize| self.at(r, c);

        match self.rows {
            1 => m(0, 0),
            2 => m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0),
            3 => {
                m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
                    - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
                    + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
            }
            n => {
                log::trace!("cofactor expansion of a {}x{} matrix", n, n);
                (0..n).fold(0.0, |det, j| {
                    det + sign(j) * m(0, j) * self.minor(0, j).determinant()
                })
            }
        }
    }

    fn inverse(&self) -> Result<MatrixDense> {
        self.inverse_with_tolerance(SINGULAR_TOLERANCE)
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.cols + col]
    }
}

impl MatrixDense {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Inverse through the adjugate: every cofactor is computed from its own
    /// minor, so the cost grows factorially with the order.
    pub fn inverse_with_tolerance(&self, tolerance: f64) -> Result<MatrixDense> {
        if !self.shape().is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let det = self.determinant();
        if det.is_nan() || det.abs() < tolerance {
            return Err(MatrixError::Singular { determinant: det });
        }

        let n = self.rows;
        let cells = match n {
            1 => vec![1.0 / self.at(0, 0)],
            2 => vec![
                self.at(1, 1) / det,
                -self.at(0, 1) / det,
                -self.at(1, 0) / det,
                self.at(0, 0) / det,
            ],
            // cell (r, c) of the adjugate is the cofactor of (c, r)
            _ => iproduct!(0..n, 0..n)
                .map(|(r, c)| sign(r + c) * self.minor(c, r).determinant() / det)
                .collect(),
        };

        Ok(MatrixDense {
            rows: n,
            cols: n,
            cells,
        })
    }

    /// True when every cell is within `tolerance` of the same cell in `other`.
    #[cfg(test)]
    pub(crate) fn approx_eq(&self, other: &MatrixDense, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    fn zip_with(
        &self,
        rhs: &MatrixDense,
        operation: &'static str,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<MatrixDense> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::DimensionMismatch {
                operation,
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        Ok(MatrixDense {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| f(*a, *b))
                .collect(),
        })
    }
}

#[inline(always)]
fn sign(index: usize) -> f64 {
    if index % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

impl ops::Add<&MatrixDense> for &MatrixDense {
    type Output = Result<MatrixDense>;

    fn add(self, rhs: &MatrixDense) -> Result<MatrixDense> {
        self.zip_with(rhs, "addition", |a, b| a + b)
    }
}

impl ops::Sub<&MatrixDense> for &MatrixDense {
    type Output = Result<MatrixDense>;

    fn sub(self, rhs: &MatrixDense) -> Result<MatrixDense> {
        self.zip_with(rhs, "subtraction", |a, b| a - b)
    }
}

impl ops::Mul<&MatrixDense> for &MatrixDense {
    type Output = Result<MatrixDense>;

    fn mul(self, rhs: &MatrixDense) -> Result<MatrixDense> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                operation: "multiplication",
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        Ok(MatrixDense {
            rows: self.rows,
            cols: rhs.cols,
            cells: iproduct!(0..self.rows, 0..rhs.cols)
                .map(|(i, j)| {
                    (0..self.cols).fold(0.0, |acc, k| acc + self.at(i, k) * rhs.at(k, j))
                })
                .collect(),
        })
    }
}

impl fmt::Display for MatrixDense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells.chunks(self.cols) {
            writeln!(f, "[{}]", line.iter().join(", "))?;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn m(lines: Vec<Vec<f64>>) -> MatrixDense {
        MatrixDense::from_list(lines).unwrap()
    }

    #[test]
    fn test_from_list() {
        let a = m(vec![vec![1., 2., 3.], vec![4., 5., 6.]]);
        assert_eq!(a.shape(), Shape::new(2, 3));
        assert_eq!(a.at(1, 0), 4.);
        assert_eq!(a.to_list(), vec![vec![1., 2., 3.], vec![4., 5., 6.]]);

        assert!(matches!(
            MatrixDense::from_list(vec![vec![1., 2.], vec![3.]]),
            Err(MatrixError::MalformedInput { .. })
        ));
        assert!(matches!(
            MatrixDense::from_list(vec![]),
            Err(MatrixError::MalformedInput { .. })
        ));
        assert!(matches!(
            MatrixDense::from_list(vec![vec![], vec![]]),
            Err(MatrixError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_ops() {
        let a = m(vec![vec![1., 2.], vec![3., 4.]]);
        let b = m(vec![vec![5., 6.], vec![7., 8.]]);

        assert_eq!((&a + &b).unwrap().to_list(), vec![vec![6., 8.], vec![10., 12.]]);
        assert_eq!((&b - &a).unwrap().to_list(), vec![vec![4., 4.], vec![4., 4.]]);

        let c = m(vec![vec![2., 0.], vec![1., 2.]]);
        assert_eq!((&a * &c).unwrap().to_list(), vec![vec![4., 4.], vec![10., 8.]]);

        let row = m(vec![vec![1., 2., 3.]]);
        assert_eq!(
            &a + &row,
            Err(MatrixError::DimensionMismatch {
                operation: "addition",
                left: Shape::new(2, 2),
                right: Shape::new(1, 3),
            })
        );
        assert!((&a * &row).is_err());
        assert_eq!((&row.transpose() * &row).unwrap().shape(), Shape::new(3, 3));
        assert_eq!((&row * &row.transpose()).unwrap().to_list(), vec![vec![14.]]);
    }

    #[test]
    fn test_minor_and_transpose() {
        let a = m(vec![
            vec![1., 2., 3.],
            vec![4., 5., 6.],
            vec![7., 8., 9.],
        ]);
        assert_eq!(a.minor(0, 0).to_list(), vec![vec![5., 6.], vec![8., 9.]]);
        assert_eq!(a.minor(1, 2).to_list(), vec![vec![1., 2.], vec![7., 8.]]);
        assert_eq!(
            a.transpose().to_list(),
            vec![vec![1., 4., 7.], vec![2., 5., 8.], vec![3., 6., 9.]]
        );
    }

    #[test]
    fn test_determinant() {
        assert_eq!(m(vec![vec![-7.]]).determinant(), -7.);
        assert_eq!(m(vec![vec![1., 2.], vec![3., 4.]]).determinant(), -2.);
        assert_eq!(
            m(vec![vec![2., 0., 1.], vec![1., 3., 2.], vec![1., 1., 2.]]).determinant(),
            6.
        );

        let a = m(vec![
            vec![1., 0., 2., -1.],
            vec![3., 0., 0., 5.],
            vec![2., 1., 4., -3.],
            vec![1., 0., 5., 0.],
        ]);
        assert_eq!(a.determinant(), 30.);

        for n in 1..7 {
            assert_eq!(MatrixDense::identity(n).determinant(), 1.);
        }

        let zero_row = m(vec![
            vec![1., 2., 3., 4., 5.],
            vec![0., 0., 0., 0., 0.],
            vec![2., 7., 1., 8., 2.],
            vec![3., 1., 4., 1., 5.],
            vec![9., 2., 6., 5., 3.],
        ]);
        assert_eq!(zero_row.determinant(), 0.);
    }

    #[test]
    fn test_inverse() {
        let a = m(vec![vec![1., 2.], vec![3., 4.]]);
        assert_eq!(
            a.inverse().unwrap().to_list(),
            vec![vec![-2., 1.], vec![1.5, -0.5]]
        );

        assert_eq!(m(vec![vec![4.]]).inverse().unwrap().to_list(), vec![vec![0.25]]);

        let b = m(vec![vec![2., 0., 1.], vec![1., 3., 2.], vec![1., 1., 2.]]);
        let inverse = b.inverse().unwrap();
        let expected = m(vec![
            vec![4. / 6., 1. / 6., -3. / 6.],
            vec![0., 3. / 6., -3. / 6.],
            vec![-2. / 6., -2. / 6., 1.],
        ]);
        assert!(inverse.approx_eq(&expected, 1e-15));
        assert!((&b * &inverse)
            .unwrap()
            .approx_eq(&MatrixDense::identity(3), 1e-12));

        assert_eq!(
            m(vec![vec![1., 2.], vec![2., 4.]]).inverse(),
            Err(MatrixError::Singular { determinant: 0. })
        );
        assert_eq!(
            m(vec![vec![1., 2., 3.]]).inverse(),
            Err(MatrixError::NotSquare { rows: 1, cols: 3 })
        );
    }

    #[test]
    fn test_inverse_tolerance() {
        let tiny = m(vec![vec![1e-11]]);
        assert!(matches!(tiny.inverse(), Err(MatrixError::Singular { .. })));
        assert_eq!(
            tiny.inverse_with_tolerance(1e-12).unwrap().to_list(),
            vec![vec![1e11]]
        );
    }

    #[test]
    fn test_inverse_nan() {
        let a = m(vec![vec![f64::NAN, 1.], vec![1., 1.]]);
        assert!(matches!(
            a.inverse(),
            Err(MatrixError::Singular { determinant }) if determinant.is_nan()
        ));

        let b = m(vec![
            vec![1., 2., 3.],
            vec![0., f64::NAN, 1.],
            vec![4., 0., 1.],
        ]);
        assert!(matches!(b.inverse(), Err(MatrixError::Singular { .. })));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "identity matrix of order 0")]
    fn test_identity_empty() {
        MatrixDense::identity(0);
    }

    #[test]
    fn test_display() {
        let a = m(vec![vec![1., 2.5], vec![-3., 4.]]);
        assert_eq!(a.to_string(), "[1, 2.5]\n[-3, 4]\n");
    }
}
