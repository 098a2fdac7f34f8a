use crate::error::Result;
use std::fmt;

/// Row and column count of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Shape { rows, cols }
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self>;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn shape(&self) -> Shape;
    fn identity(n: usize) -> Self;
    fn transpose(&self) -> Self;
    /// Submatrix without `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> Self;
    fn determinant(&self) -> T;
    fn inverse(&self) -> Result<Self>;
    fn at(&self, row: usize, col: usize) -> T;
}
