pub mod matrix {
    pub mod matrix;
    pub mod matrix_dense;
}

pub mod adapter;
pub mod config;
pub mod engine;
pub mod error;
pub mod operation;

#[cfg(feature = "python")]
pub mod python;

pub use config::EngineConfig;
pub use engine::{
    add_matrices, determinant, divide_matrices, invert_matrix, multiply_matrices,
    subtract_matrices, MatrixEngine,
};
pub use error::{MatrixError, Result};
pub use matrix::matrix::{Matrix, Shape};
pub use matrix::matrix_dense::MatrixDense;
pub use operation::MatrixOperation;
