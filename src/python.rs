use crate::adapter::{matrix_from_nested, matrix_to_nested, user_message};
use crate::engine;
use crate::error::MatrixError;
use crate::matrix::matrix_dense::MatrixDense;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

// --------------------------------------------------
//                      PYTHON
// --------------------------------------------------

fn to_py_err(error: MatrixError) -> PyErr {
    PyValueError::new_err(user_message(&error))
}

fn binary(
    a: Vec<Vec<f64>>,
    b: Vec<Vec<f64>>,
    operation: fn(&MatrixDense, &MatrixDense) -> crate::error::Result<MatrixDense>,
) -> PyResult<Vec<Vec<f64>>> {
    let a = matrix_from_nested(a).map_err(to_py_err)?;
    let b = matrix_from_nested(b).map_err(to_py_err)?;
    match operation(&a, &b) {
        Ok(result) => Ok(matrix_to_nested(&result)),
        Err(error) => Err(to_py_err(error)),
    }
}

#[pyfunction]
pub fn add_matrices(a: Vec<Vec<f64>>, b: Vec<Vec<f64>>) -> PyResult<Vec<Vec<f64>>> {
    binary(a, b, engine::add_matrices)
}

#[pyfunction]
pub fn subtract_matrices(a: Vec<Vec<f64>>, b: Vec<Vec<f64>>) -> PyResult<Vec<Vec<f64>>> {
    binary(a, b, engine::subtract_matrices)
}

#[pyfunction]
pub fn multiply_matrices(a: Vec<Vec<f64>>, b: Vec<Vec<f64>>) -> PyResult<Vec<Vec<f64>>> {
    binary(a, b, engine::multiply_matrices)
}

#[pyfunction]
pub fn divide_matrices(a: Vec<Vec<f64>>, b: Vec<Vec<f64>>) -> PyResult<Vec<Vec<f64>>> {
    binary(a, b, engine::divide_matrices)
}

#[pyfunction]
pub fn invert_matrix(matrix: Vec<Vec<f64>>) -> PyResult<Vec<Vec<f64>>> {
    let matrix = matrix_from_nested(matrix).map_err(to_py_err)?;
    match engine::invert_matrix(&matrix) {
        Ok(result) => Ok(matrix_to_nested(&result)),
        Err(error) => Err(to_py_err(error)),
    }
}

#[pyfunction]
pub fn determinant(matrix: Vec<Vec<f64>>) -> PyResult<f64> {
    let matrix = matrix_from_nested(matrix).map_err(to_py_err)?;
    engine::determinant(&matrix).map_err(to_py_err)
}

/// Dense matrix arithmetic implemented in Rust.
#[pymodule]
fn matrix_calculator(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(add_matrices, m)?)?;
    m.add_function(wrap_pyfunction!(subtract_matrices, m)?)?;
    m.add_function(wrap_pyfunction!(multiply_matrices, m)?)?;
    m.add_function(wrap_pyfunction!(divide_matrices, m)?)?;
    m.add_function(wrap_pyfunction!(invert_matrix, m)?)?;
    m.add_function(wrap_pyfunction!(determinant, m)?)?;
    Ok(())
}
