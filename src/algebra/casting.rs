//! Shape-preserving casts between single-row/single-column matrices and
//! vectors.

use crate::error::{MatrizError, Result};
use crate::primitives::{Matrix, Vector};

impl Vector {
    /// Produces a `(len, 1)` column matrix with `result[i][0] = self[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::EmptySlot`] if any source slot is empty.
    pub fn to_matrix(&self) -> Result<Matrix> {
        let mut result = Matrix::new(self.len(), 1)?;
        for i in 0..self.len() {
            result.set(i, 0, self.get(i)?)?;
        }
        Ok(result)
    }
}

impl Matrix {
    /// Flattens a single-row matrix into a vector of length `columns`, or a
    /// single-column matrix into a vector of length `rows`.
    ///
    /// A matrix with multiple rows *and* multiple columns is rejected: the
    /// cast would have to silently discard every column but the first, so
    /// the ambiguity is treated as a caller error.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] unless `rows == 1` or
    /// `columns == 1`, or [`MatrizError::EmptySlot`] if any flattened cell
    /// is empty.
    pub fn to_vector(&self) -> Result<Vector> {
        if self.rows() == 1 {
            let mut result = Vector::new(self.columns())?;
            for k in 0..self.columns() {
                result.set(k, self.get(0, k)?)?;
            }
            return Ok(result);
        }
        if self.columns() == 1 {
            let mut result = Vector::new(self.rows())?;
            for j in 0..self.rows() {
                result.set(j, self.get(j, 0)?)?;
            }
            return Ok(result);
        }
        Err(MatrizError::DimensionMismatch {
            expected: "a single row or a single column".to_string(),
            actual: format!("{}x{}", self.rows(), self.columns()),
        })
    }
}

#[cfg(test)]
#[path = "casting_tests.rs"]
mod tests;
