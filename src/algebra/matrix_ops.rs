//! Algebraic operations over matrices.
//!
//! Same conventions as the vector operations: fresh-result methods return a
//! new [`Matrix`], `_into` variants write into a caller-supplied destination
//! and return a status, and destination variants may leave the destination
//! partially updated when a source cell turns out to be empty mid-loop.

use crate::error::{MatrizError, Result};
use crate::primitives::{Element, Matrix, Vector};

fn check_same_shape(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(MatrizError::DimensionMismatch {
            expected: format!("{}x{}", a.rows(), a.columns()),
            actual: format!("{}x{}", b.rows(), b.columns()),
        });
    }
    Ok(())
}

impl Matrix {
    /// Elementwise sum over all cells.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] unless both matrices have
    /// identical shape, or [`MatrizError::EmptySlot`] if any source cell is
    /// empty (the partial result is dropped).
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        check_same_shape(self, other)?;
        let mut result = Matrix::new(self.rows(), self.columns())?;
        for j in 0..self.rows() {
            for k in 0..self.columns() {
                result.set(j, k, self.get(j, k)? + other.get(j, k)?)?;
            }
        }
        Ok(result)
    }

    /// Elementwise sum written into `dest`.
    ///
    /// On a mid-loop failure `dest` is left partially updated.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] unless `self`, `other` and
    /// `dest` all have identical shape, or [`MatrizError::EmptySlot`] for an
    /// empty source cell.
    pub fn add_into(&self, other: &Matrix, dest: &mut Matrix) -> Result<()> {
        check_same_shape(self, other)?;
        check_same_shape(self, dest)?;
        for j in 0..self.rows() {
            for k in 0..self.columns() {
                dest.set(j, k, self.get(j, k)? + other.get(j, k)?)?;
            }
        }
        Ok(())
    }

    /// Elementwise difference over all cells.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] unless both matrices have
    /// identical shape, or [`MatrizError::EmptySlot`] if any source cell is
    /// empty.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        check_same_shape(self, other)?;
        let mut result = Matrix::new(self.rows(), self.columns())?;
        for j in 0..self.rows() {
            for k in 0..self.columns() {
                result.set(j, k, self.get(j, k)? - other.get(j, k)?)?;
            }
        }
        Ok(result)
    }

    /// Elementwise difference written into `dest`.
    ///
    /// On a mid-loop failure `dest` is left partially updated.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] unless `self`, `other` and
    /// `dest` all have identical shape, or [`MatrizError::EmptySlot`] for an
    /// empty source cell.
    pub fn sub_into(&self, other: &Matrix, dest: &mut Matrix) -> Result<()> {
        check_same_shape(self, other)?;
        check_same_shape(self, dest)?;
        for j in 0..self.rows() {
            for k in 0..self.columns() {
                dest.set(j, k, self.get(j, k)? - other.get(j, k)?)?;
            }
        }
        Ok(())
    }

    /// Standard matrix product; the result has shape
    /// `(self.rows, other.columns)` with
    /// `result[j][k] = Σ_l self[j][l] * other[l][k]`, accumulated left to
    /// right over `l`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] unless
    /// `self.columns == other.rows`, or [`MatrizError::EmptySlot`] if any
    /// source cell is empty.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.columns() != other.rows() {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{} rows", self.columns()),
                actual: format!("{} rows", other.rows()),
            });
        }
        let mut result = Matrix::new(self.rows(), other.columns())?;
        for j in 0..self.rows() {
            for k in 0..other.columns() {
                let mut sum = 0.0;
                for l in 0..other.rows() {
                    sum += self.get(j, l)? * other.get(l, k)?;
                }
                result.set(j, k, sum)?;
            }
        }
        Ok(result)
    }

    /// Matrix times column vector; the result has length `self.rows` with
    /// `result[j] = Σ_k self[j][k] * v[k]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] unless
    /// `self.columns == v.len()`, or [`MatrizError::EmptySlot`] if any
    /// source slot is empty.
    pub fn matvec(&self, v: &Vector) -> Result<Vector> {
        if self.columns() != v.len() {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("length {}", self.columns()),
                actual: format!("length {}", v.len()),
            });
        }
        let mut result = Vector::new(self.rows())?;
        for j in 0..self.rows() {
            let mut sum = 0.0;
            for k in 0..self.columns() {
                sum += self.get(j, k)? * v.get(k)?;
            }
            result.set(j, sum)?;
        }
        Ok(result)
    }

    /// Scalar multiple: `result[j][k] = scalar * self[j][k]`. Returns a new
    /// matrix; see [`Matrix::mul_scalar_into`] for the in-place variant.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::EmptySlot`] if any source cell is empty.
    pub fn mul_scalar(&self, scalar: f64) -> Result<Matrix> {
        let mut result = Matrix::new(self.rows(), self.columns())?;
        for j in 0..self.rows() {
            for k in 0..self.columns() {
                result.set(j, k, scalar * self.get(j, k)?)?;
            }
        }
        Ok(result)
    }

    /// Scalar multiple written into `dest`; returns a status, not a matrix.
    ///
    /// On a mid-loop failure `dest` is left partially updated.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] unless `dest` has the same
    /// shape as `self`, or [`MatrizError::EmptySlot`] for an empty source
    /// cell.
    pub fn mul_scalar_into(&self, scalar: f64, dest: &mut Matrix) -> Result<()> {
        check_same_shape(self, dest)?;
        for j in 0..self.rows() {
            for k in 0..self.columns() {
                dest.set(j, k, scalar * self.get(j, k)?)?;
            }
        }
        Ok(())
    }

    /// Transpose: a new `(columns, rows)` matrix with
    /// `result[k][j] = self[j][k]`.
    ///
    /// Slot state carries over: an empty cell stays empty in the transposed
    /// position, so a partially filled matrix transposes without error.
    #[must_use]
    pub fn transpose(&self) -> Matrix {
        let mut rows = Vec::with_capacity(self.columns());
        for k in 0..self.columns() {
            let items = (0..self.rows())
                .map(|j| {
                    self.items[j].items[k].map(|element| Element::new(j, element.value()))
                })
                .collect();
            rows.push(Vector { items });
        }
        Matrix::from_rows(rows)
    }
}

#[cfg(test)]
#[path = "matrix_ops_tests.rs"]
mod tests;
