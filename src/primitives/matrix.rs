//! Row-major matrix built from independently owned row vectors.

use super::Vector;
use crate::error::{MatrizError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A `rows x columns` table stored as `rows` independently owned [`Vector`]s
/// (row-major).
///
/// Every row vector has exactly `columns` capacity; the row count is
/// immutable after creation. Rows are owned by the matrix, never shared.
///
/// # Examples
///
/// ```
/// use matriz::prelude::*;
///
/// let m = Matrix::from_array(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3)?;
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2)?, 6.0);
/// # Ok::<(), MatrizError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) items: Vec<Vector>,
}

impl Matrix {
    /// Creates a matrix with all cells empty.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidShape`] if either dimension is zero.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(MatrizError::InvalidShape { rows, columns });
        }
        let mut items = Vec::with_capacity(rows);
        for _ in 0..rows {
            items.push(Vector::new(columns)?);
        }
        Ok(Self {
            rows,
            columns,
            items,
        })
    }

    /// Creates a matrix with every cell drawn independently from a uniform
    /// distribution over `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidShape`] if either dimension is zero.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` (the range is invalid).
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        min: f64,
        max: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let mut object = Self::new(rows, columns)?;
        object.fill_random(min, max, rng);
        Ok(object)
    }

    /// Creates a matrix filled row-major from a flat slice:
    /// `flat[r * columns + c]` lands in cell `(r, c)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidShape`] if either dimension is zero, or
    /// [`MatrizError::DimensionMismatch`] if `flat.len() != rows * columns`.
    pub fn from_array(flat: &[f64], rows: usize, columns: usize) -> Result<Self> {
        let mut object = Self::new(rows, columns)?;
        object.fill_from_array(flat)?;
        Ok(object)
    }

    /// Creates an `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidShape`] if `n` is zero.
    pub fn eye(n: usize) -> Result<Self> {
        let mut object = Self::new(n, n)?;
        object.fill(0.0);
        for i in 0..n {
            object.set(i, i, 1.0)?;
        }
        Ok(object)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the shape as `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Returns the row vector at `row`, if the index is valid.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&Vector> {
        self.items.get(row)
    }

    /// Pure predicate: `true` iff `(row, column)` is a valid position.
    #[must_use]
    pub fn check_boundaries(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    /// Stores `value` at `(row, column)` and returns the stored value.
    ///
    /// Delegates to the row vector's `set` after boundary validation.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::PositionOutOfBounds`] for an invalid position.
    pub fn set(&mut self, row: usize, column: usize, value: f64) -> Result<f64> {
        if !self.check_boundaries(row, column) {
            return Err(self.out_of_bounds(row, column));
        }
        self.items[row].set(column, value)
    }

    /// Returns the value stored at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::PositionOutOfBounds`] for an invalid position,
    /// or [`MatrizError::EmptySlot`] if the cell was never set.
    pub fn get(&self, row: usize, column: usize) -> Result<f64> {
        if !self.check_boundaries(row, column) {
            return Err(self.out_of_bounds(row, column));
        }
        self.items[row].get(column)
    }

    /// Sets every cell to `value`.
    pub fn fill(&mut self, value: f64) {
        for row in &mut self.items {
            row.fill(value);
        }
    }

    /// Sets every cell to a value drawn independently from a uniform
    /// distribution over `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` (the range is invalid).
    pub fn fill_random<R: Rng + ?Sized>(&mut self, min: f64, max: f64, rng: &mut R) {
        for row in &mut self.items {
            row.fill_random(min, max, rng);
        }
    }

    /// Fills the matrix row-major from a flat slice.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if
    /// `flat.len() != rows * columns`.
    pub fn fill_from_array(&mut self, flat: &[f64]) -> Result<()> {
        if flat.len() != self.rows * self.columns {
            return Err(MatrizError::DimensionMismatch {
                expected: format!(
                    "{} values ({}x{})",
                    self.rows * self.columns,
                    self.rows,
                    self.columns
                ),
                actual: format!("{} values", flat.len()),
            });
        }
        for j in 0..self.rows {
            for k in 0..self.columns {
                self.set(j, k, flat[j * self.columns + k])?;
            }
        }
        Ok(())
    }

    /// Overwrites this matrix's cells from `src`.
    ///
    /// Empty source cells are skipped, leaving the destination cell as it
    /// was.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] unless `src` and `self`
    /// have identical shape.
    pub fn copy_from(&mut self, src: &Matrix) -> Result<()> {
        if self.rows != src.rows || self.columns != src.columns {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("{}x{}", src.rows, src.columns),
                actual: format!("{}x{}", self.rows, self.columns),
            });
        }
        for j in 0..src.rows {
            for k in 0..src.columns {
                if let Ok(value) = src.get(j, k) {
                    self.set(j, k, value)?;
                }
            }
        }
        Ok(())
    }

    pub(crate) fn out_of_bounds(&self, row: usize, column: usize) -> MatrizError {
        MatrizError::PositionOutOfBounds {
            row,
            column,
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// Builds a matrix from prepared row vectors. Callers guarantee the rows
    /// are non-empty and of uniform capacity.
    pub(crate) fn from_rows(rows: Vec<Vector>) -> Self {
        let columns = rows.first().map_or(0, Vector::len);
        Self {
            rows: rows.len(),
            columns,
            items: rows,
        }
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
