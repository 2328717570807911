//! Algebraic operations over vectors.
//!
//! Fresh-result operations build and return a new [`Vector`]; `_into`
//! variants write into a caller-supplied destination and return a status.
//! The two conventions are never mixed.
//!
//! Destination variants validate shapes up front but do not roll back on a
//! mid-loop failure: if a source slot turns out to be empty, the slots
//! already written stay written. That partial-mutation contract is inherited
//! from the operations' original definition and is documented per method.

use crate::error::{MatrizError, Result};
use crate::primitives::Vector;

fn check_same_len(a: &Vector, b: &Vector) -> Result<()> {
    if a.len() != b.len() {
        return Err(MatrizError::DimensionMismatch {
            expected: format!("length {}", a.len()),
            actual: format!("length {}", b.len()),
        });
    }
    Ok(())
}

impl Vector {
    /// Elementwise sum: `result[i] = self[i] + other[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] unless lengths match, or
    /// [`MatrizError::EmptySlot`] if any source slot is empty (the partial
    /// result is dropped).
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        check_same_len(self, other)?;
        let mut result = Vector::new(self.len())?;
        for i in 0..self.len() {
            result.set(i, self.get(i)? + other.get(i)?)?;
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
    /// `dest` all have the same length, or [`MatrizError::EmptySlot`] for an
    /// empty source slot.
    pub fn add_into(&self, other: &Vector, dest: &mut Vector) -> Result<()> {
        check_same_len(self, other)?;
        check_same_len(self, dest)?;
        for i in 0..self.len() {
            dest.set(i, self.get(i)? + other.get(i)?)?;
        }
        Ok(())
    }

    /// Elementwise difference: `result[i] = self[i] - other[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] unless lengths match, or
    /// [`MatrizError::EmptySlot`] if any source slot is empty.
    pub fn sub(&self, other: &Vector) -> Result<Vector> {
        check_same_len(self, other)?;
        let mut result = Vector::new(self.len())?;
        for i in 0..self.len() {
            result.set(i, self.get(i)? - other.get(i)?)?;
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
    /// `dest` all have the same length, or [`MatrizError::EmptySlot`] for an
    /// empty source slot.
    pub fn sub_into(&self, other: &Vector, dest: &mut Vector) -> Result<()> {
        check_same_len(self, other)?;
        check_same_len(self, dest)?;
        for i in 0..self.len() {
            dest.set(i, self.get(i)? - other.get(i)?)?;
        }
        Ok(())
    }

    /// Dot product: `Σ self[i] * other[i]`, accumulated left to right.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] unless lengths match, or
    /// [`MatrizError::EmptySlot`] if any source slot is empty.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        check_same_len(self, other)?;
        let mut result = 0.0;
        for i in 0..self.len() {
            result += self.get(i)? * other.get(i)?;
        }
        Ok(result)
    }

    /// Hadamard (elementwise) product: `result[i] = self[i] * other[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] unless lengths match, or
    /// [`MatrizError::EmptySlot`] if any source slot is empty.
    pub fn hadamard(&self, other: &Vector) -> Result<Vector> {
        check_same_len(self, other)?;
        let mut result = Vector::new(self.len())?;
        for i in 0..self.len() {
            result.set(i, self.get(i)? * other.get(i)?)?;
        }
        Ok(result)
    }

    /// Scalar multiple: `result[i] = scalar * self[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::EmptySlot`] if any source slot is empty.
    pub fn mul_scalar(&self, scalar: f64) -> Result<Vector> {
        let mut result = Vector::new(self.len())?;
        for i in 0..self.len() {
            result.set(i, scalar * self.get(i)?)?;
        }
        Ok(result)
    }

    /// Scalar multiple written into `dest`.
    ///
    /// On a mid-loop failure `dest` is left partially updated.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] unless `dest` has the same
    /// length as `self`, or [`MatrizError::EmptySlot`] for an empty source
    /// slot.
    pub fn mul_scalar_into(&self, scalar: f64, dest: &mut Vector) -> Result<()> {
        check_same_len(self, dest)?;
        for i in 0..self.len() {
            dest.set(i, scalar * self.get(i)?)?;
        }
        Ok(())
    }

    /// Scalar-minus-vector: `result[i] = scalar - self[i]`. Fresh result
    /// only; there is no destination variant.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::EmptySlot`] if any source slot is empty.
    pub fn sub_from_scalar(&self, scalar: f64) -> Result<Vector> {
        let mut result = Vector::new(self.len())?;
        for i in 0..self.len() {
            result.set(i, scalar - self.get(i)?)?;
        }
        Ok(result)
    }
}

#[cfg(test)]
#[path = "vector_ops_tests.rs"]
mod tests;
