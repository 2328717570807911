//! Fixed-capacity vector of optional boxed elements.

use super::Element;
use crate::error::{MatrizError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A fixed-capacity 1-D container of optional [`Element`]s.
///
/// Every slot is either empty or holds exactly one element; a slot that was
/// never written reads as [`MatrizError::EmptySlot`], not as zero. Capacity
/// is fixed at construction and always greater than zero.
///
/// The vector owns its elements outright; dropping the vector releases
/// everything.
///
/// # Examples
///
/// ```
/// use matriz::prelude::*;
///
/// let mut v = Vector::new(3)?;
/// v.set(0, 4.0)?;
/// assert_eq!(v.get(0)?, 4.0);
/// assert!(v.get(1).is_err()); // slot 1 was never set
/// # Ok::<(), MatrizError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub(crate) items: Vec<Option<Element>>,
}

impl Vector {
    /// Creates a vector with `capacity` empty slots.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(MatrizError::InvalidCapacity { capacity });
        }
        Ok(Self {
            items: vec![None; capacity],
        })
    }

    /// Creates a vector with every slot holding `value`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_value(capacity: usize, value: f64) -> Result<Self> {
        let mut object = Self::new(capacity)?;
        object.fill(value);
        Ok(object)
    }

    /// Creates a vector with every slot holding `0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidCapacity`] if `capacity` is zero.
    pub fn zeros(capacity: usize) -> Result<Self> {
        Self::with_value(capacity, 0.0)
    }

    /// Creates a vector with each slot drawn independently from a uniform
    /// distribution over `[min, max]`.
    ///
    /// The generator is supplied by the caller, so tests can pass a seeded
    /// [`rand::rngs::StdRng`] for deterministic output.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidCapacity`] if `capacity` is zero.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` (the range is invalid).
    pub fn random<R: Rng + ?Sized>(
        capacity: usize,
        min: f64,
        max: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let mut object = Self::new(capacity)?;
        object.fill_random(min, max, rng);
        Ok(object)
    }

    /// Creates a fully populated vector from a slice.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidCapacity`] if `values` is empty.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let mut object = Self::new(values.len())?;
        for (i, &value) in values.iter().enumerate() {
            object.items[i] = Some(Element::new(i, value));
        }
        Ok(object)
    }

    /// Returns the fixed capacity (slot count).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Returns the length; identical to [`Vector::capacity`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: a vector cannot be constructed with zero capacity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if the slot at `index` exists and was never set.
    #[must_use]
    pub fn is_empty_slot(&self, index: usize) -> bool {
        matches!(self.items.get(index), Some(None))
    }

    /// Stores `value` at `index`, replacing any previous element, and
    /// returns the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfBounds`] if `index` is outside
    /// `[0, capacity)`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<f64> {
        if index >= self.items.len() {
            return Err(MatrizError::IndexOutOfBounds {
                index,
                capacity: self.items.len(),
            });
        }
        self.items[index] = Some(Element::new(index, value));
        Ok(value)
    }

    /// Returns the value stored at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfBounds`] if `index` is outside
    /// `[0, capacity)`, or [`MatrizError::EmptySlot`] if the slot was never
    /// set.
    pub fn get(&self, index: usize) -> Result<f64> {
        match self.items.get(index) {
            None => Err(MatrizError::IndexOutOfBounds {
                index,
                capacity: self.items.len(),
            }),
            Some(None) => Err(MatrizError::EmptySlot { index }),
            Some(Some(element)) => Ok(element.value()),
        }
    }

    /// Sets every slot to `value`.
    pub fn fill(&mut self, value: f64) {
        for (i, slot) in self.items.iter_mut().enumerate() {
            *slot = Some(Element::new(i, value));
        }
    }

    /// Sets every slot to a value drawn independently from a uniform
    /// distribution over `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` (the range is invalid).
    pub fn fill_random<R: Rng + ?Sized>(&mut self, min: f64, max: f64, rng: &mut R) {
        for (i, slot) in self.items.iter_mut().enumerate() {
            *slot = Some(Element::new(i, rng.gen_range(min..=max)));
        }
    }

    /// Produces a new vector containing `self`'s elements followed by
    /// `other`'s, in order.
    ///
    /// No partial result ever escapes: on failure the partially built vector
    /// is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::EmptySlot`] if any source slot is empty.
    pub fn concatenate(&self, other: &Vector) -> Result<Vector> {
        let mut result = Vector::new(self.len() + other.len())?;
        for i in 0..self.len() {
            let value = self.get(i)?;
            result.set(i, value)?;
        }
        let start = self.len();
        for j in 0..other.len() {
            let value = other.get(j)?;
            result.set(start + j, value)?;
        }
        Ok(result)
    }

    /// Overwrites this vector's leading slots from `src`, slot by slot.
    ///
    /// `self` may be larger than `src`; slots past `src`'s length are left
    /// untouched. Slot state is copied, so an empty source slot empties the
    /// corresponding destination slot.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if this vector's capacity
    /// is smaller than `src`'s.
    pub fn copy_from(&mut self, src: &Vector) -> Result<()> {
        if self.len() < src.len() {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("capacity >= {}", src.len()),
                actual: format!("capacity {}", self.len()),
            });
        }
        for i in 0..src.len() {
            self.items[i] = src.items[i].map(|element| Element::new(i, element.value()));
        }
        Ok(())
    }

    /// Applies `f` to every present value in place, slot by slot in index
    /// order.
    ///
    /// Stops at the first empty slot, leaving earlier slots already
    /// transformed; that partial mutation is part of the contract.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::EmptySlot`] at the first empty slot.
    pub fn walk<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(f64) -> f64,
    {
        for i in 0..self.len() {
            let value = self.get(i)?;
            self.set(i, f(value))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
