//! String (de)serialization for vectors.
//!
//! The wire form is a JSON array of quoted decimal strings:
//! `["0.0000000000045","320.2519111111193"]`. Values are rendered with
//! Rust's shortest round-trip formatting, so
//! `unserialize(serialize(v))` is value-equal to `v` for every finite
//! vector; the exact spelling of the incoming strings is not preserved.

use crate::error::{MatrizError, Result};
use crate::primitives::Vector;

impl Vector {
    /// Renders the vector as a JSON array of quoted decimal strings.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::EmptySlot`] if any slot is empty, or
    /// [`MatrizError::Serialization`] if JSON rendering fails.
    pub fn serialize(&self) -> Result<String> {
        let mut parts = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            parts.push(self.get(i)?.to_string());
        }
        serde_json::to_string(&parts).map_err(|e| MatrizError::Serialization(e.to_string()))
    }

    /// Parses the textual form produced by [`Vector::serialize`] back into a
    /// newly constructed vector.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::Serialization`] for malformed JSON or a
    /// non-numeric entry, or [`MatrizError::InvalidCapacity`] for an empty
    /// array.
    pub fn unserialize(input: &str) -> Result<Vector> {
        let parts: Vec<String> =
            serde_json::from_str(input).map_err(|e| MatrizError::Serialization(e.to_string()))?;
        let mut result = Vector::new(parts.len())?;
        for (i, raw) in parts.iter().enumerate() {
            let value: f64 = raw.trim().parse().map_err(|_| {
                MatrizError::Serialization(format!("invalid number at index {i}: {raw:?}"))
            })?;
            result.set(i, value)?;
        }
        Ok(result)
    }
}
