//! Single boxed value with its slot position.

use serde::{Deserialize, Serialize};

/// One numeric value together with the index of the slot it occupies.
///
/// An `Element` is exclusively owned by its containing slot; an empty slot
/// holds no `Element` at all, which keeps "never set" distinct from "set to
/// zero".
///
/// Invariant: `key` matches the slot position as of the most recent write.
/// [`Vector`](super::Vector) maintains this on every `set`, `fill` and
/// `walk`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Element {
    key: usize,
    value: f64,
}

impl Element {
    /// Creates an element holding `value` at slot position `key`.
    #[must_use]
    pub fn new(key: usize, value: f64) -> Self {
        Self { key, value }
    }

    /// Returns the slot position recorded at the most recent write.
    #[must_use]
    pub fn key(&self) -> usize {
        self.key
    }

    /// Returns the stored value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }
}
