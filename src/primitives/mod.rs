//! Core storage primitives (Element, Vector, Matrix).
//!
//! These types hold the data the algebra layer operates on: boxed,
//! present-or-empty slots with bounds-checked accessors.

mod element;
mod matrix;
mod vector;

pub use element::Element;
pub use matrix::Matrix;
pub use vector::Vector;
