//! Matriz: dense linear-algebra primitives in pure Rust.
//!
//! Matriz provides fixed-capacity vectors and row-major matrices whose slots
//! are either empty or hold a boxed element, together with an algebraic
//! operation layer: addition, subtraction, dot and Hadamard products, scalar
//! operations, matrix multiplication, transpose, and vector ↔ matrix
//! casting. Every accessor is bounds-checked and every failure is a typed
//! error, never a panic.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Vector::from_slice(&[4.0, 3.0])?;
//! let b = Vector::from_slice(&[1.0, 2.0])?;
//!
//! assert_eq!(a.add(&b)?.get(0)?, 5.0);
//! assert_eq!(a.dot(&b)?, 10.0);
//!
//! let m = Matrix::from_array(&[1.0, 1.0, 2.0, 2.0], 2, 2)?;
//! let n = Matrix::from_array(&[1.0, 1.0, 1.0, 2.0, 2.0, 2.0], 2, 3)?;
//! let product = m.matmul(&n)?;
//! assert_eq!(product.get(1, 0)?, 6.0);
//! # Ok::<(), MatrizError>(())
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: core `Element`, `Vector` and `Matrix` storage types
//! - [`algebra`]: vector/matrix operations and shape casts
//! - [`format`]: `Display` rendering for vectors and matrices
//! - [`serialization`]: vector ↔ JSON string-array round-trip
//! - [`error`]: error taxonomy and the crate `Result` alias
//! - [`prelude`]: one-line import of the common names
//!
//! # Concurrency
//!
//! All operations are synchronous in-memory transforms. The library does no
//! internal locking; each vector or matrix instance assumes a single logical
//! owner, and callers serialize any cross-thread mutation themselves.

pub mod algebra;
pub mod error;
pub mod format;
pub mod prelude;
pub mod primitives;
pub mod serialization;

pub use error::{MatrizError, Result};
pub use primitives::{Element, Matrix, Vector};
