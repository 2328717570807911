//! Algebraic operation layer over the storage primitives.
//!
//! Implemented as inherent methods on [`Vector`](crate::primitives::Vector)
//! and [`Matrix`](crate::primitives::Matrix), split by concern:
//!
//! - [`vector_ops`]: add/sub, dot, Hadamard, scalar operations
//! - [`matrix_ops`]: add/sub, matmul, matvec, scalar multiply, transpose
//! - [`casting`]: vector ↔ single-row/single-column matrix conversion

mod casting;
mod matrix_ops;
mod vector_ops;
