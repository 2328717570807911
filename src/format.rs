//! Text rendering for vectors and matrices.
//!
//! Read-only collaborators over the primitives' accessors: a vector renders
//! as a bracketed, comma-separated list (`[4, 3.5, _]`, empty slots as `_`),
//! a matrix as one bracketed row per line inside braces.

use crate::primitives::{Matrix, Vector};
use std::fmt;

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.items.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(element) => write!(f, "{}", element.value())?,
                None => write!(f, "_")?,
            }
        }
        write!(f, "]")
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for row in &self.items {
            writeln!(f, " {row}")?;
        }
        write!(f, "}}")
    }
}
