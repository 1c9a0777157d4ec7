/// Atoms, polarities, literals, and clauses.
pub mod literal;

pub use crate::literal::literal::*;
