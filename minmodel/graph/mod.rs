//! Directed graphs with live in-degree tracking and their condensation
//! into strongly connected components.
#[allow(clippy::module_inception)]
mod graph;
mod scc;

pub use crate::graph::graph::*;
pub use crate::graph::scc::*;
