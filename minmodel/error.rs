//! Errors raised while computing minimal models.
use thiserror::Error;

use crate::graph::NodeIdx;

#[derive(Debug, Error)]
pub enum Error {
    /// The façade was asked for an algorithm it does not know.
    #[error("no solver named [{0}]")]
    UnknownSolver(String),

    /// No oracle backend is registered under this name.
    #[error("no oracle named [{0}]")]
    UnknownOracle(String),

    /// `compute_minimal_model` was called twice on the same solver.
    #[error("minimal model can be computed only once per solver")]
    AlreadyComputed,

    /// Node was removed from or never added to a graph.
    #[error("node {0} is not present in the graph")]
    MissingNode(NodeIdx),

    /// Component was removed from or never part of the condensation.
    #[error("component {0} is not present in the condensation")]
    MissingComponent(NodeIdx),

    /// Integer that is zero or whose atom is out of range.
    #[error("literal {0} is zero or its atom is out of range")]
    InvalidLiteral(i32),

    /// Failure reported by an oracle backend.
    #[error("oracle failed: {0}")]
    Oracle(String),

    /// Oracle observed an interrupt request.
    #[error("oracle was interrupted")]
    Interrupted,

    /// Oracle claimed satisfiability without producing a model.
    #[error("oracle reported a satisfiable formula but did not produce a model")]
    MissingModel,
}

pub type Result<T> = std::result::Result<T, Error>;
