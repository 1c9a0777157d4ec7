//! # Minimal models of propositional formulas in CNF.
//!
//! A model of a formula is *minimal* if no model of the formula sets a proper
//! subset of its atoms to true. This crate computes one minimal model of a
//! formula by driving an incremental SAT oracle.
//!
//! Two strategies are available:
//! * **MM** asks the oracle for a model and then repeatedly for a model with
//!   strictly fewer true atoms. The last model before the oracle runs out of
//!   models is minimal.
//! * **MR** checks every model the oracle returns. The check condenses the
//!   dependency graph of the *mr*-reduced formula into strongly connected
//!   components and justifies the true atoms component by component. Only
//!   models that fail the check are shrunk.
//!
//! Both strategies can carry the *mr*-reduced clause set from one iteration to
//! the next instead of searching over the original formula.
//!
//! ```rust
//! use minmodel::clause;
//! use minmodel::oracle::OracleKind;
//! use minmodel::solver::{Algorithm, Outcome, Solver, SolverOptions};
//!
//! let options = SolverOptions::builder()
//!     .algorithm(Algorithm::Mr)
//!     .oracle(OracleKind::Varisat)
//!     .build();
//! let mut solver = Solver::new(options);
//!
//! // (1 ∨ 2) ∧ (1 → 3)
//! solver.add_clause(clause![1, 2]);
//! solver.add_clause(clause![-1, 3]);
//!
//! match solver.compute_minimal_model().unwrap() {
//!     Outcome::Minimal(model) => println!("minimal model: {model}"),
//!     Outcome::Unsat => println!("unsatisfiable"),
//! }
//! println!("{}", solver.statistics());
//! ```
//!
//! ---
//!
//! Main entry points are:
//!
//! * [`crate::solver::Solver::compute_minimal_model`] -- compute a minimal model with the configured strategy
//! * [`crate::solver::MrSolver::check`] -- decide whether a model is minimal
//! * [`crate::formula::Formula::from_dimacs`] -- read a formula in DIMACS CNF format
//!
//! The building blocks of the check are exposed as well:
//!
//! * [`crate::graph::Graph`] -- directed graph with in-degree bookkeeping
//! * [`crate::graph::StronglyConnectedGraph`] -- condensation of a graph into its components
//! * [`crate::reduction`] -- *mr*-reduction, dependency graph construction, and clause reduction

pub mod error;
pub mod formula;
pub mod graph;
/// Atoms, polarities, literals, and clauses.
pub mod literal;
pub mod model;
pub mod oracle;
pub mod reduction;
pub mod solver;
#[macro_use]
pub(crate) mod util;

#[cfg(test)]
mod solver_test;
