//! Minimal model solvers and the façade selecting between them.
mod mm;
mod mr;
pub mod options;
mod statistics;

pub use crate::solver::mm::MmSolver;
pub use crate::solver::mr::MrSolver;
pub use crate::solver::options::{Algorithm, SolverOptions};
pub use crate::solver::statistics::Statistics;

use std::time::{Duration, Instant};

use tracing::instrument;

use crate::error::{Error, Result};
use crate::formula::Formula;
use crate::literal::Literal;
use crate::model::Model;
use crate::oracle::{Interrupter, Oracle};

/// Result of a minimal model computation.
///
/// A satisfiable formula always yields [`Outcome::Minimal`], also when the
/// model has no true atoms or the formula has no atoms at all (`nv == 0`).
/// Only an oracle that finds no model gives [`Outcome::Unsat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Minimal(Model),
    Unsat,
}

impl Outcome {
    #[must_use]
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, Outcome::Minimal(_))
    }

    #[must_use]
    pub fn model(&self) -> Option<&Model> {
        match self {
            Outcome::Minimal(model) => Some(model),
            Outcome::Unsat => None,
        }
    }

    #[must_use]
    pub fn into_model(self) -> Option<Model> {
        match self {
            Outcome::Minimal(model) => Some(model),
            Outcome::Unsat => None,
        }
    }
}

#[derive(Debug)]
enum Engine {
    Mm(MmSolver),
    Mr(MrSolver),
}

/// Computes a minimal model of the clauses added to it.
///
/// ```rust
/// use minmodel::clause;
/// use minmodel::solver::{Algorithm, Solver, SolverOptions};
///
/// let options = SolverOptions::builder().algorithm(Algorithm::Mr).build();
/// let mut solver = Solver::new(options);
/// solver.add_clause(clause![1, 2]);
/// solver.add_clause(clause![-1, 3]);
///
/// let outcome = solver.compute_minimal_model().unwrap();
/// assert!(outcome.is_satisfiable());
/// println!("{}", solver.statistics());
/// ```
#[derive(Debug)]
pub struct Solver {
    options: SolverOptions,
    formula: Formula,
    engine: Engine,
    interrupter: Interrupter,
    computed: bool,
    cpu_time: Duration,
}

impl Solver {
    #[must_use]
    pub fn new(options: SolverOptions) -> Self {
        let interrupter = Interrupter::new();
        let engine = match options.algorithm {
            Algorithm::Mm => Engine::Mm(MmSolver::new(&options, interrupter.clone())),
            Algorithm::Mr => Engine::Mr(MrSolver::new(&options, interrupter.clone())),
        };

        Solver {
            options,
            formula: Formula::new(),
            engine,
            interrupter,
            computed: false,
            cpu_time: Duration::ZERO,
        }
    }

    /// Select the algorithm by its short name, `MM` or `MR`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSolver`] for any other name.
    pub fn with_name(name: &str, mr: bool) -> Result<Self> {
        let options = SolverOptions::builder()
            .algorithm(name.parse()?)
            .mr(mr)
            .build();
        Ok(Solver::new(options))
    }

    pub fn add_clause<C>(&mut self, clause: C)
    where
        C: Into<Vec<Literal>>,
    {
        self.formula.add_clause(clause);
    }

    pub fn append_formula(&mut self, formula: &Formula) {
        self.formula.append(formula);
    }

    /// Compute a minimal model of the stored formula. Can be called only once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyComputed`] on a repeated call, propagates oracle
    /// failures and [`Error::Interrupted`].
    #[instrument(skip_all, fields(algorithm = %self.options.algorithm))]
    pub fn compute_minimal_model(&mut self) -> Result<Outcome> {
        if self.computed {
            return Err(Error::AlreadyComputed);
        }
        self.computed = true;

        let start = Instant::now();
        let outcome = match &mut self.engine {
            Engine::Mm(solver) => solver.compute(&self.formula),
            Engine::Mr(solver) => solver.compute(&self.formula),
        };
        self.cpu_time = start.elapsed();

        outcome
    }

    #[must_use]
    pub fn compute_model_count(&self) -> usize {
        match &self.engine {
            Engine::Mm(solver) => solver.compute_model_count(),
            Engine::Mr(solver) => solver.compute_model_count(),
        }
    }

    /// Number of minimality checks. `None` unless the algorithm is MR.
    #[must_use]
    pub fn check_model_count(&self) -> Option<usize> {
        match &self.engine {
            Engine::Mm(_) => None,
            Engine::Mr(solver) => Some(solver.check_model_count()),
        }
    }

    /// Time spent by the last [`Solver::compute_minimal_model`].
    #[must_use]
    pub fn cpu_time(&self) -> Duration {
        self.cpu_time
    }

    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics {
            algorithm: self.options.algorithm,
            mr: self.options.mr,
            oracle: self.options.oracle,
            compute_model_count: self.compute_model_count(),
            check_model_count: self.check_model_count(),
            cpu_time: self.cpu_time,
        }
    }

    #[must_use]
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    #[must_use]
    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Handle reaching the oracle that is currently solving. Clone it to
    /// interrupt the computation from another thread.
    #[must_use]
    pub fn interrupter(&self) -> &Interrupter {
        &self.interrupter
    }

    pub fn interrupt(&self) {
        self.interrupter.interrupt();
    }
}

/// Restrict `oracle` to models whose true atoms form a proper subset of the
/// true atoms of `model`.
pub(crate) fn shrink(oracle: &mut dyn Oracle, model: &Model) {
    for literal in model.negative_literals() {
        oracle.add_clause(&[literal]);
    }
    oracle.add_clause(&model.blocking_clause());
}
