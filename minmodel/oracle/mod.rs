//! Boundary to the satisfiability oracles driven by the minimal model search.
mod dpll;
#[cfg(test)]
pub(crate) mod scripted;
mod varisat;

pub use crate::oracle::dpll::DpllOracle;
pub use crate::oracle::varisat::VarisatOracle;

use crate::error::{Error, Result};
use crate::literal::{Atom, Clause, Literal};
use crate::model::Model;

use clap::ValueEnum;
use derive_more::derive::Display;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Incremental SAT solver used as a black box.
///
/// An oracle is released by dropping it.
pub trait Oracle {
    /// Add a clause to the oracle's formula.
    fn add_clause(&mut self, clause: &[Literal]);

    /// Add every clause of `clauses`.
    fn append_formula(&mut self, clauses: &[Clause]) {
        for clause in clauses {
            self.add_clause(clause);
        }
    }

    /// Decide satisfiability of all clauses added so far.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interrupted`] when an interrupt was requested and
    /// [`Error::Oracle`] when the backend fails.
    fn solve(&mut self) -> Result<bool>;

    /// Model found by the last successful [`Oracle::solve`]. It assigns every
    /// atom up to the number of atoms the oracle was built for; atoms the
    /// oracle never saw are false.
    fn model(&self) -> Option<Model>;
}

/// Available oracle backends.
///
/// `varisat` is the default. The built-in DPLL search polls the
/// [`Interrupter`] on every decision, so it can be stopped mid-search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
pub enum OracleKind {
    /// Built-in DPLL search.
    #[display("dpll")]
    Dpll,
    /// The `varisat` CDCL solver.
    #[default]
    #[display("varisat")]
    Varisat,
}

impl OracleKind {
    /// Create a fresh oracle over atoms `1..=nv` that observes `interrupter`.
    #[must_use]
    pub fn build(self, nv: Atom, interrupter: &Interrupter) -> Box<dyn Oracle> {
        match self {
            OracleKind::Dpll => Box::new(DpllOracle::new(nv, interrupter.clone())),
            OracleKind::Varisat => Box::new(VarisatOracle::new(nv, interrupter.clone())),
        }
    }
}

impl FromStr for OracleKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dpll" => Ok(OracleKind::Dpll),
            "varisat" => Ok(OracleKind::Varisat),
            _ => Err(Error::UnknownOracle(name.to_owned())),
        }
    }
}

/// Shared request to stop whichever oracle is currently solving.
#[derive(Debug, Clone, Default)]
pub struct Interrupter(Arc<AtomicBool>);

impl Interrupter {
    #[must_use]
    pub fn new() -> Self {
        Interrupter::default()
    }

    pub fn interrupt(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_interrupted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Withdraw a pending interrupt request.
    pub fn clear(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{Interrupter, OracleKind};
    use crate::clause;
    use crate::error::Error;
    use crate::literal::Literal;
    use crate::model::Model;

    const KINDS: [OracleKind; 2] = [OracleKind::Dpll, OracleKind::Varisat];

    fn model(literals: &[i32]) -> Model {
        Model::new(
            literals
                .iter()
                .map(|&literal| Literal::try_from(literal).unwrap())
                .collect(),
        )
    }

    #[test]
    fn names() {
        assert_eq!("dpll".parse::<OracleKind>().unwrap(), OracleKind::Dpll);
        assert_eq!("Varisat".parse::<OracleKind>().unwrap(), OracleKind::Varisat);
        assert!(matches!(
            "minisat".parse::<OracleKind>(),
            Err(Error::UnknownOracle(name)) if name == "minisat"
        ));
        assert_eq!(OracleKind::Varisat.to_string(), "varisat");
    }

    #[test]
    fn satisfiable_formula() {
        for kind in KINDS {
            let mut oracle = kind.build(3, &Interrupter::new());
            oracle.append_formula(&[clause![1, 2], clause![-1], clause![-2, 3]]);

            assert!(oracle.solve().unwrap(), "{kind}");
            assert_eq!(oracle.model().unwrap(), model(&[-1, 2, 3]), "{kind}");
        }
    }

    #[test]
    fn incremental_clauses() {
        for kind in KINDS {
            let mut oracle = kind.build(2, &Interrupter::new());
            oracle.add_clause(&clause![1, 2]);
            assert!(oracle.solve().unwrap(), "{kind}");

            oracle.add_clause(&clause![-1]);
            assert!(oracle.solve().unwrap(), "{kind}");
            assert_eq!(oracle.model().unwrap(), model(&[-1, 2]), "{kind}");

            oracle.add_clause(&clause![-2]);
            assert!(!oracle.solve().unwrap(), "{kind}");
        }
    }

    #[test]
    fn model_covers_unmentioned_atoms() {
        for kind in KINDS {
            let mut oracle = kind.build(4, &Interrupter::new());
            oracle.add_clause(&clause![2]);

            assert!(oracle.solve().unwrap(), "{kind}");
            let m = oracle.model().unwrap();
            assert_eq!(m.len(), 4, "{kind}");
            assert!(m.is_true(2), "{kind}");
        }
    }

    #[test]
    fn empty_clause() {
        for kind in KINDS {
            let mut oracle = kind.build(1, &Interrupter::new());
            oracle.add_clause(&clause![]);
            assert!(!oracle.solve().unwrap(), "{kind}");
        }
    }

    #[test]
    fn interrupted_oracle() {
        let interrupter = Interrupter::new();
        for kind in KINDS {
            let mut oracle = kind.build(2, &interrupter);
            oracle.add_clause(&clause![1, 2]);

            interrupter.interrupt();
            assert!(matches!(oracle.solve(), Err(Error::Interrupted)), "{kind}");

            interrupter.clear();
            assert!(oracle.solve().unwrap(), "{kind}");
        }
    }
}
