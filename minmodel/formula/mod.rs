//! Append-only clause sets.
pub mod dimacs;

use crate::literal::{Atom, Clause};

use std::fmt::Display;

/// Conjunction of clauses over atoms `1..=nv`.
///
/// Clauses can only be appended; `nv` grows to the largest atom ever
/// mentioned (or declared via [`Formula::with_atoms`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formula {
    clauses: Vec<Clause>,
    nv: Atom,
}

impl Formula {
    #[must_use]
    pub fn new() -> Formula {
        Formula::default()
    }

    /// Empty formula that already declares atoms `1..=nv`.
    #[must_use]
    pub fn with_atoms(nv: Atom) -> Formula {
        Formula {
            clauses: Vec::new(),
            nv,
        }
    }

    /// Formula made of the given clauses.
    #[must_use]
    pub fn from_clauses<I>(clauses: I) -> Formula
    where
        I: IntoIterator<Item = Clause>,
    {
        let mut formula = Formula::new();
        for clause in clauses {
            formula.add_clause(clause);
        }
        formula
    }

    pub fn add_clause<C>(&mut self, clause: C)
    where
        C: Into<Clause>,
    {
        let clause = clause.into();
        if let Some(max) = clause.iter().map(|literal| literal.atom()).max() {
            self.nv = self.nv.max(max);
        }
        self.clauses.push(clause);
    }

    /// Append all clauses of `other`.
    pub fn append(&mut self, other: &Formula) {
        self.nv = self.nv.max(other.nv);
        self.clauses.extend(other.clauses.iter().cloned());
    }

    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Number of atoms of the formula.
    #[must_use]
    pub fn nv(&self) -> Atom {
        self.nv
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "p cnf {} {}", self.nv, self.clauses.len())?;
        for clause in &self.clauses {
            for literal in clause {
                write!(f, "{literal} ")?;
            }
            writeln!(f, "0")?;
        }
        Ok(())
    }
}
