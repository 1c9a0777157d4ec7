//! Truth assignments produced by oracles.
use crate::literal::{Atom, Clause, Literal};

use std::collections::BTreeSet;
use std::fmt::Display;

/// Complete assignment: one literal per atom `1..=nv`, a positive literal
/// marking a true atom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Model {
    literals: Vec<Literal>,
}

impl Model {
    #[must_use]
    pub fn new(literals: Vec<Literal>) -> Self {
        Model { literals }
    }

    /// Model of `nv` atoms where exactly the atoms in `true_atoms` hold.
    #[must_use]
    pub fn from_true_atoms(nv: Atom, true_atoms: &BTreeSet<Atom>) -> Self {
        Model {
            literals: (1..=nv)
                .map(|atom| {
                    if true_atoms.contains(&atom) {
                        Literal::positive(atom)
                    } else {
                        Literal::negative(atom)
                    }
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn positive_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.literals
            .iter()
            .filter(|literal| literal.is_positive())
            .map(|literal| literal.atom())
    }

    pub fn negative_literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.literals
            .iter()
            .copied()
            .filter(|literal| literal.is_negative())
    }

    #[must_use]
    pub fn true_atoms(&self) -> BTreeSet<Atom> {
        self.positive_atoms().collect()
    }

    #[must_use]
    pub fn has_true_atoms(&self) -> bool {
        self.literals.iter().any(|literal| literal.is_positive())
    }

    #[must_use]
    pub fn is_true(&self, atom: Atom) -> bool {
        self.literals.contains(&Literal::positive(atom))
    }

    /// Check that every clause has a literal true under this model.
    #[must_use]
    pub fn satisfies(&self, clauses: &[Clause]) -> bool {
        let true_atoms = self.true_atoms();
        clauses.iter().all(|clause| {
            clause
                .iter()
                .any(|literal| true_atoms.contains(&literal.atom()) == literal.is_positive())
        })
    }

    /// Clause ruling out every model that keeps all true atoms of this one.
    #[must_use]
    pub fn blocking_clause(&self) -> Clause {
        self.positive_atoms().map(Literal::negative).collect()
    }

    /// Make every atom of `atoms` false.
    pub fn falsify(&mut self, atoms: &BTreeSet<Atom>) {
        for literal in &mut self.literals {
            if literal.is_positive() && atoms.contains(&literal.atom()) {
                *literal = !*literal;
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

impl From<Model> for Vec<Literal> {
    fn from(model: Model) -> Self {
        model.literals
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn lit_repr(literal: &Literal) -> String {
            format!(
                "{}{literal}",
                if literal.is_negative() { "" } else { " " }
            )
        }

        write!(
            f,
            "{{{}}}",
            self.literals
                .iter()
                .map(lit_repr)
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
