//! Oracle backed by the `varisat` CDCL solver.
use ::varisat::{ExtendFormula, Lit, Solver};

use crate::error::{Error, Result};
use crate::literal::{Atom, Literal};
use crate::model::Model;
use crate::oracle::{Interrupter, Oracle};

pub struct VarisatOracle {
    solver: Solver<'static>,
    num_vars: Atom,
    model: Option<Model>,
    interrupter: Interrupter,
}

impl VarisatOracle {
    #[must_use]
    pub fn new(num_vars: Atom, interrupter: Interrupter) -> Self {
        VarisatOracle {
            solver: Solver::new(),
            num_vars,
            model: None,
            interrupter,
        }
    }
}

impl Oracle for VarisatOracle {
    fn add_clause(&mut self, clause: &[Literal]) {
        let lits: Vec<Lit> = clause
            .iter()
            .map(|literal| Lit::from_dimacs(literal.to_dimacs() as isize))
            .collect();

        self.num_vars = clause
            .iter()
            .map(|literal| literal.atom())
            .fold(self.num_vars, Atom::max);
        self.model = None;
        self.solver.add_clause(&lits);
    }

    fn solve(&mut self) -> Result<bool> {
        self.model = None;

        // The backend cannot be stopped mid-search, the request is honored
        // before every call instead.
        if self.interrupter.is_interrupted() {
            return Err(Error::Interrupted);
        }

        let satisfiable = self
            .solver
            .solve()
            .map_err(|err| Error::Oracle(err.to_string()))?;

        if satisfiable {
            let lits = self.solver.model().ok_or(Error::MissingModel)?;
            let mut values = vec![false; self.num_vars as usize + 1];
            for lit in lits {
                let atom = lit.var().to_dimacs();
                if let Some(value) = usize::try_from(atom).ok().and_then(|i| values.get_mut(i)) {
                    *value = lit.is_positive();
                }
            }

            self.model = Some(Model::new(
                (1..=self.num_vars)
                    .map(|atom| Literal::new(atom, values[atom as usize].into()))
                    .collect(),
            ));
        }

        Ok(satisfiable)
    }

    fn model(&self) -> Option<Model> {
        self.model.clone()
    }
}
