//! MM: shrink the model until the oracle runs out of models.
use tracing::{debug, info, instrument};

use crate::error::{Error, Result};
use crate::formula::Formula;
use crate::model::Model;
use crate::oracle::{Interrupter, Oracle, OracleKind};
use crate::reduction::mr;
use crate::solver::{shrink, Outcome, SolverOptions};

/// Every model is followed by a query for a model with strictly fewer true
/// atoms. The last model found before the oracle answers unsatisfiable is
/// minimal, no explicit check is needed.
#[derive(Debug)]
pub struct MmSolver {
    oracle: OracleKind,
    mr: bool,
    interrupter: Interrupter,
    compute_model_count: usize,
}

impl MmSolver {
    #[must_use]
    pub fn new(options: &SolverOptions, interrupter: Interrupter) -> Self {
        MmSolver {
            oracle: options.oracle,
            mr: options.mr,
            interrupter,
            compute_model_count: 0,
        }
    }

    /// Number of oracle queries of the last computation, counted from one.
    #[must_use]
    pub fn compute_model_count(&self) -> usize {
        self.compute_model_count
    }

    /// Compute a minimal model of `formula`.
    ///
    /// # Errors
    ///
    /// Propagates oracle failures and interrupts.
    #[instrument(skip_all, fields(nv = formula.nv(), clauses = formula.len(), mr = self.mr))]
    pub fn compute(&mut self, formula: &Formula) -> Result<Outcome> {
        let mut oracle = self.oracle.build(formula.nv(), &self.interrupter);
        oracle.append_formula(formula.clauses());
        self.search(formula, oracle)
    }

    /// Shrinking loop driving `oracle`, which already holds `formula`.
    pub(crate) fn search(
        &mut self,
        formula: &Formula,
        mut oracle: Box<dyn Oracle>,
    ) -> Result<Outcome> {
        let nv = formula.nv();
        let mut clauses = formula.clauses().to_vec();

        self.compute_model_count = 1;
        let mut last: Option<Model> = None;

        while oracle.solve()? {
            self.compute_model_count += 1;
            let model = oracle.model().ok_or(Error::MissingModel)?;
            debug!(
                iteration = self.compute_model_count - 1,
                true_atoms = model.positive_atoms().count(),
                "oracle found a model"
            );

            if self.mr {
                clauses = mr(&clauses, &model);
                oracle = self.oracle.build(nv, &self.interrupter);
                oracle.append_formula(&clauses);
            }

            shrink(oracle.as_mut(), &model);
            last = Some(model);
        }

        let outcome = last.map_or(Outcome::Unsat, Outcome::Minimal);
        info!(
            satisfiable = outcome.is_satisfiable(),
            compute_model_count = self.compute_model_count,
            "finished"
        );
        Ok(outcome)
    }
}
