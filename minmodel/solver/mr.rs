//! MR: check every model for minimality, shrink only the rejected ones.
use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info, instrument};

use crate::error::{Error, Result};
use crate::formula::Formula;
use crate::graph::{NodeIdx, StronglyConnectedGraph};
use crate::literal::{Atom, Clause, Literal};
use crate::model::Model;
use crate::oracle::{Interrupter, Oracle, OracleKind};
use crate::reduction::{compute_s, compute_ts, create_graph, mr, reduce};
use crate::solver::{shrink, Outcome, SolverOptions};

#[derive(Debug)]
pub struct MrSolver {
    oracle: OracleKind,
    check_oracle: OracleKind,
    mr: bool,
    interrupter: Interrupter,
    compute_model_count: usize,
    check_model_count: usize,
}

impl MrSolver {
    #[must_use]
    pub fn new(options: &SolverOptions, interrupter: Interrupter) -> Self {
        MrSolver {
            oracle: options.oracle,
            check_oracle: options.check_oracle(),
            mr: options.mr,
            interrupter,
            compute_model_count: 0,
            check_model_count: 0,
        }
    }

    /// Number of oracle models of the last computation, counted from one.
    #[must_use]
    pub fn compute_model_count(&self) -> usize {
        self.compute_model_count
    }

    /// Number of minimality checks performed.
    #[must_use]
    pub fn check_model_count(&self) -> usize {
        self.check_model_count
    }

    /// Compute a minimal model of `formula`.
    ///
    /// # Errors
    ///
    /// Propagates oracle failures and interrupts. Graph errors signal a bug
    /// in the check.
    #[instrument(skip_all, fields(nv = formula.nv(), clauses = formula.len(), mr = self.mr))]
    pub fn compute(&mut self, formula: &Formula) -> Result<Outcome> {
        let mut oracle = self.oracle.build(formula.nv(), &self.interrupter);
        oracle.append_formula(formula.clauses());
        self.search(formula, oracle)
    }

    /// Check-and-shrink loop driving `oracle`, which already holds `formula`.
    pub(crate) fn search(
        &mut self,
        formula: &Formula,
        mut oracle: Box<dyn Oracle>,
    ) -> Result<Outcome> {
        let nv = formula.nv();
        let mut clauses = formula.clauses().to_vec();

        self.compute_model_count = 1;
        self.check_model_count = 0;
        let mut last: Option<Model> = None;

        while oracle.solve()? {
            let model = oracle.model().ok_or(Error::MissingModel)?;

            let minimal = if self.mr {
                clauses = mr(&clauses, &model);
                self.check(&clauses, nv, &model)?
            } else {
                self.check(formula.clauses(), nv, &model)?
            };

            debug!(
                iteration = self.compute_model_count,
                true_atoms = model.positive_atoms().count(),
                minimal,
                "checked model"
            );

            if minimal {
                last = Some(model);
                break;
            }

            if self.mr {
                oracle = self.oracle.build(nv, &self.interrupter);
                oracle.append_formula(&clauses);
            }

            shrink(oracle.as_mut(), &model);
            self.compute_model_count += 1;
            last = Some(model);
        }

        let outcome = last.map_or(Outcome::Unsat, Outcome::Minimal);
        info!(
            satisfiable = outcome.is_satisfiable(),
            compute_model_count = self.compute_model_count,
            check_model_count = self.check_model_count,
            "finished"
        );
        Ok(outcome)
    }

    /// Decide whether `model` is a minimal model of `clauses`.
    ///
    /// The dependency graph of the *mr*-reduced clauses is condensed and its
    /// components are visited in topological order. Every component whose
    /// atoms are justified by the clauses inside it is committed; the first
    /// unjustified component ends the walk. The model is minimal iff all of
    /// its true atoms were committed.
    ///
    /// # Errors
    ///
    /// Propagates failures of the check oracle.
    #[instrument(skip_all, fields(true_atoms = model.positive_atoms().count()))]
    pub fn check(&mut self, clauses: &[Clause], formula_nv: Atom, model: &Model) -> Result<bool> {
        self.check_model_count += 1;

        let mut model = model.clone();
        let mut mr_clauses = mr(clauses, &model);
        let mut scc = StronglyConnectedGraph::compute(&create_graph(&mr_clauses, formula_nv));

        while let Some(node) = scc.get_one_empty_indegree() {
            if node > formula_nv {
                scc.remove(node)?;
                continue;
            }

            let s = compute_s(scc.weight(node)?, formula_nv);
            let ts = compute_ts(&mr_clauses, &s, formula_nv);
            let justified = self.justified(&ts, &s)?;
            debug!(
                component = node,
                atoms = s.len(),
                clauses = ts.len(),
                justified,
                "processed component"
            );

            if !justified {
                break;
            }

            model.falsify(&s);
            mr_clauses = reduce(&mr_clauses, &s);
            scc.remove(node)?;
        }

        Ok(!model.has_true_atoms())
    }

    /// Whether `s` is the minimal model of `ts`.
    fn justified(&self, ts: &BTreeMap<NodeIdx, Clause>, s: &BTreeSet<Atom>) -> Result<bool> {
        if ts.is_empty() {
            return Ok(s.is_empty());
        }

        if s.len() == 1 {
            return Ok(ts
                .values()
                .all(|clause| clause.iter().all(|literal| literal.is_positive())));
        }

        let nv = s.last().copied().unwrap_or_default();
        let mut oracle = self.check_oracle.build(nv, &self.interrupter);
        for clause in ts.values() {
            oracle.add_clause(clause);
        }
        oracle.add_clause(&s.iter().copied().map(Literal::negative).collect::<Clause>());

        Ok(!oracle.solve()?)
    }
}
