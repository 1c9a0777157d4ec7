//! Built-in oracle: DPLL search over two watched literals.
//!
//! Decisions pick the smallest unassigned atom and try it false first,
//! which keeps the models handed to the minimal model search small.
//! Backtracking is chronological and every solve starts from scratch, so
//! clauses may be added freely between calls.
use crate::error::{Error, Result};
use crate::literal::{Atom, Clause, Literal, Polarity};
use crate::model::Model;
use crate::oracle::{Interrupter, Oracle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reason {
    /// First branch of a decision.
    Decision,
    /// Second branch of a decision, its first branch failed.
    Flipped,
    /// Forced by a unit clause or by unit propagation.
    Propagated,
}

#[derive(Debug, Clone, Copy)]
struct Assignment {
    literal: Literal,
    reason: Reason,
}

#[derive(Debug)]
pub struct DpllOracle {
    num_vars: Atom,
    // Clauses of at least two literals; the first two are watched.
    clauses: Vec<Clause>,
    units: Vec<Literal>,
    watches: Vec<Vec<usize>>,
    // An empty clause was added.
    inconsistent: bool,

    values: Vec<Option<bool>>,
    trail: Vec<Assignment>,
    model: Option<Model>,
    interrupter: Interrupter,
}

impl DpllOracle {
    #[must_use]
    pub fn new(num_vars: Atom, interrupter: Interrupter) -> Self {
        let mut oracle = DpllOracle {
            num_vars: 0,
            clauses: Vec::new(),
            units: Vec::new(),
            watches: vec![Vec::new(); 2],
            inconsistent: false,
            values: vec![None],
            trail: Vec::new(),
            model: None,
            interrupter,
        };
        oracle.ensure_atom(num_vars);
        oracle
    }

    fn ensure_atom(&mut self, atom: Atom) {
        if atom > self.num_vars {
            self.num_vars = atom;
            self.values.resize(atom as usize + 1, None);
            self.watches.resize(2 * (atom as usize + 1), Vec::new());
        }
    }

    /// Assign `literal` true. Returns `false` if it is already false.
    fn enqueue(&mut self, literal: Literal, reason: Reason) -> bool {
        match value(&self.values, literal) {
            Some(current) => current,
            None => {
                self.values[literal.atom() as usize] = Some(literal.is_positive());
                self.trail.push(Assignment { literal, reason });
                true
            }
        }
    }

    /// Propagate all assignments from `head` onwards. Returns `true` on conflict.
    fn propagate(&mut self, head: &mut usize) -> bool {
        while *head < self.trail.len() {
            let falsified = !self.trail[*head].literal;
            *head += 1;

            let watch_idx = watch_index(falsified);
            let mut watching = std::mem::take(&mut self.watches[watch_idx]);
            let mut conflict = false;
            let mut i = 0;

            while i < watching.len() {
                let clause_idx = watching[i];
                let clause = &mut self.clauses[clause_idx];
                if clause[0] == falsified {
                    clause.swap(0, 1);
                }

                let other = clause[0];
                if value(&self.values, other) == Some(true) {
                    i += 1;
                    continue;
                }

                let replacement =
                    (2..clause.len()).find(|&k| value(&self.values, clause[k]) != Some(false));
                if let Some(k) = replacement {
                    clause.swap(1, k);
                    self.watches[watch_index(clause[1])].push(clause_idx);
                    watching.swap_remove(i);
                    continue;
                }

                if value(&self.values, other).is_none() {
                    self.enqueue(other, Reason::Propagated);
                    i += 1;
                } else {
                    conflict = true;
                    break;
                }
            }

            let added = std::mem::replace(&mut self.watches[watch_idx], watching);
            self.watches[watch_idx].extend(added);

            if conflict {
                return true;
            }
        }

        false
    }

    /// Undo assignments up to the most recent untried decision and take its
    /// other branch. Returns `false` if the search space is exhausted.
    fn backtrack(&mut self, head: &mut usize) -> bool {
        while let Some(assignment) = self.trail.pop() {
            self.values[assignment.literal.atom() as usize] = None;
            if assignment.reason == Reason::Decision {
                *head = self.trail.len();
                self.enqueue(!assignment.literal, Reason::Flipped);
                return true;
            }
        }

        false
    }

    fn next_unassigned(&self) -> Option<Atom> {
        (1..=self.num_vars).find(|atom| self.values[*atom as usize].is_none())
    }

    fn current_model(&self) -> Model {
        Model::new(
            (1..=self.num_vars)
                .map(|atom| {
                    let polarity = Polarity::from(self.values[atom as usize].unwrap_or(false));
                    Literal::new(atom, polarity)
                })
                .collect(),
        )
    }
}

impl Oracle for DpllOracle {
    fn add_clause(&mut self, clause: &[Literal]) {
        let mut literals = clause.to_vec();
        literals.sort_unstable();
        literals.dedup();

        if literals
            .iter()
            .any(|literal| literals.binary_search(&!*literal).is_ok())
        {
            return;
        }

        for literal in &literals {
            self.ensure_atom(literal.atom());
        }

        match literals.as_slice() {
            [] => self.inconsistent = true,
            [unit] => self.units.push(*unit),
            [first, second, ..] => {
                let clause_idx = self.clauses.len();
                self.watches[watch_index(*first)].push(clause_idx);
                self.watches[watch_index(*second)].push(clause_idx);
                self.clauses.push(literals);
            }
        }
    }

    fn solve(&mut self) -> Result<bool> {
        self.model = None;
        self.trail.clear();
        self.values.iter_mut().for_each(|value| *value = None);

        if self.interrupter.is_interrupted() {
            return Err(Error::Interrupted);
        }

        if self.inconsistent {
            return Ok(false);
        }

        for unit in self.units.clone() {
            if !self.enqueue(unit, Reason::Propagated) {
                return Ok(false);
            }
        }

        let mut head = 0;
        loop {
            if self.interrupter.is_interrupted() {
                return Err(Error::Interrupted);
            }

            if self.propagate(&mut head) {
                if !self.backtrack(&mut head) {
                    return Ok(false);
                }
                continue;
            }

            match self.next_unassigned() {
                Some(atom) => {
                    self.enqueue(Literal::negative(atom), Reason::Decision);
                }
                None => {
                    self.model = Some(self.current_model());
                    return Ok(true);
                }
            }
        }
    }

    fn model(&self) -> Option<Model> {
        self.model.clone()
    }
}

fn value(values: &[Option<bool>], literal: Literal) -> Option<bool> {
    values[literal.atom() as usize].map(|value| value == literal.is_positive())
}

fn watch_index(literal: Literal) -> usize {
    2 * literal.atom() as usize + usize::from(literal.is_negative())
}
