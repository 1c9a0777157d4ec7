//! Clause-level reductions used by the minimality check.
//!
//! Every function takes its clauses by reference and returns a fresh
//! collection, so the formula stored by a solver is never rewritten.
use crate::graph::{Graph, NodeIdx};
use crate::literal::{Atom, Clause, Literal};
use crate::model::Model;

use rustc_hash::FxHashSet;
use std::collections::{BTreeMap, BTreeSet};

/// The *mr*-reduction of `clauses` with respect to `model`.
///
/// A clause with a negative literal of an atom false in `model` is already
/// satisfied and dropped. From the remaining clauses the positive literals
/// of false atoms are stripped. Clauses left empty are omitted.
#[must_use]
pub fn mr(clauses: &[Clause], model: &Model) -> Vec<Clause> {
    let false_literals: FxHashSet<Literal> = model.negative_literals().collect();

    clauses
        .iter()
        .filter(|clause| {
            !clause
                .iter()
                .any(|literal| literal.is_negative() && false_literals.contains(literal))
        })
        .map(|clause| {
            clause
                .iter()
                .copied()
                .filter(|literal| !false_literals.contains(&!*literal))
                .collect::<Clause>()
        })
        .filter(|clause| !clause.is_empty())
        .collect()
}

/// Dependency graph of `clauses`.
///
/// The `i`-th clause becomes node `formula_nv + 1 + i`. Every negative
/// literal `-a` adds `a -> clause` and every positive literal `a` adds
/// `clause -> a`: a clause depends on its body and its head depends on it.
#[must_use]
pub fn create_graph(clauses: &[Clause], formula_nv: Atom) -> Graph {
    let mut graph = Graph::new();
    for (key, clause) in (formula_nv + 1..).zip(clauses) {
        for literal in clause {
            if literal.is_positive() {
                graph.add_edge(key, literal.atom());
            } else {
                graph.add_edge(literal.atom(), key);
            }
        }
    }

    graph
}

/// Non-empty clauses whose atoms all lie within `atoms`, keyed by their
/// position in `clauses` offset by `formula_nv`.
#[must_use]
pub fn compute_ts(
    clauses: &[Clause],
    atoms: &BTreeSet<Atom>,
    formula_nv: Atom,
) -> BTreeMap<NodeIdx, Clause> {
    (formula_nv..)
        .zip(clauses)
        .filter(|(_, clause)| {
            !clause.is_empty() && clause.iter().all(|literal| atoms.contains(&literal.atom()))
        })
        .map(|(key, clause)| (key, clause.clone()))
        .collect()
}

/// Members of `component` that are real atoms, i.e. not greater than `limit`.
#[must_use]
pub fn compute_s(component: &BTreeSet<NodeIdx>, limit: Atom) -> BTreeSet<Atom> {
    component
        .iter()
        .copied()
        .filter(|node| *node <= limit)
        .collect()
}

/// Commit `atoms` as true.
///
/// Clauses with a positive literal in `atoms` are satisfied and dropped,
/// literals of `atoms` are stripped from the others. Clauses left empty
/// are omitted.
#[must_use]
pub fn reduce(clauses: &[Clause], atoms: &BTreeSet<Atom>) -> Vec<Clause> {
    clauses
        .iter()
        .filter(|clause| {
            !clause
                .iter()
                .any(|literal| literal.is_positive() && atoms.contains(&literal.atom()))
        })
        .map(|clause| {
            clause
                .iter()
                .copied()
                .filter(|literal| !atoms.contains(&literal.atom()))
                .collect::<Clause>()
        })
        .filter(|clause| !clause.is_empty())
        .collect()
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use std::collections::BTreeMap;

    use super::{compute_s, compute_ts, create_graph, mr, reduce};
    use crate::literal::Literal;
    use crate::model::Model;
    use crate::{atoms, clause};

    fn model(literals: &[i32]) -> Model {
        Model::new(
            literals
                .iter()
                .map(|&literal| Literal::try_from(literal).unwrap())
                .collect(),
        )
    }

    #[test]
    fn mr_drops_satisfied_and_strips_false() {
        let clauses = vec![clause![1, 2], clause![-1, 3], clause![-2, 3]];
        let reduced = mr(&clauses, &model(&[1, -2, 3]));

        assert_eq!(reduced, vec![clause![1], clause![-1, 3]]);
        // The input is left intact.
        assert_eq!(clauses[0], clause![1, 2]);
    }

    #[test]
    fn mr_omits_emptied_clauses() {
        let clauses = vec![clause![2, 3], clause![1]];
        assert_eq!(mr(&clauses, &model(&[1, -2, -3])), vec![clause![1]]);
    }

    #[test]
    fn mr_is_idempotent() {
        let clauses = vec![
            clause![1, 2, -3],
            clause![-1, 4],
            clause![3, -4, 2],
            clause![-2, -4],
            clause![2, 3],
        ];
        let m = model(&[1, -2, 3, 4]);

        let once = mr(&clauses, &m);
        assert_eq!(mr(&once, &m), once);
    }

    #[test]
    fn graph_of_clauses() {
        // Clause nodes are 4 and 5.
        let graph = create_graph(&[clause![1, -2], clause![3]], 3);

        assert_eq!(graph.nodes(), vec![1, 2, 3, 4, 5]);
        assert_eq!(graph.sorted_successors(4), vec![1]);
        assert_eq!(graph.sorted_successors(2), vec![4]);
        assert_eq!(graph.sorted_successors(5), vec![3]);
        assert_eq!(graph.in_degree(2), Some(0));
        assert_eq!(graph.in_degree(4), Some(1));
        assert_eq!(graph.in_degree(5), Some(0));
    }

    #[test]
    fn target_clauses() {
        let clauses = vec![clause![1, -2], clause![3], clause![1, 4], clause![-2, 2]];
        let ts = compute_ts(&clauses, &atoms![1, 2], 4);

        assert_eq!(
            ts,
            BTreeMap::from([(4, clause![1, -2]), (7, clause![-2, 2])])
        );
        assert!(compute_ts(&clauses, &atoms![], 4).is_empty());
    }

    #[test]
    fn component_atoms() {
        assert_eq!(compute_s(&atoms![1, 3, 5, 7], 4), atoms![1, 3]);
        assert_eq!(compute_s(&atoms![5, 6], 4), atoms![]);
    }

    #[test]
    fn reduce_by_atoms() {
        assert_eq!(reduce(&[clause![1, 2, -3]], &atoms![3]), vec![clause![1, 2]]);
        assert_eq!(reduce(&[clause![3, -1]], &atoms![3]), Vec::<Vec<Literal>>::new());
        assert_eq!(
            reduce(&[clause![-3], clause![-1, 2], clause![-3, 4]], &atoms![3]),
            vec![clause![-1, 2], clause![4]]
        );
    }
}
