use crate::error::{Error, Result};
use crate::graph::{Graph, NodeIdx};

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;

/// Condensation of a [`Graph`] into its strongly connected components.
///
/// Every component is represented by a single super-node whose index is the
/// smallest original node of the component. The set of original nodes of a
/// component is its *weight*. Super-nodes are connected whenever some edge
/// of the source graph crosses the two components, which makes the
/// condensation acyclic.
#[derive(Debug, Clone)]
pub struct StronglyConnectedGraph {
    condensation: Graph,
    weights: FxHashMap<NodeIdx, BTreeSet<NodeIdx>>,
    representatives: FxHashMap<NodeIdx, NodeIdx>,
}

impl StronglyConnectedGraph {
    /// Condense `graph` using Kosaraju's two-pass algorithm.
    ///
    /// Both depth-first traversals use an explicit stack, so deep dependency
    /// chains do not exhaust the call stack.
    #[must_use]
    pub fn compute(graph: &Graph) -> StronglyConnectedGraph {
        let order = finishing_order(graph);
        let reversed = graph.reverse();

        let mut weights = FxHashMap::default();
        let mut representatives = FxHashMap::default();
        let mut assigned = FxHashSet::default();

        for &root in order.iter().rev() {
            if !assigned.insert(root) {
                continue;
            }

            let mut component = BTreeSet::new();
            let mut representative = root;
            let mut stack = vec![root];
            while let Some(node) = stack.pop() {
                component.insert(node);
                representative = representative.min(node);
                for predecessor in reversed.sorted_successors(node) {
                    if assigned.insert(predecessor) {
                        stack.push(predecessor);
                    }
                }
            }

            for node in &component {
                representatives.insert(*node, representative);
            }
            weights.insert(representative, component);
        }

        let mut condensation = Graph::new();
        for node in graph.nodes() {
            let start = representatives[&node];
            condensation.add_node(start);
            for successor in graph.sorted_successors(node) {
                condensation.add_edge(start, representatives[&successor]);
            }
        }

        tracing::trace!(
            nodes = graph.len(),
            components = weights.len(),
            "condensed graph"
        );

        StronglyConnectedGraph {
            condensation,
            weights,
            representatives,
        }
    }

    /// Remove a fully processed component and decrement the in-degree of the
    /// components depending on it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingComponent`] if `node` is not a live component.
    pub fn remove(&mut self, node: NodeIdx) -> Result<()> {
        if self.weights.remove(&node).is_none() {
            return Err(Error::MissingComponent(node));
        }
        self.condensation.remove(node)
    }

    /// Original nodes belonging to the component represented by `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingComponent`] if the component does not exist or
    /// has been removed already.
    pub fn weight(&self, node: NodeIdx) -> Result<&BTreeSet<NodeIdx>> {
        self.weights
            .get(&node)
            .ok_or(Error::MissingComponent(node))
    }

    /// Weights of all live components.
    #[must_use]
    pub fn weights(&self) -> &FxHashMap<NodeIdx, BTreeSet<NodeIdx>> {
        &self.weights
    }

    /// Representative of the component `node` was assigned to.
    #[must_use]
    pub fn representative(&self, node: NodeIdx) -> Option<NodeIdx> {
        self.representatives.get(&node).copied()
    }

    /// See [`Graph::empty_indegree`].
    #[must_use]
    pub fn empty_indegree(&self) -> Vec<NodeIdx> {
        self.condensation.empty_indegree()
    }

    /// See [`Graph::get_one_empty_indegree`].
    #[must_use]
    pub fn get_one_empty_indegree(&self) -> Option<NodeIdx> {
        self.condensation.get_one_empty_indegree()
    }

    #[must_use]
    pub fn condensation(&self) -> &Graph {
        &self.condensation
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.condensation.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.condensation.is_empty()
    }
}

/// Nodes of `graph` ordered by the time their depth-first visit finished.
fn finishing_order(graph: &Graph) -> Vec<NodeIdx> {
    let mut visited = FxHashSet::default();
    let mut order = Vec::with_capacity(graph.len());

    for root in graph.nodes() {
        if !visited.insert(root) {
            continue;
        }

        // Successors are popped from the back, so keep them in descending order.
        let mut stack = vec![(root, descending_successors(graph, root))];
        while let Some((node, successors)) = stack.last_mut() {
            if let Some(next) = successors.pop() {
                if visited.insert(next) {
                    let next_successors = descending_successors(graph, next);
                    stack.push((next, next_successors));
                }
            } else {
                order.push(*node);
                stack.pop();
            }
        }
    }

    order
}

fn descending_successors(graph: &Graph, node: NodeIdx) -> Vec<NodeIdx> {
    let mut successors = graph.sorted_successors(node);
    successors.reverse();
    successors
}
