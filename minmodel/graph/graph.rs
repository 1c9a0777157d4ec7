use crate::error::{Error, Result};

use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt::Display;

/// Opaque identifier of a node. Atoms of a formula and the synthetic
/// clause nodes share this space.
pub type NodeIdx = u32;

/// Directed graph over [`NodeIdx`] storing successor sets together with
/// the number of distinct predecessors of every node.
///
/// Every node that was added explicitly or appears as a successor is a key
/// of both maps. Self-loops are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    successors: FxHashMap<NodeIdx, FxHashSet<NodeIdx>>,
    in_degree: FxHashMap<NodeIdx, usize>,
}

impl Graph {
    #[must_use]
    pub fn new() -> Graph {
        Graph::default()
    }

    /// Make sure `node` is part of the graph. A fresh node has no successors
    /// and in-degree 0.
    pub fn add_node(&mut self, node: NodeIdx) {
        self.successors.entry(node).or_default();
        self.in_degree.entry(node).or_insert(0);
    }

    /// Add edge `start -> end` together with both of its endpoints.
    ///
    /// Adding an edge that is already present does nothing and so does
    /// adding a self-loop apart from registering `start`.
    pub fn add_edge(&mut self, start: NodeIdx, end: NodeIdx) {
        self.add_node(start);
        if start == end {
            return;
        }

        self.add_node(end);
        let is_new = self
            .successors
            .get_mut(&start)
            .is_some_and(|successors| successors.insert(end));
        if is_new {
            *self.in_degree.entry(end).or_insert(0) += 1;
        }
    }

    /// All nodes whose in-degree is currently 0, in no particular order.
    #[must_use]
    pub fn empty_indegree(&self) -> Vec<NodeIdx> {
        self.in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(node, _)| *node)
            .collect()
    }

    /// A node with in-degree 0 or `None` if there is no such node. The
    /// smallest such node is returned so that traversals are reproducible.
    #[must_use]
    pub fn get_one_empty_indegree(&self) -> Option<NodeIdx> {
        self.in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(node, _)| *node)
            .min()
    }

    /// Remove `node` and decrement the in-degree of all its successors.
    ///
    /// Callers are expected to remove only nodes without predecessors. If the
    /// node still has some, it is scrubbed from their successor sets as well.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingNode`] if `node` is not in the graph.
    pub fn remove(&mut self, node: NodeIdx) -> Result<()> {
        let in_degree = self
            .in_degree
            .remove(&node)
            .ok_or(Error::MissingNode(node))?;
        let successors = self.successors.remove(&node).unwrap_or_default();

        for successor in successors {
            if let Some(degree) = self.in_degree.get_mut(&successor) {
                *degree = degree.saturating_sub(1);
            }
        }

        if in_degree > 0 {
            tracing::debug!(node, in_degree, "removing node that still has predecessors");
            for successors in self.successors.values_mut() {
                successors.remove(&node);
            }
        }

        Ok(())
    }

    /// New graph with every edge `a -> b` turned into `b -> a`. Nodes without
    /// any edges are kept.
    #[must_use]
    pub fn reverse(&self) -> Graph {
        let mut reversed = Graph::new();
        for (start, successors) in &self.successors {
            reversed.add_node(*start);
            for end in successors {
                reversed.add_edge(*end, *start);
            }
        }

        reversed
    }

    /// Successors of `node`, if the node is present.
    #[must_use]
    pub fn successors(&self, node: NodeIdx) -> Option<&FxHashSet<NodeIdx>> {
        self.successors.get(&node)
    }

    /// Successors of `node` in ascending order.
    pub(crate) fn sorted_successors(&self, node: NodeIdx) -> Vec<NodeIdx> {
        let mut successors: Vec<_> = self
            .successors(node)
            .map(|successors| successors.iter().copied().collect())
            .unwrap_or_default();
        successors.sort_unstable();
        successors
    }

    #[must_use]
    pub fn in_degree(&self, node: NodeIdx) -> Option<usize> {
        self.in_degree.get(&node).copied()
    }

    #[must_use]
    pub fn contains(&self, node: NodeIdx) -> bool {
        self.successors.contains_key(&node)
    }

    /// All nodes in ascending order.
    #[must_use]
    pub fn nodes(&self) -> Vec<NodeIdx> {
        let mut nodes: Vec<_> = self.successors.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }

    /// All edges as `(start, end)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIdx, NodeIdx)> + '_ {
        self.successors
            .iter()
            .flat_map(|(start, successors)| successors.iter().map(move |end| (*start, *end)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.successors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph:")?;
        for node in self.nodes() {
            writeln!(f, "{node} => {:?}", self.sorted_successors(node))?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test {
    use pretty_assertions::assert_eq;

    use super::{Graph, NodeIdx};
    use crate::error::Error;

    pub(crate) fn graph_from_edges(edges: &[(NodeIdx, NodeIdx)]) -> Graph {
        let mut graph = Graph::new();
        for (start, end) in edges {
            graph.add_edge(*start, *end);
        }
        graph
    }

    /// In-degree of every node must match the number of its distinct predecessors.
    pub(crate) fn assert_consistent(graph: &Graph) {
        for node in graph.nodes() {
            let predecessors = graph.edges().filter(|(_, end)| *end == node).count();
            assert_eq!(graph.in_degree(node), Some(predecessors), "node {node}");
        }
        assert_eq!(graph.in_degree.len(), graph.successors.len());
    }

    fn sorted(mut nodes: Vec<NodeIdx>) -> Vec<NodeIdx> {
        nodes.sort_unstable();
        nodes
    }

    #[test]
    fn add_edges() {
        let graph = graph_from_edges(&[(1, 2), (1, 3), (2, 3)]);

        assert_eq!(graph.nodes(), vec![1, 2, 3]);
        assert_eq!(graph.in_degree(1), Some(0));
        assert_eq!(graph.in_degree(2), Some(1));
        assert_eq!(graph.in_degree(3), Some(2));
        assert_eq!(graph.sorted_successors(1), vec![2, 3]);
        assert_consistent(&graph);
    }

    #[test]
    fn duplicate_edges_and_self_loops() {
        let graph = graph_from_edges(&[(1, 2), (1, 2), (2, 2)]);

        assert_eq!(graph.in_degree(2), Some(1));
        assert_eq!(graph.sorted_successors(2), Vec::<NodeIdx>::new());
        assert_eq!(graph.edges().count(), 1);
        assert_consistent(&graph);
    }

    #[test]
    fn isolated_node() {
        let mut graph = Graph::new();
        graph.add_node(5);
        graph.add_edge(7, 7);

        assert_eq!(graph.nodes(), vec![5, 7]);
        assert_eq!(sorted(graph.empty_indegree()), vec![5, 7]);
        assert_eq!(graph.get_one_empty_indegree(), Some(5));
    }

    #[test]
    fn empty_indegree() {
        let graph = graph_from_edges(&[(1, 2), (3, 2), (2, 4)]);
        assert_eq!(sorted(graph.empty_indegree()), vec![1, 3]);
        assert_eq!(graph.get_one_empty_indegree(), Some(1));

        let cycle = graph_from_edges(&[(1, 2), (2, 1)]);
        assert!(cycle.empty_indegree().is_empty());
        assert_eq!(cycle.get_one_empty_indegree(), None);
        assert_eq!(Graph::new().get_one_empty_indegree(), None);
    }

    #[test]
    fn remove_source() {
        let mut graph = graph_from_edges(&[(1, 2), (1, 3), (2, 3)]);

        graph.remove(1).unwrap();
        assert!(!graph.contains(1));
        assert_eq!(graph.in_degree(2), Some(0));
        assert_eq!(graph.in_degree(3), Some(1));
        assert_consistent(&graph);

        graph.remove(2).unwrap();
        assert_eq!(graph.get_one_empty_indegree(), Some(3));
        assert_consistent(&graph);
    }

    #[test]
    fn remove_node_with_predecessors() {
        let mut graph = graph_from_edges(&[(1, 2), (2, 3), (4, 2)]);

        graph.remove(2).unwrap();
        assert_eq!(graph.sorted_successors(1), Vec::<NodeIdx>::new());
        assert_eq!(graph.sorted_successors(4), Vec::<NodeIdx>::new());
        assert_eq!(graph.in_degree(3), Some(0));
        assert_consistent(&graph);
    }

    #[test]
    fn remove_missing() {
        let mut graph = graph_from_edges(&[(1, 2)]);
        assert!(matches!(graph.remove(3), Err(Error::MissingNode(3))));

        graph.remove(1).unwrap();
        assert!(matches!(graph.remove(1), Err(Error::MissingNode(1))));
    }

    #[test]
    fn reverse() {
        let mut graph = graph_from_edges(&[(1, 2), (2, 3), (1, 3)]);
        graph.add_node(9);

        let reversed = graph.reverse();
        assert_eq!(reversed.nodes(), vec![1, 2, 3, 9]);
        assert_eq!(reversed.sorted_successors(3), vec![1, 2]);
        assert_eq!(reversed.sorted_successors(2), vec![1]);
        assert_eq!(reversed.in_degree(1), Some(2));
        assert_eq!(reversed.in_degree(9), Some(0));
        assert_consistent(&reversed);

        // The original graph is left untouched.
        assert_eq!(graph.sorted_successors(1), vec![2, 3]);
    }
}
