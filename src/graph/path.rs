//! Immutable edge sequences used as the search frontier.

use serde::Serialize;

use super::model::{EdgeId, Graph};

/// An ordered sequence of edges leading away from a search's start node,
/// together with its cumulative weight.
///
/// Consecutive edges share an endpoint, but the sequence is not guaranteed to
/// be a simple walk: an extension may hang off either endpoint of the last
/// edge. A `Path` is never mutated once built; [`Path::extended`] returns a
/// new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    edges: Vec<EdgeId>,
    weight: u64,
}

impl Path {
    /// A one-edge path.
    pub fn single(graph: &Graph, edge: EdgeId) -> Self {
        Self {
            edges: vec![edge],
            weight: u64::from(graph.edge(edge).weight()),
        }
    }

    /// A copy of `self` with `edge` appended.
    #[must_use]
    pub fn extended(&self, graph: &Graph, edge: EdgeId) -> Self {
        let mut edges = Vec::with_capacity(self.edges.len() + 1);
        edges.extend_from_slice(&self.edges);
        edges.push(edge);
        Self {
            edges,
            weight: self.weight + u64::from(graph.edge(edge).weight()),
        }
    }

    /// The edges, first to last.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// The most recently appended edge.
    pub fn last_edge(&self) -> Option<EdgeId> {
        self.edges.last().copied()
    }

    /// Cumulative weight of every edge.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` for a path without edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// One `A -> B (w)` line per edge.
    pub fn describe(&self, graph: &Graph) -> Vec<String> {
        self.edges.iter().map(|&e| graph.describe_edge(e)).collect()
    }
}
