//! Greedy minimum-spanning-forest edge selection.
//!
//! Every edge is loaded into a [`PriorityQueue`] ordered by ascending weight
//! and drained lightest first. Two acceptance rules are available:
//!
//! - [`SpanningStrategy::VisitedMembership`] (the default) accepts an edge
//!   whenever at least one endpoint has not been touched by an accepted edge.
//!   It cannot tell two separately grown fragments apart, so on some graphs
//!   it rejects the edge that would join them and the result is not spanning.
//! - [`SpanningStrategy::UnionFind`] accepts an edge whenever its endpoints
//!   lie in different components, which is textbook Kruskal.

use serde::Serialize;
use tracing::debug;

use crate::collections::{DisjointSet, LowestKeyFirst, PriorityQueue};
use crate::graph::model::{EdgeId, Graph, Weight};
use crate::graph::visited::VisitedSet;

/// How [`spanning_forest_with`] decides whether an edge closes a cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpanningStrategy {
    /// Reject an edge once both endpoints have been touched.
    #[default]
    VisitedMembership,
    /// Reject an edge whose endpoints are already connected.
    UnionFind,
}

/// Edges chosen by a spanning-forest run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpanningForest {
    /// Accepted edges, in the order they were accepted.
    pub accepted: Vec<EdgeId>,
    /// Discarded edges, in the order they were discarded.
    pub rejected: Vec<EdgeId>,
    /// Sum of the accepted edges' weights.
    pub total_weight: u64,
}

impl SpanningForest {
    fn accept(&mut self, edge: EdgeId, weight: Weight) {
        self.accepted.push(edge);
        self.total_weight += u64::from(weight);
    }

    /// Returns `true` if `edge` was accepted.
    pub fn contains(&self, edge: EdgeId) -> bool {
        self.accepted.contains(&edge)
    }
}

/// Runs the default [`SpanningStrategy::VisitedMembership`] selection.
pub fn minimum_spanning_tree(graph: &Graph) -> SpanningForest {
    spanning_forest_with(graph, SpanningStrategy::VisitedMembership)
}

/// Drains every edge lightest first and keeps those `strategy` accepts.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn spanning_forest_with(graph: &Graph, strategy: SpanningStrategy) -> SpanningForest {
    let by_weight = |e: &EdgeId| graph.edge(*e).weight();
    let mut queue =
        PriorityQueue::with_capacity_and_comparator(graph.edge_count(), LowestKeyFirst(by_weight));
    queue.extend(graph.edges().map(|(id, _)| id));

    let mut forest = SpanningForest::default();
    match strategy {
        SpanningStrategy::VisitedMembership => {
            let mut visited = VisitedSet::new(graph.node_count());
            while let Ok(id) = queue.dequeue_max() {
                let edge = graph.edge(id);
                let keep = visited.admits(edge);
                debug!(edge = %graph.describe_edge(id), keep, "considered");
                if keep {
                    forest.accept(id, edge.weight());
                    visited.mark_edge(edge);
                } else {
                    forest.rejected.push(id);
                }
            }
        }
        SpanningStrategy::UnionFind => {
            let mut components = DisjointSet::with_singletons(graph.node_count());
            while let Ok(id) = queue.dequeue_max() {
                let edge = graph.edge(id);
                let [a, b] = edge.endpoints();
                let keep = components.union(a.index(), b.index());
                debug!(edge = %graph.describe_edge(id), keep, "considered");
                if keep {
                    forest.accept(id, edge.weight());
                } else {
                    forest.rejected.push(id);
                }
            }
        }
    }

    debug!(
        accepted = forest.accepted.len(),
        rejected = forest.rejected.len(),
        total_weight = forest.total_weight,
        "spanning forest complete"
    );
    forest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::Position;

    fn graph(nodes: &[&str], edges: &[(&str, &str, u32)]) -> Graph {
        let mut g = Graph::new();
        for &n in nodes {
            g.add_node(n, Position::default()).unwrap();
        }
        for &(a, b, w) in edges {
            g.add_edge_by_name(a, b, w).unwrap();
        }
        g
    }

    fn names(g: &Graph, edges: &[EdgeId]) -> Vec<String> {
        edges.iter().map(|&e| g.describe_edge(e)).collect()
    }

    #[test]
    fn test_triangle_drops_heaviest_edge() {
        let g = graph(&["A", "B", "C"], &[("A", "B", 1), ("B", "C", 2), ("A", "C", 3)]);
        let forest = minimum_spanning_tree(&g);
        assert_eq!(names(&g, &forest.accepted), vec!["A -> B (1)", "B -> C (2)"]);
        assert_eq!(names(&g, &forest.rejected), vec!["A -> C (3)"]);
        assert_eq!(forest.total_weight, 3);
    }

    #[test]
    fn test_empty_graph() {
        let forest = minimum_spanning_tree(&Graph::new());
        assert!(forest.accepted.is_empty());
        assert_eq!(forest.total_weight, 0);
    }

    #[test]
    fn test_membership_rule_cannot_join_fragments() {
        // A-B and C-D are accepted as separate fragments; B-C then has both
        // endpoints visited and is rejected although it joins them.
        let g = graph(
            &["A", "B", "C", "D"],
            &[("A", "B", 1), ("C", "D", 1), ("B", "C", 5)],
        );
        let membership = minimum_spanning_tree(&g);
        assert_eq!(membership.accepted.len(), 2);
        assert_eq!(membership.total_weight, 2);

        let kruskal = spanning_forest_with(&g, SpanningStrategy::UnionFind);
        assert_eq!(kruskal.accepted.len(), 3);
        assert_eq!(kruskal.total_weight, 7);
    }

    #[test]
    fn test_self_loop_on_untouched_node_is_accepted() {
        let g = graph(&["A", "B"], &[("A", "A", 0), ("A", "B", 3)]);
        let membership = minimum_spanning_tree(&g);
        assert_eq!(names(&g, &membership.accepted), vec!["A -> A (0)", "A -> B (3)"]);
        let kruskal = spanning_forest_with(&g, SpanningStrategy::UnionFind);
        assert_eq!(names(&g, &kruskal.rejected), vec!["A -> A (0)"]);
        assert_eq!(kruskal.total_weight, 3);
    }

    #[test]
    fn test_union_find_spans_each_component() {
        let g = graph(
            &["A", "B", "C", "X", "Y"],
            &[("A", "B", 2), ("B", "C", 2), ("A", "C", 1), ("X", "Y", 9)],
        );
        let forest = spanning_forest_with(&g, SpanningStrategy::UnionFind);
        assert_eq!(forest.accepted.len(), g.node_count() - 2);
        assert_eq!(forest.total_weight, 12);
        assert_eq!(forest.rejected.len(), 1);
    }
}
