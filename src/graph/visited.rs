//! Per-search visited tracking.
//!
//! A `VisitedSet` lives for exactly one algorithm invocation. Once a node is
//! marked it stays marked, even if a cheaper route to it turns up later.

use super::model::{Edge, NodeId};

const WORD_BITS: usize = u64::BITS as usize;

/// A dense, word-packed visited set over the nodes of one graph.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    words: Vec<u64>,
    len: usize,
    visited: usize,
}

impl VisitedSet {
    /// Creates a set sized for `node_count` nodes, none visited.
    pub fn new(node_count: usize) -> Self {
        Self {
            words: vec![0; node_count.div_ceil(WORD_BITS)],
            len: node_count,
            visited: 0,
        }
    }

    /// Number of nodes the set can track.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set tracks no nodes at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes marked so far.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited
    }

    #[inline(always)]
    fn slot(node: NodeId) -> (usize, u64) {
        let i = node.index();
        (i / WORD_BITS, 1 << (i % WORD_BITS))
    }

    /// Returns `true` if `node` has been marked.
    ///
    /// # Panics
    /// Panics if `node` is out of range for this set.
    #[inline]
    pub fn is_visited(&self, node: NodeId) -> bool {
        assert!(node.index() < self.len, "node {} out of bounds", node.index());
        let (word, mask) = Self::slot(node);
        self.words[word] & mask != 0
    }

    /// Returns `true` iff this call observed the node as not-yet-visited and marks it visited.
    ///
    /// # Panics
    /// Panics if `node` is out of range for this set.
    #[inline]
    pub fn try_visit(&mut self, node: NodeId) -> bool {
        assert!(node.index() < self.len, "node {} out of bounds", node.index());
        let (word, mask) = Self::slot(node);
        let fresh = self.words[word] & mask == 0;
        if fresh {
            self.words[word] |= mask;
            self.visited += 1;
        }
        fresh
    }

    /// Returns `true` if at least one endpoint of `edge` is still unvisited.
    #[inline]
    pub fn admits(&self, edge: &Edge) -> bool {
        edge.endpoints().iter().any(|&n| !self.is_visited(n))
    }

    /// Marks both endpoints of `edge`.
    #[inline]
    pub fn mark_edge(&mut self, edge: &Edge) {
        for n in edge.endpoints() {
            self.try_visit(n);
        }
    }

    /// Unmarks every node.
    pub fn clear(&mut self) {
        self.words.fill(0);
        self.visited = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::{Graph, Position};

    #[test]
    fn test_try_visit_is_idempotent() {
        let mut g = Graph::new();
        let ids: Vec<_> = (0..70)
            .map(|i| g.add_node(format!("n{i}"), Position::default()).unwrap())
            .collect();
        let mut visited = VisitedSet::new(g.node_count());

        assert!(visited.try_visit(ids[65]));
        assert!(!visited.try_visit(ids[65]));
        assert!(visited.is_visited(ids[65]));
        assert!(!visited.is_visited(ids[64]));
        assert_eq!(visited.visited_count(), 1);

        visited.clear();
        assert!(!visited.is_visited(ids[65]));
        assert_eq!(visited.visited_count(), 0);
    }

    #[test]
    fn test_admits_until_both_endpoints_marked() {
        let mut g = Graph::new();
        let a = g.add_node("A", Position::default()).unwrap();
        let b = g.add_node("B", Position::default()).unwrap();
        let c = g.add_node("C", Position::default()).unwrap();
        let ab = g.add_edge(a, b, 1).unwrap();
        let bc = g.add_edge(b, c, 1).unwrap();

        let mut visited = VisitedSet::new(g.node_count());
        visited.mark_edge(g.edge(ab));
        assert!(!visited.admits(g.edge(ab)));
        assert!(visited.admits(g.edge(bc)));
        visited.try_visit(c);
        assert!(!visited.admits(g.edge(bc)));
    }
}
