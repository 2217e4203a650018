//! Disjoint Set (Union-Find) over dense `usize` ids.
//!
//! # Performance
//!
//! - Parent pointers live in a `Vec<Cell<usize>>` so `find` can compress paths
//!   through a shared reference.
//! - Path compression and union-by-rank give nearly constant time operations.

use std::cell::Cell;

/// A Disjoint Set (Union-Find) data structure.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    /// Parent pointers; a root points at itself.
    parent: Vec<Cell<usize>>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates a new empty disjoint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `len` singleton sets with ids `0..len`.
    pub fn with_singletons(len: usize) -> Self {
        Self {
            parent: (0..len).map(Cell::new).collect(),
            rank: vec![0; len],
        }
    }

    /// Creates a new set containing a single element.
    /// Returns the representative ID of the new set.
    pub fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(Cell::new(id));
        self.rank.push(0);
        id
    }

    /// Finds the representative of the set containing `id`, with path compression.
    ///
    /// # Panics
    /// Panics if `id` was never created.
    pub fn find(&self, id: usize) -> usize {
        let mut root = id;
        loop {
            let parent = self.parent[root].get();
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut curr = id;
        while curr != root {
            let parent = self.parent[curr].get();
            self.parent[curr].set(root);
            curr = parent;
        }

        root
    }

    /// Returns `true` if `a` and `b` share a set.
    pub fn same_set(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Unites the sets containing `id1` and `id2`.
    /// Returns `true` if they were in different sets, `false` otherwise.
    pub fn union(&mut self, id1: usize, id2: usize) -> bool {
        let root1 = self.find(id1);
        let root2 = self.find(id2);

        if root1 == root2 {
            return false;
        }

        let rank1 = self.rank[root1];
        let rank2 = self.rank[root2];

        if rank1 < rank2 {
            self.parent[root1].set(root2);
        } else if rank1 > rank2 {
            self.parent[root2].set(root1);
        } else {
            self.parent[root2].set(root1);
            self.rank[root1] = self.rank[root1].saturating_add(1);
        }

        true
    }

    /// Returns the number of elements in the disjoint set.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_set_basic() {
        let mut ds = DisjointSet::new();
        let a = ds.make_set();
        let b = ds.make_set();
        let c = ds.make_set();

        assert_ne!(ds.find(a), ds.find(b));
        assert!(ds.union(a, b));
        assert!(ds.same_set(a, b));
        assert!(!ds.same_set(a, c));
        assert!(!ds.union(b, a));

        assert!(ds.union(b, c));
        assert!(ds.same_set(a, c));
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn test_long_chain_compresses() {
        let mut ds = DisjointSet::with_singletons(64);
        for i in 1..64 {
            ds.union(i - 1, i);
        }
        let root = ds.find(63);
        assert!((0..64).all(|i| ds.find(i) == root));
    }
}
