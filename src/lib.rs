//! # `pathfinder` - Heap-Driven Graph Search Toolkit
//!
//! A generic binary-heap priority queue and two graph algorithms built on it:
//! a best-first path search between two nodes and a greedy minimum
//! spanning forest.
//!
//! ## Key Features
//!
//! - **Comparator-ordered heap**: [`PriorityQueue`] takes any
//!   [`Comparator`](collections::Comparator), including plain closures
//! - **Index-addressed graph**: [`Graph`] owns every node and edge; nodes and
//!   edges refer to each other through [`NodeId`] / [`EdgeId`]
//! - **Frontier search**: [`best_first_path`] expands partial paths lightest
//!   first and reports how many it examined
//! - **Spanning forests**: [`minimum_spanning_tree`] keeps the lightest edges
//!   that still reach an untouched node; [`SpanningStrategy::UnionFind`] opts
//!   into component tracking instead
//!
//! ## Invariants
//!
//! **Heap order**: for every non-root slot `i` of the heap array, the
//! comparator never ranks `i` above its parent `(i - 1) / 2`. Debug builds
//! assert this after every sift.
//!
//! **Visited monotonicity**: within one search a node, once visited, stays
//! visited. A search may therefore return a path that is not the cheapest.
//!
//! ## Example
//!
//! ```rust
//! use pathfinder::{
//!     find_path_by_name, minimum_spanning_tree, spanning_forest_with, Graph, Position,
//!     SpanningStrategy,
//! };
//!
//! let mut graph = Graph::new();
//! for name in ["A", "B", "C", "D"] {
//!     graph.add_node(name, Position::default()).unwrap();
//! }
//! graph.add_edge_by_name("A", "B", 4).unwrap();
//! graph.add_edge_by_name("B", "D", 3).unwrap();
//! graph.add_edge_by_name("A", "C", 2).unwrap();
//! graph.add_edge_by_name("C", "D", 5).unwrap();
//!
//! let found = find_path_by_name(&graph, "A", "D").unwrap();
//! assert_eq!(found.path.weight(), 7);
//!
//! // A-C and B-D touch every node, so A-B is rejected and the two
//! // fragments stay apart under the membership rule.
//! let forest = minimum_spanning_tree(&graph);
//! assert_eq!(forest.total_weight, 5);
//!
//! let kruskal = spanning_forest_with(&graph, SpanningStrategy::UnionFind);
//! assert_eq!(kruskal.total_weight, 9);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod graph;
pub mod io;

mod invariant;

pub use collections::{Comparator, EmptyQueueError, PriorityQueue};
pub use graph::algorithms::{
    best_first_path, find_path_by_name, minimum_spanning_tree, spanning_forest_with, PathOutcome,
    SearchError, SpanningForest, SpanningStrategy,
};
pub use graph::{Edge, EdgeId, Graph, GraphError, Node, NodeId, Path, Position, VisitedSet, Weight};
pub use io::{load_graph, parse_graph, LoadError, ParseError};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Ids are plain indices.
    assert!(mem::size_of::<NodeId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<EdgeId>() == mem::size_of::<usize>());

    // An edge stays two ids plus a weight.
    assert!(mem::size_of::<Edge>() <= mem::size_of::<usize>() * 3);

    // The queue is a thin wrapper around its heap array when the comparator is a ZST.
    assert!(mem::size_of::<PriorityQueue<u64>>() == mem::size_of::<Vec<u64>>());
};
