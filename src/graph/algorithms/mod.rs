//! Graph algorithms driven by [`PriorityQueue`](crate::collections::PriorityQueue).
//!
//! - [`path_search`]: best-first frontier expansion between two nodes
//! - [`spanning_tree`]: greedy lightest-edge-first spanning forest

pub mod path_search;
pub mod spanning_tree;

pub use path_search::{best_first_path, find_path_by_name, PathOutcome, SearchError};
pub use spanning_tree::{
    minimum_spanning_tree, spanning_forest_with, SpanningForest, SpanningStrategy,
};
