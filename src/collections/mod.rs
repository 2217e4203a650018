//! Reusable containers.
//!
//! - `priority_queue`: comparator-ordered binary heap
//! - `comparator`: three-way priority orderings for the heap
//! - `disjoint_set`: union-find over dense ids

pub mod comparator;
pub mod disjoint_set;
pub mod priority_queue;

// Re-export commonly used types from submodules
pub use comparator::{ByKey, Comparator, LowestFirst, LowestKeyFirst, NaturalOrder};
pub use disjoint_set::DisjointSet;
pub use priority_queue::{DrainSorted, EmptyQueueError, PriorityQueue};
