//! Undirected weighted graphs and the algorithms that run over them.
//!
//! - `model`: the node/edge arena
//! - `visited`: per-search visited tracking
//! - `path`: immutable edge sequences used as search frontier entries
//! - `algorithms`: path search and spanning forests

pub mod algorithms;
pub mod model;
pub mod path;
pub mod visited;

// Re-export commonly used types from submodules
pub use model::{Edge, EdgeId, Graph, GraphError, Node, NodeId, Position, Weight};
pub use path::Path;
pub use visited::VisitedSet;
