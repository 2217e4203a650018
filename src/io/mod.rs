//! Text I/O for graphs.

pub mod loader;

pub use loader::{load_graph, parse_graph, LoadError, ParseError};
