//! Reader for the two-section graph description format.
//!
//! ```text
//! map.png
//! NODES
//! A 1.0 2.0
//! B 3.5 0.25
//! ARCS
//! A B 4
//! ```
//!
//! The first line names a background image and is kept verbatim. Everything
//! after it is whitespace-separated tokens: the literal `NODES`, then
//! `name x y` triples until the literal `ARCS`, then `start end weight`
//! triples until end of input.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::graph::{Graph, GraphError, Position, Weight};

const NODES: &str = "NODES";
const ARCS: &str = "ARCS";

/// A malformed graph description. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input has no lines at all.
    #[error("input is empty")]
    Empty,
    /// The section header after the image line is not `NODES`.
    #[error("line {line}: expected `NODES`, found `{found}`")]
    MissingNodes {
        /// Line of the offending token.
        line: usize,
        /// The token found instead.
        found: String,
    },
    /// The input ended inside the node section.
    #[error("input ended before the `ARCS` section")]
    MissingArcs,
    /// A triple stopped short at end of input.
    #[error("line {line}: incomplete {what} entry")]
    Truncated {
        /// Line of the last token read.
        line: usize,
        /// `node` or `arc`.
        what: &'static str,
    },
    /// A coordinate failed to parse.
    #[error("line {line}: `{token}` is not a coordinate")]
    BadCoordinate {
        /// Line of the offending token.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A weight failed to parse as a non-negative integer.
    #[error("line {line}: `{token}` is not a non-negative integer weight")]
    BadWeight {
        /// Line of the offending token.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// The graph rejected a node or edge.
    #[error("line {line}: {source}")]
    Graph {
        /// Line of the entry.
        line: usize,
        /// Why the graph refused it.
        source: GraphError,
    },
}

/// Failure to read or parse a graph file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// The file.
        path: PathBuf,
        /// The underlying failure.
        source: std::io::Error,
    },
    /// The file contents are malformed.
    #[error("{}: {source}", .path.display())]
    Parse {
        /// The file.
        path: PathBuf,
        /// The underlying failure.
        source: ParseError,
    },
}

struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn new(lines: impl Iterator<Item = (usize, &'a str)> + 'a) -> Self {
        let inner = lines.flat_map(|(n, l)| l.split_whitespace().map(move |t| (n, t)));
        Self {
            inner: Box::new(inner),
            line: 1,
        }
    }

    fn advance(&mut self) -> Option<&'a str> {
        let (line, token) = self.inner.next()?;
        self.line = line;
        Some(token)
    }

    fn expect(&mut self, what: &'static str) -> Result<&'a str, ParseError> {
        self.advance().ok_or(ParseError::Truncated {
            line: self.line,
            what,
        })
    }
}

fn coordinate(tokens: &mut Tokens<'_>) -> Result<f64, ParseError> {
    let token = tokens.expect("node")?;
    token.parse().map_err(|_| ParseError::BadCoordinate {
        line: tokens.line,
        token: token.to_owned(),
    })
}

/// Parses a graph description held in memory.
///
/// # Errors
/// Returns a [`ParseError`] describing the first malformed entry.
pub fn parse_graph(input: &str) -> Result<Graph, ParseError> {
    let mut lines = input.lines().enumerate().map(|(i, l)| (i + 1, l));
    let (_, header) = lines.next().ok_or(ParseError::Empty)?;

    let mut graph = Graph::new();
    let background = header.trim();
    if !background.is_empty() {
        graph.set_background(background);
    }

    let mut tokens = Tokens::new(lines);
    match tokens.advance() {
        Some(NODES) => {}
        Some(other) => {
            return Err(ParseError::MissingNodes {
                line: tokens.line,
                found: other.to_owned(),
            })
        }
        None => {
            return Err(ParseError::MissingNodes {
                line: 2,
                found: String::new(),
            })
        }
    }

    loop {
        let name = tokens.advance().ok_or(ParseError::MissingArcs)?;
        if name == ARCS {
            break;
        }
        let line = tokens.line;
        let x = coordinate(&mut tokens)?;
        let y = coordinate(&mut tokens)?;
        graph
            .add_node(name, Position::new(x, y))
            .map_err(|source| ParseError::Graph { line, source })?;
    }

    while let Some(start) = tokens.advance() {
        let line = tokens.line;
        let end = tokens.expect("arc")?;
        let token = tokens.expect("arc")?;
        let weight: Weight = token.parse().map_err(|_| ParseError::BadWeight {
            line: tokens.line,
            token: token.to_owned(),
        })?;
        graph
            .add_edge_by_name(start, end, weight)
            .map_err(|source| ParseError::Graph { line, source })?;
    }

    debug!(nodes = graph.node_count(), edges = graph.edge_count(), "parsed graph");
    Ok(graph)
}

/// Reads and parses a graph file.
///
/// # Errors
/// [`LoadError::Io`] if the file cannot be read, [`LoadError::Parse`] if it is malformed.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    parse_graph(&text).map_err(|source| LoadError::Parse {
        path: path.to_owned(),
        source,
    })
}
