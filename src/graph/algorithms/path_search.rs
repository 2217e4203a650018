//! Best-first frontier expansion between two nodes.
//!
//! The frontier is a [`PriorityQueue`] of [`Path`]s, lightest first. A single
//! [`VisitedSet`] is shared by every branch of the frontier: as soon as any
//! path touches a node, no later path may enter it, even a cheaper one. The
//! returned path is therefore the first one to reach the target under that
//! rule, which is not always the globally shortest route.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

use crate::collections::{LowestKeyFirst, PriorityQueue};
use crate::graph::model::{Edge, EdgeId, Graph, GraphError, NodeId};
use crate::graph::path::Path;
use crate::graph::visited::VisitedSet;

/// Errors raised by [`best_first_path`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The frontier ran dry before reaching the target.
    #[error("no path from `{start}` to `{end}`")]
    NoPath {
        /// Name of the start node.
        start: String,
        /// Name of the target node.
        end: String,
    },
    /// Start and target are the same node.
    #[error("start and end are both `{0}`")]
    SameEndpoints(String),
    /// An endpoint is not part of the graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A successful search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathOutcome {
    /// The path whose last edge reached the target.
    pub path: Path,
    /// How many candidate paths were dequeued, the successful one included.
    pub dequeues: usize,
}

/// Lightest path first.
type Frontier = PriorityQueue<Path, LowestKeyFirst<fn(&Path) -> u64>>;

fn frontier() -> Frontier {
    PriorityQueue::with_comparator(LowestKeyFirst(Path::weight as fn(&Path) -> u64))
}

/// Enqueues `prefix + edge` (or just `edge`) if the edge still leads somewhere new.
fn try_extend(
    graph: &Graph,
    visited: &mut VisitedSet,
    queue: &mut Frontier,
    prefix: Option<&Path>,
    edge: EdgeId,
) {
    let candidate = graph.edge(edge);
    if !visited.admits(candidate) {
        return;
    }
    let path = match prefix {
        Some(prefix) => prefix.extended(graph, edge),
        None => Path::single(graph, edge),
    };
    visited.mark_edge(candidate);
    trace!(edge = %graph.describe_edge(edge), weight = path.weight(), "frontier grew");
    queue.enqueue(path);
}

/// Edges incident to `last`'s first endpoint, then to its second, each in
/// insertion order.
fn expansion_candidates(graph: &Graph, last: Edge) -> impl Iterator<Item = EdgeId> + '_ {
    last.endpoints()
        .into_iter()
        .flat_map(move |node| graph.incident_edges(node).iter().copied())
}

/// Searches for a path from `start` to `end`.
///
/// # Errors
/// - [`SearchError::SameEndpoints`] if `start == end`
/// - [`SearchError::Graph`] if either id does not belong to `graph`
/// - [`SearchError::NoPath`] if `end` is unreachable from `start`
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn best_first_path(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
) -> Result<PathOutcome, SearchError> {
    for id in [start, end] {
        if !graph.contains(id) {
            return Err(GraphError::UnknownNodeId(id.index()).into());
        }
    }
    if start == end {
        return Err(SearchError::SameEndpoints(graph.name(start).to_owned()));
    }

    let mut visited = VisitedSet::new(graph.node_count());
    let mut queue = frontier();

    for &edge in graph.incident_edges(start) {
        try_extend(graph, &mut visited, &mut queue, None, edge);
    }

    let mut dequeues = 0;
    while let Ok(path) = queue.dequeue_max() {
        dequeues += 1;
        let Some(last) = path.last_edge() else {
            continue;
        };
        let last = *graph.edge(last);
        trace!(dequeues, weight = path.weight(), len = path.len(), "examining path");

        if last.touches(end) {
            debug!(dequeues, weight = path.weight(), "reached target");
            return Ok(PathOutcome { path, dequeues });
        }

        for edge in expansion_candidates(graph, last) {
            try_extend(graph, &mut visited, &mut queue, Some(&path), edge);
        }
    }

    debug!(dequeues, visited = visited.visited_count(), "frontier exhausted");
    Err(SearchError::NoPath {
        start: graph.name(start).to_owned(),
        end: graph.name(end).to_owned(),
    })
}

/// [`best_first_path`] with endpoints looked up by name.
///
/// # Errors
/// As [`best_first_path`], plus [`GraphError::UnknownNode`] for a missing name.
pub fn find_path_by_name(
    graph: &Graph,
    start: &str,
    end: &str,
) -> Result<PathOutcome, SearchError> {
    let start = graph.require(start)?;
    let end = graph.require(end)?;
    best_first_path(graph, start, end)
}
