//! Arena-backed undirected weighted graph.
//!
//! The [`Graph`] owns every [`Node`] and [`Edge`]. Nodes and edges refer to
//! each other through [`NodeId`] / [`EdgeId`] indices, never through
//! references, so a graph can be shared freely across repeated searches.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_node` | \(O(1)\) amortized | Hashes the name once |
//! | `add_edge` | \(O(1)\) amortized | Appends to both incident lists |
//! | `node_id` | \(O(1)\) expected | Name lookup |
//! | `incident_edges` | \(O(1)\) | Borrowed slice |

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Edge weight. Weights are non-negative by construction.
pub type Weight = u32;

/// Stable index of a node inside its [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Stable index of an edge inside its [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Returns the raw arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Errors raised while building a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node with this name already exists.
    #[error("duplicate node `{0}`")]
    DuplicateNode(String),
    /// No node carries this name.
    #[error("unknown node `{0}`")]
    UnknownNode(String),
    /// The id does not belong to this graph.
    #[error("node id {0} is out of bounds")]
    UnknownNodeId(usize),
}

/// 2-D position of a node. Only a renderer cares about it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// Creates a position.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A named vertex together with the edges that touch it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    name: String,
    position: Position,
    incident: Vec<EdgeId>,
}

impl Node {
    /// The node's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The node's position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Incident edges in insertion order.
    pub fn incident(&self) -> &[EdgeId] {
        &self.incident
    }

    /// Number of incident edges.
    pub fn degree(&self) -> usize {
        self.incident.len()
    }
}

/// An undirected weighted edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    weight: Weight,
    endpoints: [NodeId; 2],
}

impl Edge {
    /// The edge weight.
    #[inline]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Both endpoints, in the order they were given to [`Graph::add_edge`].
    #[inline]
    pub fn endpoints(&self) -> [NodeId; 2] {
        self.endpoints
    }

    /// Returns `true` if `node` is either endpoint.
    #[inline]
    pub fn touches(&self, node: NodeId) -> bool {
        self.endpoints[0] == node || self.endpoints[1] == node
    }

    /// The endpoint across from `node`, or `None` if `node` is not an endpoint.
    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        match self.endpoints {
            [a, b] if a == node => Some(b),
            [a, b] if b == node => Some(a),
            _ => None,
        }
    }

    /// Returns `true` for an edge whose endpoints coincide.
    pub fn is_self_loop(&self) -> bool {
        self.endpoints[0] == self.endpoints[1]
    }
}

/// An undirected weighted graph that owns its nodes and edges.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    background: Option<String>,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    by_name: HashMap<String, NodeId>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for the given number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            background: None,
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            by_name: HashMap::with_capacity(nodes),
        }
    }

    /// Name of the background image a renderer would draw under the graph.
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Sets the background image name.
    pub fn set_background(&mut self, background: impl Into<String>) {
        self.background = Some(background.into());
    }

    /// Adds a node.
    ///
    /// # Errors
    /// [`GraphError::DuplicateNode`] if the name is taken.
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        position: Position,
    ) -> Result<NodeId, GraphError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(GraphError::DuplicateNode(name));
        }
        let id = NodeId(self.nodes.len());
        self.by_name.insert(name.clone(), id);
        self.nodes.push(Node {
            name,
            position,
            incident: Vec::new(),
        });
        Ok(id)
    }

    /// Adds an undirected edge and records it on both endpoints.
    ///
    /// A self-loop is recorded once on its single endpoint.
    ///
    /// # Errors
    /// [`GraphError::UnknownNodeId`] if either id is out of bounds.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> Result<EdgeId, GraphError> {
        for id in [a, b] {
            if id.0 >= self.nodes.len() {
                return Err(GraphError::UnknownNodeId(id.0));
            }
        }
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            weight,
            endpoints: [a, b],
        });
        self.nodes[a.0].incident.push(id);
        if a != b {
            self.nodes[b.0].incident.push(id);
        }
        Ok(id)
    }

    /// Adds an edge between two nodes looked up by name.
    ///
    /// # Errors
    /// [`GraphError::UnknownNode`] if either name is missing.
    pub fn add_edge_by_name(
        &mut self,
        a: &str,
        b: &str,
        weight: Weight,
    ) -> Result<EdgeId, GraphError> {
        let a = self.require(a)?;
        let b = self.require(b)?;
        self.add_edge(a, b, weight)
    }

    /// Looks up a node id by name.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Looks up a node id by name, failing with [`GraphError::UnknownNode`].
    ///
    /// # Errors
    /// [`GraphError::UnknownNode`] if the name is missing.
    pub fn require(&self, name: &str) -> Result<NodeId, GraphError> {
        self.node_id(name)
            .ok_or_else(|| GraphError::UnknownNode(name.to_owned()))
    }

    /// Returns `true` if `id` belongs to this graph.
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Returns the node behind `id`.
    ///
    /// # Panics
    /// Panics if `id` came from another graph and is out of bounds.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Returns the edge behind `id`.
    ///
    /// # Panics
    /// Panics if `id` came from another graph and is out of bounds.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    /// Name of a node.
    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    /// Edges touching `id`, in insertion order.
    pub fn incident_edges(&self, id: NodeId) -> &[EdgeId] {
        &self.nodes[id.0].incident
    }

    /// Iterates over `(id, node)` pairs in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Iterates over `(id, edge)` pairs in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Sum of every edge weight.
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|e| u64::from(e.weight)).sum()
    }

    /// Formats an edge as `A -> B (w)`.
    pub fn describe_edge(&self, id: EdgeId) -> String {
        let edge = self.edge(id);
        let [a, b] = edge.endpoints;
        format!("{} -> {} ({})", self.name(a), self.name(b), edge.weight)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} edges, total weight {}",
            self.node_count(),
            self.edge_count(),
            self.total_weight()
        )
    }
}
