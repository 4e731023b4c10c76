//! Workspace graph model.
//!
//! # Responsibility
//! - Hold the positioned node boxes and the links between them.
//! - Funnel every body mutation through one entry point.
//!
//! # Invariants
//! - Node identifiers are unique; wholesale replacement re-validates.
//! - Node order is insertion/load order and carries no semantics beyond
//!   deterministic rendering.
//! - Links may dangle: a link whose endpoint is missing stays in the
//!   model and is skipped by consumers at lookup time.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable node identifier, unique within one project graph.
pub type NodeId = String;

/// Default box width applied when a stored document omits it.
pub const DEFAULT_NODE_WIDTH: f64 = 220.0;
/// Default box height applied when a stored document omits it.
pub const DEFAULT_NODE_HEIGHT: f64 = 100.0;

/// Visual style tag for a node box.
///
/// Currently projected only into a style class on the rendered group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStyle {
    #[default]
    Plain,
    Accent,
    Muted,
}

/// One positioned, titled, editable box in a project graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Stable identifier, unique within the graph and across saves.
    pub id: NodeId,
    /// Horizontal position, top-left origin, pixel-equivalent units.
    pub x: f64,
    /// Vertical position, top-left origin.
    pub y: f64,
    #[serde(default = "default_node_width")]
    pub width: f64,
    #[serde(default = "default_node_height")]
    pub height: f64,
    /// Box caption. Immutable after creation in the current scope.
    pub title: String,
    /// User-editable body text.
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub style: NodeStyle,
}

impl Node {
    /// Creates a node at the given position with default box size.
    pub fn new(id: impl Into<NodeId>, title: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width: DEFAULT_NODE_WIDTH,
            height: DEFAULT_NODE_HEIGHT,
            title: title.into(),
            body: String::new(),
            style: NodeStyle::default(),
        }
    }
}

/// Directed reference between two node identifiers.
///
/// Rendered as an undirected connector. Duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub from: NodeId,
    pub to: NodeId,
}

impl Link {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Graph construction/replacement errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Two nodes share one identifier.
    DuplicateNodeId(NodeId),
}

impl Display for GraphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateNodeId(id) => write!(f, "duplicate node id: `{id}`"),
        }
    }
}

impl Error for GraphError {}

/// The node/link graph belonging to one project.
///
/// Callers never hold `&mut Node` across the model boundary; the rendered
/// surface carries node identifiers only and routes mutations through
/// [`GraphModel::update_node_body`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphModel {
    nodes: Vec<Node>,
    links: Vec<Link>,
}

impl GraphModel {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from node/link sequences, validating id uniqueness.
    pub fn from_parts(nodes: Vec<Node>, links: Vec<Link>) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        graph.replace_all(nodes, links)?;
        Ok(graph)
    }

    /// Wholesale replacement used on load.
    ///
    /// The existing content is kept untouched when validation fails.
    pub fn replace_all(&mut self, nodes: Vec<Node>, links: Vec<Link>) -> Result<(), GraphError> {
        if let Some(id) = first_duplicate_id(&nodes) {
            return Err(GraphError::DuplicateNodeId(id));
        }
        self.nodes = nodes;
        self.links = links;
        Ok(())
    }

    /// Nodes in insertion/load order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Links in load order, dangling ones included.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Linear scan returning the first node with the given identifier.
    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Sets one node's body text.
    ///
    /// The single mutation entry point for committed edits. Returns
    /// `false` when the identifier does not resolve (stale surface tag),
    /// leaving the model untouched.
    pub fn update_node_body(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.nodes.iter_mut().find(|node| node.id == id) {
            Some(node) => {
                node.body = text.into();
                true
            }
            None => false,
        }
    }

    /// Fixed two-node, one-link fallback graph for offline/demo sessions.
    pub fn placeholder_seed() -> Self {
        let mut first = Node::new("n1", "Welcome", 120.0, 96.0);
        first.body = "This board is offline. Edits stay local.".to_string();
        first.style = NodeStyle::Accent;
        let second = Node::new("n2", "First idea", 440.0, 280.0);

        Self {
            nodes: vec![first, second],
            links: vec![Link::new("n1", "n2")],
        }
    }
}

fn first_duplicate_id(nodes: &[Node]) -> Option<NodeId> {
    let mut seen = std::collections::HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !seen.insert(node.id.as_str()) {
            return Some(node.id.clone());
        }
    }
    None
}

fn default_node_width() -> f64 {
    DEFAULT_NODE_WIDTH
}

fn default_node_height() -> f64 {
    DEFAULT_NODE_HEIGHT
}
