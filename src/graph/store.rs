//! In-memory property graph storage.
//!
//! The [`Graph`] holds two associative structures: a node table mapping each
//! node identifier to its property map, and an adjacency table mapping each
//! node identifier to its outgoing edges (neighbor identifier -> edge
//! property map). The two tables always share the same key set; node and
//! adjacency entries are created and destroyed together.
//!
//! Error handling is deliberately asymmetric: edge *creation* is strict about
//! its preconditions (both endpoints must exist), while queries on absent
//! nodes or edges return empty results and removals of absent entries are
//! silent no-ops.

use super::property::PropertyMap;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node identifier must be a non-empty string")]
    InvalidNodeId,

    #[error("node '{0}' does not exist")]
    NodeNotFound(String),

    #[error("invalid edge: source node '{0}' does not exist")]
    InvalidEdgeSource(String),

    #[error("invalid edge: target node '{0}' does not exist")]
    InvalidEdgeTarget(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory directed property graph.
///
/// Both tables use `IndexMap`, so nodes and neighbors iterate in insertion
/// order. Traversal over a node's current neighbor set is therefore
/// deterministic for a given mutation history.
///
/// The graph defines no internal synchronization; callers sharing one across
/// threads must serialize access externally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// Node identifier -> node properties
    nodes: IndexMap<String, PropertyMap>,

    /// Node identifier -> (neighbor identifier -> edge properties)
    edges: IndexMap<String, IndexMap<String, PropertyMap>>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Graph {
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    /// Validate that an identifier is well formed and names an existing node.
    ///
    /// This is an explicit precondition check for callers that need to assert
    /// existence before acting; mutating operations do not invoke it
    /// internally.
    pub fn validate_node_id(&self, id: &str) -> GraphResult<()> {
        if id.is_empty() {
            return Err(GraphError::InvalidNodeId);
        }
        if !self.nodes.contains_key(id) {
            return Err(GraphError::NodeNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Add a node, or merge properties into an existing one.
    ///
    /// If the node does not exist it is created with the given properties and
    /// an empty adjacency entry. If it exists, the given properties are
    /// merged into its property map, last write wins per key; no existing
    /// property is removed implicitly.
    pub fn add_node(&mut self, id: impl Into<String>, properties: PropertyMap) -> GraphResult<()> {
        let id = id.into();
        if id.is_empty() {
            return Err(GraphError::InvalidNodeId);
        }
        match self.nodes.get_mut(&id) {
            Some(existing) => {
                debug!("Merged {} properties into node {}", properties.len(), id);
                existing.extend(properties);
            }
            None => {
                debug!("Added node {}", id);
                self.edges.insert(id.clone(), IndexMap::new());
                self.nodes.insert(id, properties);
            }
        }
        Ok(())
    }

    /// Add a directed edge `(from, to)`, overwriting any prior entry.
    ///
    /// Both endpoints must already exist; the check happens before any
    /// mutation, so a failed call leaves the adjacency table untouched. With
    /// `bidirectional` set, an independent copy of the properties is stored
    /// under `(to, from)` as well. The two directions are separate entries
    /// from then on; later mutation of one never propagates to the other.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        bidirectional: bool,
        properties: PropertyMap,
    ) -> GraphResult<()> {
        if !self.nodes.contains_key(from) {
            return Err(GraphError::InvalidEdgeSource(from.to_string()));
        }
        if !self.nodes.contains_key(to) {
            return Err(GraphError::InvalidEdgeTarget(to.to_string()));
        }

        let reverse = bidirectional.then(|| properties.clone());
        self.edges[from].insert(to.to_string(), properties);
        if let Some(props) = reverse {
            self.edges[to].insert(from.to_string(), props);
        }
        debug!("Added edge {} -> {} (bidirectional: {})", from, to, bidirectional);
        Ok(())
    }

    /// Remove a node and every edge referencing it.
    ///
    /// Silent no-op if the node does not exist. Otherwise removes all
    /// incoming adjacency entries naming the node, its own outgoing
    /// adjacency entry, and the node-table entry.
    pub fn remove_node(&mut self, id: &str) {
        if self.nodes.shift_remove(id).is_none() {
            return;
        }
        self.edges.shift_remove(id);
        for adjacency in self.edges.values_mut() {
            adjacency.shift_remove(id);
        }
        debug!("Removed node {}", id);
    }

    /// Remove the edge `(from, to)` if present; silent no-op otherwise.
    ///
    /// Only the named direction is removed. A reverse edge created through a
    /// bidirectional add is an independent entry and stays in place.
    pub fn remove_edge(&mut self, from: &str, to: &str) {
        if let Some(adjacency) = self.edges.get_mut(from) {
            if adjacency.shift_remove(to).is_some() {
                debug!("Removed edge {} -> {}", from, to);
            }
        }
    }

    /// Outgoing neighbor identifiers of a node, in insertion order.
    ///
    /// Returns an empty set if the node has no adjacency entry.
    pub fn get_neighbors(&self, id: &str) -> IndexSet<String> {
        self.edges
            .get(id)
            .map(|adjacency| adjacency.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Properties of a node, or an empty map if the node does not exist.
    ///
    /// Returns a copy; mutating it never affects the stored graph.
    pub fn get_node_properties(&self, id: &str) -> PropertyMap {
        self.nodes.get(id).cloned().unwrap_or_default()
    }

    /// Properties of the edge `(from, to)`, or an empty map if absent.
    ///
    /// Returns a copy; mutating it never affects the stored graph.
    pub fn get_edge_properties(&self, from: &str, to: &str) -> PropertyMap {
        self.edges
            .get(from)
            .and_then(|adjacency| adjacency.get(to))
            .cloned()
            .unwrap_or_default()
    }

    /// Check if a node exists
    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Check if the directed edge `(from, to)` exists
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges
            .get(from)
            .is_some_and(|adjacency| adjacency.contains_key(to))
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(IndexMap::len).sum()
    }

    /// All node identifiers, in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Clear all data from the graph
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
