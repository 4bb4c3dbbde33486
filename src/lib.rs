//! In-memory directed property graph with exhaustive path discovery.
//!
//! Nodes are identified by unique string keys and carry open-ended property
//! maps; edges are directed relations with their own properties, optionally
//! created in both directions at once. The path-discovery layer enumerates
//! every simple path between two nodes and derives the hop-count shortest
//! path from the enumeration.
//!
//! # Example
//!
//! ```rust
//! use pathgraph::{Graph, PropertyMap, all_paths, shortest_path};
//!
//! let mut graph = Graph::new();
//! for id in ["alice", "bob", "carol"] {
//!     graph.add_node(id, PropertyMap::new()).unwrap();
//! }
//! graph.add_edge("alice", "bob", false, PropertyMap::new()).unwrap();
//! graph.add_edge("bob", "carol", false, PropertyMap::new()).unwrap();
//! graph.add_edge("alice", "carol", false, PropertyMap::new()).unwrap();
//!
//! assert_eq!(all_paths(&graph, "alice", "carol").len(), 2);
//! assert_eq!(
//!     shortest_path(&graph, "alice", "carol"),
//!     vec!["alice", "carol"]
//! );
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use algo::{all_paths, shortest_path};
pub use graph::{Graph, GraphError, GraphResult, PropertyMap, PropertyValue};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
