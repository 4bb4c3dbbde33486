//! Graph algorithms operating on the in-memory store.
//!
//! Algorithms are free functions over a borrowed [`Graph`](crate::graph::Graph);
//! they are pure queries with no side effects on graph state.

mod pathfinding;

pub use pathfinding::{all_paths, shortest_path};
