//! Path discovery between two nodes.
//!
//! [`all_paths`] exhaustively enumerates every simple path (no repeated
//! node) between two identifiers by depth-first exploration;
//! [`shortest_path`] derives the hop-count minimum from that enumeration.
//! Edge properties are never consulted, so a "weight" property has no
//! effect here.
//!
//! The enumeration is correctness-first: on densely connected graphs the
//! number of simple paths is exponential, and callers needing bounds must
//! impose them externally.

use crate::graph::Graph;

/// Enumerate every simple path from `start` to `end`.
///
/// Each path is an ordered sequence of node identifiers beginning with
/// `start` and ending with `end`. A node never repeats within one path,
/// which also bounds recursion depth by the node count. Paths are produced
/// in depth-first order; neighbors are explored in adjacency insertion
/// order.
///
/// `start == end` yields the single-element path `[start]`. A `start` with
/// no outgoing edges (or one missing from the graph) yields no paths.
pub fn all_paths(graph: &Graph, start: &str, end: &str) -> Vec<Vec<String>> {
    let mut paths = Vec::new();
    extend_path(graph, start, end, Vec::new(), &mut paths);
    paths
}

/// Recursive step: extend `path` with `current`, then branch to unvisited
/// neighbors. Each branch gets its own copy of the path so far; siblings
/// never share a buffer.
fn extend_path(
    graph: &Graph,
    current: &str,
    end: &str,
    mut path: Vec<String>,
    paths: &mut Vec<Vec<String>>,
) {
    path.push(current.to_string());
    if current == end {
        paths.push(path);
        return;
    }
    for neighbor in graph.get_neighbors(current) {
        if !path.iter().any(|visited| *visited == neighbor) {
            extend_path(graph, &neighbor, end, path.clone(), paths);
        }
    }
}

/// Shortest path from `start` to `end` by hop count.
///
/// Computed over [`all_paths`]; returns an empty sequence when no path
/// exists. Ties among minimum-length paths are broken deterministically in
/// favor of the lexicographically smallest path.
pub fn shortest_path(graph: &Graph, start: &str, end: &str) -> Vec<String> {
    all_paths(graph, start, end)
        .into_iter()
        .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
        .unwrap_or_default()
}
