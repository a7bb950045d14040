use log::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::heap::IndexedMinHeap;

const INF: u64 = u64::MAX;

/// Computes single-source shortest-path distances over a directed graph
/// with non-negative edge weights.
///
/// Returns one entry per node in `[0, capacity)`: `Some(distance)` for
/// nodes reachable from `source`, `None` for unreachable nodes.
///
/// # Arguments
/// * `graph` - The directed graph to search
/// * `source` - The start node; distances are measured from here
///
/// # Returns
/// * `Ok(Vec<Option<u64>>)` - Per-node minimum path weight from `source`
/// * `Err(Error)` - If `source` is outside the graph's node range
///
/// # Examples
/// ```
/// use sssp::{shortest_paths, Graph};
///
/// let mut graph = Graph::with_capacity(4);
/// graph.add_edge(1, 2, 4).unwrap();
/// graph.add_edge(1, 3, 1).unwrap();
/// graph.add_edge(3, 2, 1).unwrap();
///
/// let dist = shortest_paths(&graph, 1).unwrap();
/// assert_eq!(dist[2], Some(2)); // via node 3
/// assert_eq!(dist[3], Some(1));
/// assert_eq!(dist[0], None);
/// ```
///
/// # Complexity
/// * Time: O((V + E) log V) where V is the number of nodes and E is the number of edges
/// * Space: O(V)
pub fn shortest_paths(graph: &Graph, source: usize) -> Result<Vec<Option<u64>>> {
    let capacity = graph.capacity();
    if source >= capacity {
        return Err(Error::NodeOutOfRange {
            node: source,
            capacity,
        });
    }

    let mut dist = vec![INF; capacity];
    let mut visited = vec![false; capacity];
    let mut heap = IndexedMinHeap::with_capacity(capacity);

    dist[source] = 0;
    heap.push(source, &dist);

    let mut finalized = 0usize;
    while let Some(u) = heap.pop_min(&dist) {
        // Guard against residual inconsistency; a node is finalized at
        // most once.
        if visited[u] {
            continue;
        }
        visited[u] = true;
        finalized += 1;

        for (v, weight) in graph.neighbors(u)? {
            let candidate = dist[u].saturating_add(weight);
            if candidate < dist[v] {
                dist[v] = candidate;
                if heap.contains(v) {
                    heap.decrease_key(v, &dist);
                } else {
                    heap.push(v, &dist);
                }
            }
        }
    }

    debug!("finalized {finalized} of {capacity} nodes from source {source}");

    Ok(dist
        .into_iter()
        .map(|d| if d == INF { None } else { Some(d) })
        .collect())
}
