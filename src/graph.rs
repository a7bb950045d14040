use crate::error::{Error, Result};

/// An outgoing edge record; owned by the graph, immutable once inserted.
#[derive(Debug, Clone, Copy)]
struct Edge {
    to: usize,
    weight: u64,
}

/// A directed, weighted graph over integer node identifiers in a fixed
/// range `[0, capacity)`.
///
/// The adjacency structure is a capacity-configured arena: one owned,
/// growable edge list per node, built once from an edge stream and then
/// read-only. Nodes have no separate identity beyond their index.
///
/// # Examples
///
/// ```
/// use sssp::Graph;
///
/// let mut graph = Graph::with_capacity(4);
/// graph.add_edge(1, 2, 4).unwrap();
/// graph.add_edge(1, 3, 1).unwrap();
///
/// let neighbors: Vec<_> = graph.neighbors(1).unwrap().collect();
/// assert_eq!(neighbors, vec![(3, 1), (2, 4)]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    /// Creates an empty graph able to hold nodes `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            adjacency: vec![Vec::new(); capacity],
            edge_count: 0,
        }
    }

    /// The fixed node-id range of this graph.
    pub fn capacity(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges inserted so far.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Appends a directed edge `from -> to` with the given non-negative
    /// weight.
    ///
    /// # Errors
    /// * `NodeOutOfRange` if either endpoint is outside `[0, capacity)`
    pub fn add_edge(&mut self, from: usize, to: usize, weight: u64) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        self.adjacency[from].push(Edge { to, weight });
        self.edge_count += 1;
        Ok(())
    }

    /// Iterates over the outgoing `(to, weight)` pairs of `node` in
    /// reverse-insertion order.
    ///
    /// # Errors
    /// * `NodeOutOfRange` if `node` is outside `[0, capacity)`
    pub fn neighbors(&self, node: usize) -> Result<impl Iterator<Item = (usize, u64)> + '_> {
        self.check_node(node)?;
        Ok(self.adjacency[node]
            .iter()
            .rev()
            .map(|edge| (edge.to, edge.weight)))
    }

    fn check_node(&self, node: usize) -> Result<()> {
        if node >= self.capacity() {
            return Err(Error::NodeOutOfRange {
                node,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = Graph::with_capacity(5);
        assert_eq!(graph.capacity(), 5);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.neighbors(3).unwrap().count(), 0);
    }

    #[test]
    fn test_neighbors_reverse_insertion_order() {
        let mut graph = Graph::with_capacity(5);
        graph.add_edge(0, 1, 10).unwrap();
        graph.add_edge(0, 2, 20).unwrap();
        graph.add_edge(0, 3, 30).unwrap();

        let neighbors: Vec<_> = graph.neighbors(0).unwrap().collect();
        assert_eq!(neighbors, vec![(3, 30), (2, 20), (1, 10)]);
    }

    #[test]
    fn test_neighbors_restartable() {
        let mut graph = Graph::with_capacity(3);
        graph.add_edge(1, 2, 7).unwrap();

        let first: Vec<_> = graph.neighbors(1).unwrap().collect();
        let second: Vec<_> = graph.neighbors(1).unwrap().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_edges_kept_independently() {
        let mut graph = Graph::with_capacity(3);
        graph.add_edge(0, 1, 5).unwrap();
        graph.add_edge(0, 1, 3).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(0).unwrap().count(), 2);
    }

    #[test]
    fn test_add_edge_out_of_range() {
        let mut graph = Graph::with_capacity(3);
        assert!(matches!(
            graph.add_edge(0, 3, 1),
            Err(Error::NodeOutOfRange { node: 3, capacity: 3 })
        ));
        assert!(matches!(
            graph.add_edge(7, 0, 1),
            Err(Error::NodeOutOfRange { node: 7, .. })
        ));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_neighbors_out_of_range() {
        let graph = Graph::with_capacity(2);
        assert!(graph.neighbors(2).is_err());
    }
}
