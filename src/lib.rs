//! Single-source shortest paths over sparse directed graphs.
//!
//! The crate is three small, strictly layered pieces: a capacity-configured
//! adjacency [`Graph`], an [`IndexedMinHeap`] supporting decrease-key
//! through a node-to-slot position index, and a Dijkstra engine
//! ([`shortest_paths`]) on top of both. The [`dimacs`] module handles the
//! DIMACS-style edge-list input and the per-node distance report.

pub mod dijkstra;
pub mod dimacs;
pub mod error;
pub mod graph;
pub mod heap;

pub use dijkstra::shortest_paths;
pub use error::{Error, Result};
pub use graph::Graph;
pub use heap::IndexedMinHeap;
