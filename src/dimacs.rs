//! Edge-list input and report output in the DIMACS shortest-path style.
//!
//! Arc lines start with the marker `a` followed by three integers
//! (`from to weight`); `c` (comment) and `p` (problem header) lines are
//! skipped, as is anything else.

use std::io::{BufRead, Write};
use std::str::FromStr;

use log::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Builds a graph from a line-oriented edge stream.
///
/// # Errors
/// * `InvalidInput` if an arc line is missing a field or carries a
///   malformed integer (negative weights are rejected here)
/// * `NodeOutOfRange` if an arc endpoint is outside `[0, capacity)`
/// * `Io` if the underlying reader fails
pub fn read_graph<R: BufRead>(reader: R, capacity: usize) -> Result<Graph> {
    let mut graph = Graph::with_capacity(capacity);
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let mut fields = line.split_whitespace();
        if fields.next() != Some("a") {
            continue;
        }
        let from = parse_field(fields.next(), lineno, "source node")?;
        let to = parse_field(fields.next(), lineno, "destination node")?;
        let weight = parse_field(fields.next(), lineno, "weight")?;
        graph.add_edge(from, to, weight)?;
    }
    debug!(
        "loaded {} edges into a graph of capacity {}",
        graph.edge_count(),
        graph.capacity()
    );
    Ok(graph)
}

fn parse_field<T: FromStr>(field: Option<&str>, lineno: usize, what: &str) -> Result<T> {
    let field = field
        .ok_or_else(|| Error::invalid_input(format!("line {}: missing {what}", lineno + 1)))?;
    field.parse().map_err(|_| {
        Error::invalid_input(format!("line {}: malformed {what} {field:?}", lineno + 1))
    })
}

/// Writes the per-node distance report, one line per node from 1 up to the
/// graph capacity, to any sink.
///
/// The caller invokes this once per destination (persisted file, live
/// display) to get identical output on both.
pub fn write_report<W: Write>(
    mut sink: W,
    source: usize,
    distances: &[Option<u64>],
) -> std::io::Result<()> {
    for (node, dist) in distances.iter().enumerate().skip(1) {
        match dist {
            Some(d) => writeln!(sink, "Node {source} to Node {node} : {d}")?,
            None => writeln!(sink, "Node {source} to Node {node} : Unreachable")?,
        }
    }
    Ok(())
}
