//! # EdgeList
//!
//! The EdgeList-Format consists of a header line `n m`, followed by
//! non-comment-lines `u v w` representing an edge between the zero-based
//! nodes `u` and `v` with weight `w`, until end-of-input.

use std::{
    fs::File,
    io::{BufRead, BufWriter, ErrorKind, Lines, Write},
    path::Path,
};

use super::*;
use crate::{
    edge::{NumEdges, Weight, WeightedEdge, NO_WEIGHT},
    node::{Node, NumNodes},
    repr::{EdgeStore, GraphEdgeOrder, GraphFromScratch, GraphNodeOrder},
};

/// Returns the next line that is neither a comment nor blank, if any
fn next_data_line<R: BufRead>(
    lines: &mut Lines<R>,
    comment_identifier: &str,
) -> Result<Option<String>> {
    loop {
        match lines.next() {
            None => return Ok(None),
            Some(Err(x)) => return Err(x),
            Some(Ok(line)) if line.starts_with(comment_identifier) => continue,
            Some(Ok(line)) if line.trim().is_empty() => continue,
            Some(Ok(line)) => return Ok(Some(line)),
        }
    }
}

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut lines = reader.lines();

        let header = next_data_line(&mut lines, &self.comment_identifier)?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;
        let mut parts = header.split_whitespace();
        let n: NumNodes = parse_next_value!(parts, "Number of nodes");
        let m: NumEdges = parse_next_value!(parts, "Number of edges");

        let mut edges: Vec<WeightedEdge> = Vec::with_capacity(m as usize);
        while let Some(line) = next_data_line(&mut lines, &self.comment_identifier)? {
            let mut parts = line.split_whitespace();

            let from: Node = parse_next_value!(parts, "Source node");
            let dest: Node = parse_next_value!(parts, "Target node");
            let weight: Weight = parse_next_value!(parts, "Edge weight");

            edges.push(WeightedEdge(from, dest, weight));
        }

        // out-of-range nodes and negative weights surface here
        G::from_edges(n, edges).map_err(|e| io_error!(ErrorKind::InvalidData, e.to_string()))
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// A writer for the EdgeList-Format.
///
/// Emits every `(i, j, w)` for which an edge exists, row-major by `i` then
/// `j`, so undirected graphs produce both orientations of each edge and
/// parallel sparse entries collapse to their first-match weight.
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G: EdgeStore> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(
            writer,
            "{} {}",
            graph.number_of_nodes(),
            graph.number_of_edges()
        )?;

        for i in graph.vertices() {
            for j in graph.vertices() {
                let w = graph
                    .weight_of(i, j)
                    .map_err(|e| io_error!(ErrorKind::InvalidData, e.to_string()))?;
                if w != NO_WEIGHT {
                    writeln!(writer, "{i} {j} {w}")?;
                }
            }
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: EdgeStore> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}
