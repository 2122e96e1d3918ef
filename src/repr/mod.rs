/*!
# Representation

Weighted edge storage backends. Both implement the [`EdgeStore`] contract and
are interchangeable for every algorithm in the crate:

- [`DenseStore`]: an `n × n` adjacency matrix with `-1` marking absent edges.
- [`SparseStore`]: per-node adjacency lists in insertion order.

Edges are **undirected** by default: inserting `(u, v)` also records `(v, u)`.
Enabling the `directed` cargo feature disables the mirrored insert crate-wide.

The two backends deliberately differ in their handling of repeated inserts:
the dense store ignores an insert between an already-connected pair, while the
sparse store appends a second entry (a parallel edge) and keeps reporting the
first one in lookups. See the crate docs for the rationale.
*/

use std::ops::Range;

use crate::{edge::*, error::*, node::*};

mod dense;
mod sparse;

pub use dense::*;
pub use sparse::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a range over V. The range does not borrow self and hence may
    /// be used where additional mutable references of self are needed.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns `Ok(())` exactly if `u` is a valid node of the graph
    fn check_node(&self, u: Node) -> Result<()> {
        if u < self.number_of_nodes() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                node: u,
                num_nodes: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    ///
    /// For the sparse store this counts *insert calls*, i.e. parallel edges
    /// are counted individually.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// The storage contract every backend satisfies.
///
/// The three checked operations (`is_edge`, `weight_of`, `insert_edge`)
/// validate their node arguments and fail with
/// [`GraphError::InvalidVertex`]; the iterator getters follow the usual
/// convention of panicking on out-of-range nodes instead.
pub trait EdgeStore: GraphNodeOrder + GraphEdgeOrder {
    /// Returns *true* if the edge `(u, v)` exists in the graph
    fn is_edge(&self, u: Node, v: Node) -> Result<bool>;

    /// Returns the weight of the edge `(u, v)`, or [`NO_WEIGHT`] if no such
    /// edge exists (a sentinel, not an error)
    fn weight_of(&self, u: Node, v: Node) -> Result<Weight>;

    /// Inserts the edge `(u, v)` with weight `w >= 0`; mirrored to `(v, u)`
    /// unless the `directed` feature is enabled.
    ///
    /// Fails with [`GraphError::InvalidWeight`] on a negative weight.
    fn insert_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<()>;

    /// Returns an iterator over the (outgoing) neighbors of a given node
    /// with their edge weights, in storage order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns the number of (outgoing) neighbor entries of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns an iterator over all stored `(u, v, w)` entries, row-major by
    /// `u` and in storage order within each row
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices()
            .flat_map(move |u| self.neighbors_of(u).map(move |(v, w)| WeightedEdge(u, v, w)))
    }

    /// Inserts all edges in the collection
    fn insert_edges(
        &mut self,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Result<()> {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.insert_edge(u, v, w)?;
        }
        Ok(())
    }

    /// Sums the weights of all stored edges. In undirected mode only the
    /// normalized entries (`u <= v`) contribute, so each mirrored pair is
    /// counted once.
    fn total_weight(&self) -> Weight {
        self.weighted_edges()
            .filter(|e| cfg!(feature = "directed") || e.is_normalized())
            .map(|e| e.weight())
            .sum()
    }
}

/// A super trait for creating a graph from scratch from a set of weighted
/// edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Creates a graph from a number of nodes and an iterator over edges
    fn from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Result<Self>;
}

impl<G: GraphNew + EdgeStore> GraphFromScratch for G {
    fn from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Result<Self> {
        let mut graph = Self::new(n);
        graph.insert_edges(edges)?;
        Ok(graph)
    }
}
