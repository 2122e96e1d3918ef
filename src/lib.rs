/*!
`wgraphs` is a small library for **w**eighted graphs with
- nodes numbered `0` to `n - 1` (represented as `u32`),
- non-negative integer edge weights,
- undirected edges by default (enable the `directed` feature to keep
  inserted edges one-directional).

# Representation

Edge storage is abstracted behind the [`EdgeStore`](crate::repr::EdgeStore)
trait with two interchangeable implementations:

- [`DenseStore`](crate::repr::DenseStore): an adjacency matrix. Edge lookups
  are O(1), neighbor iteration is O(n), and re-inserting an existing edge is
  a no-op.
- [`SparseStore`](crate::repr::SparseStore): per-node adjacency lists in
  insertion order. Lookups scan the list and report the first match;
  inserting never dedupes, so parallel edges accumulate.

All algorithms depend only on the trait, so they run unchanged on either
backend.

# Algorithms

The [`algo`] module provides the analysis layer:
- [`Traversal`](crate::algo::Traversal): BFS and DFS as methods on any edge
  store, producing a [`StateTable`](crate::algo::StateTable) of per-node
  colors, distances, predecessors and discovery/finish times, plus a
  [`DfsEdgeTrace`](crate::algo::DfsEdgeTrace) of every edge DFS walked over.
- Report operations on the state table: shortest-path reconstruction,
  most-distant node set, connectivity, topological order, parenthesization,
  and DFS edge classification.
- [`MinimumSpanningTree`](crate::algo::MinimumSpanningTree): Prim's and
  Kruskal's algorithms, the latter backed by
  [`DisjointSetUnion`](crate::dsu::DisjointSetUnion).

# Usage

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices:

```
use wgraphs::{prelude::*, algo::*};

let mut g = SparseStore::new(4);
g.insert_edge(0, 1, 1).unwrap();
g.insert_edge(1, 2, 2).unwrap();
g.insert_edge(2, 3, 3).unwrap();
g.insert_edge(0, 3, 10).unwrap();

let table = g.bfs(0).unwrap();
assert_eq!(table.path(0, 2).unwrap(), Some(vec![0, 1, 2]));

let mst = g.mst_prim().unwrap();
assert_eq!(mst.total_weight(), 6);
```
*/

pub mod algo;
pub mod dsu;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod repr;

/// `wgraphs::prelude` includes definitions for nodes, edges, errors, the
/// storage traits as well as both implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, repr::*};
}

pub use edge::{Edge, NumEdges, Weight, WeightedEdge, NO_WEIGHT};
pub use error::{GraphError, Result};
pub use node::{Node, NumNodes, INVALID_NODE};
