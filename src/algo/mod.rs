/*!
# Algorithms

The analysis layer on top of [`EdgeStore`](crate::repr::EdgeStore):

- [`traversal`]: BFS/DFS producing a [`StateTable`] and (for DFS) a
  [`DfsEdgeTrace`],
- [`reports`]: analyses derived purely from a state table,
- [`mst`]: Prim's and Kruskal's minimum-spanning-tree construction.
*/

pub mod mst;
pub mod reports;
pub mod traversal;

pub use mst::MinimumSpanningTree;
pub use reports::EdgeKind;
pub use traversal::{Color, DfsEdgeTrace, StateTable, TableShape, Traversal};
