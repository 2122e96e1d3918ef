/*!
Minimum-spanning-tree construction.

Both algorithms return a freshly built store of the same node count holding
only the tree edges; the input is never modified. On a disconnected input
Prim covers only the component of node 0 while Kruskal produces a spanning
forest, so neither treats disconnectedness as an error.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use fxhash::FxHashSet;

use crate::{
    dsu::DisjointSetUnion,
    edge::{Weight, WeightedEdge},
    error::Result,
    node::Node,
    repr::{EdgeStore, GraphNew, GraphNodeOrder},
};

/// Inserts a tree edge into the result store. Undirected stores mirror the
/// insert themselves; under the `directed` feature both orientations are
/// written explicitly so the tree stays usable as an undirected graph.
fn insert_tree_edge<G: EdgeStore>(tree: &mut G, u: Node, v: Node, w: Weight) -> Result<()> {
    tree.insert_edge(u, v, w)?;

    #[cfg(feature = "directed")]
    tree.insert_edge(v, u, w)?;

    Ok(())
}

/// Provides MST construction directly as methods on edge stores
pub trait MinimumSpanningTree: EdgeStore + GraphNew + Sized {
    /// Builds a minimum spanning tree with Prim's algorithm, grown from
    /// node 0.
    ///
    /// A min-heap holds the candidate edges leaving the tree; the lightest
    /// one whose target is still outside is adopted. Ties are broken by the
    /// smaller source, then target id, so the result is deterministic.
    ///
    /// On a disconnected graph only the component of node 0 is spanned.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = SparseStore::from_edges(
    ///     4,
    ///     [(0, 1, 1 as Weight), (1, 2, 2), (2, 3, 3), (0, 3, 10)],
    /// )
    /// .unwrap();
    ///
    /// let tree = g.mst_prim().unwrap();
    /// assert_eq!(tree.total_weight(), 6);
    /// assert!(!tree.is_edge(0, 3).unwrap());
    /// ```
    fn mst_prim(&self) -> Result<Self> {
        let mut tree = Self::new(self.number_of_nodes());
        if self.is_empty() {
            return Ok(tree);
        }

        let mut in_tree = vec![false; self.len()];
        let mut heap: BinaryHeap<Reverse<(Weight, Node, Node)>> = BinaryHeap::new();

        in_tree[0] = true;
        for (v, w) in self.neighbors_of(0) {
            heap.push(Reverse((w, 0, v)));
        }

        while let Some(Reverse((w, u, v))) = heap.pop() {
            if in_tree[v as usize] {
                continue;
            }

            insert_tree_edge(&mut tree, u, v, w)?;
            in_tree[v as usize] = true;

            for (x, wx) in self.neighbors_of(v) {
                if !in_tree[x as usize] {
                    heap.push(Reverse((wx, v, x)));
                }
            }
        }

        Ok(tree)
    }

    /// Builds a minimum spanning forest with Kruskal's algorithm.
    ///
    /// The distinct undirected edges (first stored entry per endpoint pair,
    /// matching the lookup convention) are sorted by ascending weight and
    /// adopted whenever their endpoints lie in different sets of a
    /// [`DisjointSetUnion`].
    fn mst_kruskal(&self) -> Result<Self> {
        let mut tree = Self::new(self.number_of_nodes());

        let mut seen = FxHashSet::default();
        let mut edges: Vec<WeightedEdge> = self
            .weighted_edges()
            .map(|e| e.normalized())
            .filter(|e| seen.insert(e.edge()))
            .collect();
        edges.sort_by_key(|e| e.weight());

        let mut dsu = DisjointSetUnion::new(self.len());
        for WeightedEdge(u, v, w) in edges {
            if !dsu.same_set(u as usize, v as usize)? {
                dsu.union(u as usize, v as usize)?;
                insert_tree_edge(&mut tree, u, v, w)?;
            }
        }

        Ok(tree)
    }
}

impl<G: EdgeStore + GraphNew + Sized> MinimumSpanningTree for G {}
