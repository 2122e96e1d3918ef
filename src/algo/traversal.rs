/*!
Graph traversal algorithms and their per-node state.

Both searches produce a [`StateTable`] holding one entry per node. The table
is an owned value: each run builds a fresh one, the report operations in
[`reports`](crate::algo::reports) consume it read-only, and a graph mutated
afterwards simply requires a new run. A [`TableShape`] tag records which
search populated the table so that reports can reject a table of the wrong
provenance.

DFS additionally records a [`DfsEdgeTrace`]: every edge it walked over, in
visitation order, including edges whose target was already visited. The trace
is the input to DFS edge classification.
*/

use std::collections::VecDeque;

use crate::{
    edge::Edge,
    error::Result,
    node::{Node, NumNodes, INVALID_NODE},
    repr::{EdgeStore, GraphNodeOrder},
};

/// Visit state of a node during (and after) a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Not yet discovered
    Unvisited,
    /// Discovered, neighbors not yet exhausted (on the frontier / open)
    InProgress,
    /// Fully processed
    Done,
}

/// Which search populated a [`StateTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableShape {
    /// Populated by [`Traversal::bfs`]: colors, distances, predecessors
    Bfs,
    /// Populated by [`Traversal::dfs`]: colors, predecessors,
    /// discovery/finish times
    Dfs,
}

/// Per-node state produced by one traversal run.
///
/// Sentinels: `INVALID_NODE` stands for "unreached" in `dist` and for
/// "no predecessor" in `pred`; the accessors translate both to `None`.
#[derive(Debug, Clone)]
pub struct StateTable {
    pub(crate) shape: TableShape,
    pub(crate) color: Vec<Color>,
    /// BFS only: hop-count from the source
    pub(crate) dist: Vec<NumNodes>,
    pub(crate) pred: Vec<Node>,
    /// DFS only: discovery timestamps (clock starts at 1)
    pub(crate) disc: Vec<NumNodes>,
    /// DFS only: finish timestamps
    pub(crate) finish: Vec<NumNodes>,
}

impl GraphNodeOrder for StateTable {
    fn number_of_nodes(&self) -> NumNodes {
        self.color.len() as NumNodes
    }
}

impl StateTable {
    fn new(shape: TableShape, n: NumNodes) -> Self {
        let n = n as usize;
        let (dist, disc, finish) = match shape {
            TableShape::Bfs => (vec![INVALID_NODE; n], Vec::new(), Vec::new()),
            TableShape::Dfs => (Vec::new(), vec![0; n], vec![0; n]),
        };
        Self {
            shape,
            color: vec![Color::Unvisited; n],
            dist,
            pred: vec![INVALID_NODE; n],
            disc,
            finish,
        }
    }

    /// Returns the shape tag of the table
    pub fn shape(&self) -> TableShape {
        self.shape
    }

    /// Returns the color of a node after the run.
    /// ** Panics if `u >= n` **
    pub fn color_of(&self, u: Node) -> Color {
        self.color[u as usize]
    }

    /// Returns the hop-count from the BFS source, or `None` for unreached
    /// nodes.
    /// ** Panics if `u >= n` or the table is DFS-shaped **
    pub fn dist_of(&self, u: Node) -> Option<NumNodes> {
        let d = self.dist[u as usize];
        (d != INVALID_NODE).then_some(d)
    }

    /// Returns the predecessor of a node in the traversal tree, if any.
    /// ** Panics if `u >= n` **
    pub fn pred_of(&self, u: Node) -> Option<Node> {
        let p = self.pred[u as usize];
        (p != INVALID_NODE).then_some(p)
    }

    /// Returns the DFS discovery time of a node.
    /// ** Panics if `u >= n` or the table is BFS-shaped **
    pub fn discovery_of(&self, u: Node) -> NumNodes {
        self.disc[u as usize]
    }

    /// Returns the DFS finish time of a node.
    /// ** Panics if `u >= n` or the table is BFS-shaped **
    pub fn finish_of(&self, u: Node) -> NumNodes {
        self.finish[u as usize]
    }
}

/// Every edge a DFS run walked over, in visitation order.
///
/// An edge `(u, v)` is recorded when the search scans `v` in `u`'s
/// neighborhood, whether or not `v` was already visited, so the trace covers
/// all traversed edges, not only tree edges.
#[derive(Debug, Clone, Default)]
pub struct DfsEdgeTrace {
    pub(crate) edges: Vec<Edge>,
}

impl DfsEdgeTrace {
    /// Returns the recorded edges in visitation order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of recorded edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns *true* if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Provides the traversal algorithms directly as methods on edge stores
pub trait Traversal: EdgeStore + Sized {
    /// Runs a breadth-first search from `source` and returns the resulting
    /// [`TableShape::Bfs`] state table.
    ///
    /// Nodes are settled in non-decreasing hop-count order; `dist` holds the
    /// shortest hop-count from the source, `pred` the tree along which it
    /// was reached. O(V²) on [`DenseStore`](crate::repr::DenseStore),
    /// O(V + E) on [`SparseStore`](crate::repr::SparseStore).
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = SparseStore::from_edges(3, [(0, 1, 4 as Weight), (1, 2, 1)]).unwrap();
    /// let table = g.bfs(0).unwrap();
    ///
    /// assert_eq!(table.dist_of(0), Some(0));
    /// assert_eq!(table.dist_of(2), Some(2));
    /// assert_eq!(table.pred_of(2), Some(1));
    /// ```
    fn bfs(&self, source: Node) -> Result<StateTable> {
        self.check_node(source)?;

        let mut table = StateTable::new(TableShape::Bfs, self.number_of_nodes());
        table.color[source as usize] = Color::InProgress;
        table.dist[source as usize] = 0;

        let mut queue = VecDeque::from(vec![source]);
        while let Some(u) = queue.pop_front() {
            for (v, _) in self.neighbors_of(u) {
                if table.color[v as usize] == Color::Unvisited {
                    table.color[v as usize] = Color::InProgress;
                    table.dist[v as usize] = table.dist[u as usize] + 1;
                    table.pred[v as usize] = u;
                    queue.push_back(v);
                }
            }
            table.color[u as usize] = Color::Done;
        }

        Ok(table)
    }

    /// Runs a depth-first search over **all** nodes and returns the
    /// resulting [`TableShape::Dfs`] state table together with the edge
    /// trace.
    ///
    /// Node ids are scanned ascending and a new search tree is rooted at
    /// every still-unvisited node, so disconnected graphs end up fully
    /// colored (one root per component). A shared clock increments once on
    /// every discovery and once on every finish.
    ///
    /// The search runs on an explicit stack with discovery/finish order
    /// identical to the recursive formulation, so deep graphs cannot
    /// overflow the call stack.
    fn dfs(&self) -> (StateTable, DfsEdgeTrace) {
        let mut table = StateTable::new(TableShape::Dfs, self.number_of_nodes());
        let mut trace = DfsEdgeTrace::default();
        let mut clock: NumNodes = 0;

        // stack frames: (node, materialized neighbors, scan cursor)
        let mut stack: Vec<(Node, Vec<Node>, usize)> = Vec::new();

        for root in self.vertices() {
            if table.color[root as usize] != Color::Unvisited {
                continue;
            }

            clock += 1;
            table.disc[root as usize] = clock;
            table.color[root as usize] = Color::InProgress;
            stack.push((root, self.neighbors_of(root).map(|(v, _)| v).collect(), 0));

            while let Some(top) = stack.last_mut() {
                let u = top.0;
                if let Some(&v) = top.1.get(top.2) {
                    top.2 += 1;
                    trace.edges.push(Edge(u, v));

                    if table.color[v as usize] == Color::Unvisited {
                        table.pred[v as usize] = u;
                        clock += 1;
                        table.disc[v as usize] = clock;
                        table.color[v as usize] = Color::InProgress;
                        stack.push((v, self.neighbors_of(v).map(|(x, _)| x).collect(), 0));
                    }
                } else {
                    clock += 1;
                    table.finish[u as usize] = clock;
                    table.color[u as usize] = Color::Done;
                    stack.pop();
                }
            }
        }

        (table, trace)
    }
}

impl<G: EdgeStore + Sized> Traversal for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn path_graph(n: NumNodes) -> SparseStore {
        SparseStore::from_edges(n, (1..n).map(|v| (v - 1, v, 1 as Weight))).unwrap()
    }

    #[test]
    fn bfs_source_state() {
        let g = path_graph(4);
        let table = g.bfs(2).unwrap();

        assert_eq!(table.shape(), TableShape::Bfs);
        assert_eq!(table.dist_of(2), Some(0));
        assert_eq!(table.pred_of(2), None);
    }

    #[test]
    fn bfs_invalid_source() {
        let g = path_graph(4);
        assert_eq!(
            g.bfs(4).err(),
            Some(GraphError::InvalidVertex {
                node: 4,
                num_nodes: 4
            })
        );
    }

    #[test]
    fn bfs_distances_on_path() {
        let g = path_graph(5);
        let table = g.bfs(0).unwrap();

        for v in 0..5 {
            assert_eq!(table.dist_of(v), Some(v));
        }
        assert_eq!(table.pred_of(3), Some(2));
    }

    #[test]
    fn bfs_leaves_unreached_nodes_unvisited() {
        // two components: 0-1 and 2-3
        let g = SparseStore::from_edges(4, [(0, 1, 1 as Weight), (2, 3, 1)]).unwrap();
        let table = g.bfs(0).unwrap();

        assert_eq!(table.dist_of(2), None);
        assert_eq!(table.pred_of(2), None);
        assert_eq!(table.color_of(2), Color::Unvisited);
        assert_eq!(table.color_of(1), Color::Done);
    }

    /// Brute-force hop-count reference: repeated relaxation over all edges
    fn reference_hops(g: &DenseStore, source: Node) -> Vec<Option<NumNodes>> {
        let n = g.len();
        let mut dist = vec![None; n];
        dist[source as usize] = Some(0);

        for _ in 0..n {
            for WeightedEdge(u, v, _) in g.weighted_edges() {
                if let Some(du) = dist[u as usize] {
                    if dist[v as usize].is_none_or(|dv| dv > du + 1) {
                        dist[v as usize] = Some(du + 1);
                    }
                }
            }
        }
        dist
    }

    #[test]
    fn bfs_matches_bruteforce_distances() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [5 as NumNodes, 10, 25] {
            for _ in 0..10 {
                let mut g = DenseStore::new(n);
                for _ in 0..(2 * n) {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    g.insert_edge(u, v, rng.random_range(0..10 as Weight))
                        .unwrap();
                }

                let source = rng.random_range(0..n);
                let table = g.bfs(source).unwrap();
                let reference = reference_hops(&g, source);

                for u in 0..n {
                    assert_eq!(table.dist_of(u), reference[u as usize], "n={n} u={u}");
                }
            }
        }
    }

    #[test]
    fn dfs_covers_all_components() {
        // three components: 0-1-2, 3-4, 5
        let g = SparseStore::from_edges(
            6,
            [(0, 1, 1 as Weight), (1, 2, 1), (3, 4, 1)],
        )
        .unwrap();
        let (table, _) = g.dfs();

        assert_eq!(table.shape(), TableShape::Dfs);
        assert!(g.vertices().all(|u| table.color_of(u) == Color::Done));

        // exactly one root (pred-less node) per component
        let roots = g.vertices().filter(|&u| table.pred_of(u).is_none()).count();
        assert_eq!(roots, 3);
    }

    #[test]
    fn dfs_clock_is_a_permutation_of_timestamps() {
        let g = path_graph(4);
        let (table, _) = g.dfs();

        let mut times = g
            .vertices()
            .flat_map(|u| [table.discovery_of(u), table.finish_of(u)])
            .collect_vec();
        times.sort_unstable();
        assert_eq!(times, (1..=8).collect_vec());
    }

    #[test]
    fn dfs_intervals_nest_or_are_disjoint() {
        let rng = &mut Pcg64Mcg::seed_from_u64(23);

        for _ in 0..10 {
            let n = 12 as NumNodes;
            let mut g = SparseStore::new(n);
            for _ in 0..20 {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                g.insert_edge(u, v, 1).unwrap();
            }

            let (table, _) = g.dfs();
            for u in 0..n {
                assert!(table.discovery_of(u) < table.finish_of(u));
                for v in (u + 1)..n {
                    let (du, fu) = (table.discovery_of(u), table.finish_of(u));
                    let (dv, fv) = (table.discovery_of(v), table.finish_of(v));

                    let nested = (du < dv && fv < fu) || (dv < du && fu < fv);
                    let disjoint = fu < dv || fv < du;
                    assert!(nested || disjoint, "u={u} v={v}");
                }
            }
        }
    }

    #[test]
    fn dfs_trace_records_every_traversed_edge() {
        // triangle: every stored entry is walked over exactly once
        let g = SparseStore::from_edges(3, [(0, 1, 1 as Weight), (1, 2, 1), (2, 0, 1)])
            .unwrap();
        let (table, trace) = g.dfs();

        // each of the 3 undirected edges is stored in both directions
        assert_eq!(trace.len(), 6);
        assert!(trace.edges().contains(&Edge(0, 1)));
        assert!(trace.edges().contains(&Edge(1, 0)));

        assert!(g.vertices().all(|u| table.color_of(u) == Color::Done));
    }

    #[test]
    fn dfs_on_long_path_does_not_overflow() {
        let g = path_graph(100_000);
        let (table, _) = g.dfs();
        assert_eq!(table.discovery_of(0), 1);
        assert_eq!(table.finish_of(0), 200_000);
    }
}
