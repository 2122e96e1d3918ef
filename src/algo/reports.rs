/*!
Analyses derived from a [`StateTable`] (and, for edge classification, a
[`DfsEdgeTrace`]).

Every operation first checks that the table has the [`TableShape`] it needs
and fails with [`GraphError::InvalidState`] otherwise, so a BFS table cannot
be fed into a finish-time analysis by accident.
*/

use itertools::Itertools;

use crate::{
    algo::traversal::{Color, DfsEdgeTrace, StateTable, TableShape},
    edge::Edge,
    error::{GraphError, Result},
    node::Node,
    repr::GraphNodeOrder,
};

/// Classification of a traversed edge by the disc/finish intervals of its
/// endpoints.
///
/// The interval predicates do not distinguish tree edges from forward edges
/// (both point into a nested interval), hence the combined variant. Edges
/// matching none of the predicates cleanly are reported as [`EdgeKind::Cross`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Target interval nested inside the source interval
    TreeOrForward,
    /// Target discovered earlier and still open when the edge was scanned
    Back,
    /// Disjoint intervals (and the fallback for everything else)
    Cross,
}

impl StateTable {
    fn require_shape(&self, shape: TableShape, what: &'static str) -> Result<()> {
        if self.shape == shape {
            Ok(())
        } else {
            Err(GraphError::InvalidState(what))
        }
    }

    /// Reconstructs the shortest hop-count path from `source` to `dest` by
    /// walking the predecessor chain backwards. Returns `None` if `dest` was
    /// not reached from the table's source (or `source` does not lie on the
    /// chain).
    ///
    /// Requires a [`TableShape::Bfs`] table.
    pub fn path(&self, source: Node, dest: Node) -> Result<Option<Vec<Node>>> {
        self.require_shape(TableShape::Bfs, "path requires a BFS table")?;
        self.check_node(source)?;
        self.check_node(dest)?;

        if self.dist_of(dest).is_none() {
            return Ok(None);
        }

        let mut path = vec![dest];
        let mut curr = dest;
        while curr != source {
            match self.pred_of(curr) {
                Some(p) => {
                    path.push(p);
                    curr = p;
                }
                None => return Ok(None),
            }
        }
        path.reverse();
        Ok(Some(path))
    }

    /// Returns all nodes at the maximum finite distance from the table's
    /// source, together with the annotation `max_dist - source`.
    ///
    /// The annotation subtracts the source *id* from the maximum distance,
    /// not the source's distance (which is zero anyway). Unreached nodes do
    /// not participate in the maximum.
    ///
    /// Requires a [`TableShape::Bfs`] table.
    pub fn most_distant(&self, source: Node) -> Result<(Vec<Node>, i64)> {
        self.require_shape(TableShape::Bfs, "most_distant requires a BFS table")?;
        self.check_node(source)?;

        let max = self
            .vertices()
            .filter_map(|u| self.dist_of(u))
            .max()
            .ok_or(GraphError::InvalidState("table has no reached node"))?;

        let nodes = self
            .vertices()
            .filter(|&u| self.dist_of(u) == Some(max))
            .collect();
        Ok((nodes, max as i64 - source as i64))
    }

    /// Returns *true* if the search reached every node, i.e. the graph is
    /// connected from the table's source. The empty graph counts as not
    /// connected.
    ///
    /// Requires a [`TableShape::Bfs`] table.
    pub fn is_connected(&self) -> Result<bool> {
        self.require_shape(TableShape::Bfs, "is_connected requires a BFS table")?;
        Ok(!self.is_empty() && self.vertices().all(|u| self.color_of(u) == Color::Done))
    }

    /// Returns the nodes ordered by descending finish time (ties broken by
    /// descending node id).
    ///
    /// This is a topological order exactly if the traversed graph was
    /// acyclic; no cycle check is performed.
    ///
    /// Requires a [`TableShape::Dfs`] table.
    pub fn topological_order(&self) -> Result<Vec<Node>> {
        self.require_shape(TableShape::Dfs, "topological_order requires a DFS table")?;

        let mut order = self.vertices().collect_vec();
        order.sort_unstable_by_key(|&u| std::cmp::Reverse((self.finish_of(u), u)));
        Ok(order)
    }

    /// Renders the discovery/finish structure as nested brackets: each node
    /// contributes `(vX` at its discovery time and `vX)` at its finish time,
    /// all events joined by single spaces in clock order.
    ///
    /// Requires a [`TableShape::Dfs`] table.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = SparseStore::from_edges(3, [(0, 1, 1 as Weight), (1, 2, 1)]).unwrap();
    /// let (table, _) = g.dfs();
    ///
    /// assert_eq!(
    ///     table.parenthesization().unwrap(),
    ///     "(v0 (v1 (v2 v2) v1) v0)"
    /// );
    /// ```
    pub fn parenthesization(&self) -> Result<String> {
        self.require_shape(TableShape::Dfs, "parenthesization requires a DFS table")?;

        // (time, node, is_finish) events in clock order
        let events = self
            .vertices()
            .flat_map(|u| {
                [
                    (self.discovery_of(u), u, false),
                    (self.finish_of(u), u, true),
                ]
            })
            .sorted_unstable();

        Ok(events
            .map(|(_, u, is_finish)| {
                if is_finish {
                    format!("v{u})")
                } else {
                    format!("(v{u}")
                }
            })
            .join(" "))
    }

    /// Classifies every edge of a DFS trace by the disc/finish intervals of
    /// its endpoints, in trace order.
    ///
    /// The predicates are checked first-match in the order tree-or-forward,
    /// back, cross; an edge matching none falls back to cross, so the result
    /// is deterministic for every input.
    ///
    /// Fails with [`GraphError::InvalidState`] on an empty trace or a
    /// non-DFS table.
    pub fn classify_edges(&self, trace: &DfsEdgeTrace) -> Result<Vec<(Edge, EdgeKind)>> {
        self.require_shape(TableShape::Dfs, "classify_edges requires a DFS table")?;
        if trace.is_empty() {
            return Err(GraphError::InvalidState("edge trace is empty"));
        }

        Ok(trace
            .edges()
            .iter()
            .map(|&edge| {
                let Edge(u, v) = edge;
                let (du, fu) = (self.discovery_of(u), self.finish_of(u));
                let (dv, fv) = (self.discovery_of(v), self.finish_of(v));

                let kind = if dv > du && fv < fu {
                    EdgeKind::TreeOrForward
                } else if dv < du && fv > du {
                    EdgeKind::Back
                } else {
                    EdgeKind::Cross
                };
                (edge, kind)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::Traversal, prelude::*};

    fn path_graph(n: NumNodes) -> SparseStore {
        SparseStore::from_edges(n, (1..n).map(|v| (v - 1, v, 1 as Weight))).unwrap()
    }

    #[test]
    fn path_on_three_path() {
        let g = path_graph(3);
        let table = g.bfs(0).unwrap();

        assert_eq!(table.path(0, 2).unwrap(), Some(vec![0, 1, 2]));
        assert_eq!(table.path(0, 0).unwrap(), Some(vec![0]));
    }

    #[test]
    fn path_returns_none_when_unreachable() {
        let g = SparseStore::from_edges(4, [(0, 1, 1 as Weight), (2, 3, 1)]).unwrap();
        let table = g.bfs(0).unwrap();

        assert_eq!(table.path(0, 3).unwrap(), None);
        // walking from a node that is not on the chain also yields no path
        assert_eq!(table.path(3, 1).unwrap(), None);
    }

    #[test]
    fn path_rejects_dfs_table() {
        let (table, _) = path_graph(3).dfs();
        assert!(matches!(
            table.path(0, 2),
            Err(GraphError::InvalidState(_))
        ));
    }

    #[test]
    fn most_distant_single_maximum() {
        let g = path_graph(5);
        let table = g.bfs(0).unwrap();

        assert_eq!(table.most_distant(0).unwrap(), (vec![4], 4));
    }

    #[test]
    fn most_distant_annotation_subtracts_source_id() {
        // from the middle of a 5-path: dists are 2 1 0 1 2
        let g = path_graph(5);
        let table = g.bfs(2).unwrap();

        assert_eq!(table.most_distant(2).unwrap(), (vec![0, 4], 0));
    }

    #[test]
    fn most_distant_ignores_unreached_nodes() {
        let g = SparseStore::from_edges(4, [(0, 1, 1 as Weight), (2, 3, 1)]).unwrap();
        let table = g.bfs(0).unwrap();

        assert_eq!(table.most_distant(0).unwrap(), (vec![1], 1));
    }

    #[test]
    fn connectivity() {
        let connected = path_graph(4).bfs(0).unwrap();
        assert!(connected.is_connected().unwrap());

        let split = SparseStore::from_edges(4, [(0, 1, 1 as Weight), (2, 3, 1)])
            .unwrap()
            .bfs(0)
            .unwrap();
        assert!(!split.is_connected().unwrap());

        let empty = SparseStore::new(0).bfs(0);
        assert!(empty.is_err());
    }

    #[test]
    fn topological_order_by_descending_finish() {
        // on a path rooted at 0 the finish times decrease along the path
        let (table, _) = path_graph(4).dfs();
        assert_eq!(table.topological_order().unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn parenthesization_nests_components() {
        let g = SparseStore::from_edges(3, [(0, 1, 1 as Weight)]).unwrap();
        let (table, _) = g.dfs();

        assert_eq!(
            table.parenthesization().unwrap(),
            "(v0 (v1 v1) v0) (v2 v2)"
        );
    }

    #[test]
    fn classification_on_triangle() {
        let g = SparseStore::from_edges(3, [(0, 1, 1 as Weight), (1, 2, 1), (2, 0, 1)])
            .unwrap();
        let (table, trace) = g.dfs();

        let kinds = table.classify_edges(&trace).unwrap();
        assert_eq!(
            kinds,
            vec![
                (Edge(0, 1), EdgeKind::TreeOrForward),
                (Edge(1, 0), EdgeKind::Back),
                (Edge(1, 2), EdgeKind::TreeOrForward),
                (Edge(2, 1), EdgeKind::Back),
                (Edge(2, 0), EdgeKind::Back),
                (Edge(0, 2), EdgeKind::TreeOrForward),
            ]
        );
    }

    #[test]
    fn classification_cross_between_components() {
        // directed stores would produce genuine cross edges; in undirected
        // mode two finished siblings only meet via disjoint intervals when
        // the graph is disconnected, so classify a hand-built trace instead
        let g = SparseStore::from_edges(4, [(0, 1, 1 as Weight), (2, 3, 1)]).unwrap();
        let (table, _) = g.dfs();

        let trace = DfsEdgeTrace {
            edges: vec![Edge(2, 0)],
        };
        // 0's interval closed before 2 was discovered
        assert_eq!(
            table.classify_edges(&trace).unwrap(),
            vec![(Edge(2, 0), EdgeKind::Cross)]
        );
    }

    #[test]
    fn classification_rejects_empty_trace() {
        let (table, _) = path_graph(2).dfs();
        assert_eq!(
            table.classify_edges(&DfsEdgeTrace::default()),
            Err(GraphError::InvalidState("edge trace is empty"))
        );
    }
}
