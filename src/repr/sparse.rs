use smallvec::SmallVec;

use super::*;

/// Number of inline `(neighbor, weight)` entries per node before the
/// adjacency list spills to the heap
const INLINE_NEIGHBORS: usize = 4;

/// An adjacency-list representation.
///
/// Each node owns an insertion-ordered list of `(neighbor, weight)` entries.
/// Inserting never dedupes: re-inserting an existing pair appends a second,
/// parallel entry, and `is_edge`/`weight_of` report the **first** matching
/// entry in insertion order.
#[derive(Clone, Default)]
pub struct SparseStore {
    nbs: Vec<SmallVec<[(Node, Weight); INLINE_NEIGHBORS]>>,
    num_edges: NumEdges,
}

impl GraphNew for SparseStore {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![SmallVec::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphNodeOrder for SparseStore {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for SparseStore {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl EdgeStore for SparseStore {
    fn is_edge(&self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.nbs[u as usize].iter().any(|&(x, _)| x == v))
    }

    fn weight_of(&self, u: Node, v: Node) -> Result<Weight> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.nbs[u as usize]
            .iter()
            .find(|&&(x, _)| x == v)
            .map_or(NO_WEIGHT, |&(_, w)| w))
    }

    fn insert_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        if w < 0 {
            return Err(GraphError::InvalidWeight(w));
        }

        self.nbs[u as usize].push((v, w));

        #[cfg(not(feature = "directed"))]
        self.nbs[v as usize].push((u, w));

        self.num_edges += 1;
        Ok(())
    }

    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.nbs[u as usize].iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn insert_and_lookup() {
        let mut g = SparseStore::new(4);
        g.insert_edge(0, 2, 7).unwrap();

        assert!(g.is_edge(0, 2).unwrap());
        assert_eq!(g.weight_of(0, 2).unwrap(), 7);
        assert_eq!(g.number_of_edges(), 1);

        #[cfg(not(feature = "directed"))]
        {
            assert!(g.is_edge(2, 0).unwrap());
            assert_eq!(g.weight_of(2, 0).unwrap(), 7);
        }

        assert!(!g.is_edge(1, 3).unwrap());
        assert_eq!(g.weight_of(1, 3).unwrap(), NO_WEIGHT);
    }

    #[test]
    fn insert_appends_parallel_edges() {
        let mut g = SparseStore::new(3);
        g.insert_edge(0, 1, 5).unwrap();
        g.insert_edge(0, 1, 9).unwrap();

        // the first entry wins in lookups, both remain stored
        assert_eq!(g.weight_of(0, 1).unwrap(), 5);
        assert_eq!(g.number_of_edges(), 2);
        assert_eq!(g.degree_of(0), 2);
    }

    #[test]
    fn invalid_arguments() {
        let mut g = SparseStore::new(3);

        assert_eq!(
            g.is_edge(0, 3),
            Err(GraphError::InvalidVertex {
                node: 3,
                num_nodes: 3
            })
        );
        assert_eq!(g.insert_edge(0, 1, -1), Err(GraphError::InvalidWeight(-1)));
        assert_eq!(g.number_of_edges(), 0);
    }

    #[test]
    fn neighbors_in_insertion_order() {
        let g =
            SparseStore::from_edges(5, [(2, 4, 1 as Weight), (2, 0, 3), (2, 3, 2)]).unwrap();

        let nbs = g.neighbors_of(2).collect_vec();
        assert_eq!(nbs, vec![(4, 1), (0, 3), (3, 2)]);
    }

    /// Dense and sparse must agree on every lookup, no matter in which order
    /// (and how often) edges were inserted.
    #[test]
    fn lookups_match_dense_store() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [5 as NumNodes, 10, 20] {
            for _ in 0..10 {
                let mut dense = DenseStore::new(n);
                let mut sparse = SparseStore::new(n);

                for _ in 0..(3 * n) {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let w = rng.random_range(0..100 as Weight);

                    dense.insert_edge(u, v, w).unwrap();
                    sparse.insert_edge(u, v, w).unwrap();
                }

                for u in 0..n {
                    for v in 0..n {
                        assert_eq!(dense.is_edge(u, v), sparse.is_edge(u, v));
                        assert_eq!(dense.weight_of(u, v), sparse.weight_of(u, v));
                    }
                }
            }
        }
    }
}
