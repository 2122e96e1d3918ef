use super::*;

/// An adjacency-matrix representation.
///
/// The matrix is stored as a flat row-major `Vec<Weight>` with
/// [`NO_WEIGHT`] marking absent edges. Edge lookups are O(1), neighbor
/// iteration O(n). Inserting between an already-connected pair is a no-op,
/// so the store never holds parallel edges.
#[derive(Clone, Debug)]
pub struct DenseStore {
    n: NumNodes,
    num_edges: NumEdges,
    matrix: Vec<Weight>,
}

impl DenseStore {
    #[inline]
    fn cell(&self, u: Node, v: Node) -> usize {
        u as usize * self.n as usize + v as usize
    }
}

impl GraphNew for DenseStore {
    fn new(n: NumNodes) -> Self {
        Self {
            n,
            num_edges: 0,
            matrix: vec![NO_WEIGHT; (n as usize) * (n as usize)],
        }
    }
}

impl GraphNodeOrder for DenseStore {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl GraphEdgeOrder for DenseStore {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl EdgeStore for DenseStore {
    fn is_edge(&self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.matrix[self.cell(u, v)] >= 0)
    }

    fn weight_of(&self, u: Node, v: Node) -> Result<Weight> {
        self.check_node(u)?;
        self.check_node(v)?;
        // absent cells hold NO_WEIGHT already
        Ok(self.matrix[self.cell(u, v)])
    }

    fn insert_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        if w < 0 {
            return Err(GraphError::InvalidWeight(w));
        }

        let cell = self.cell(u, v);
        if self.matrix[cell] == NO_WEIGHT {
            self.matrix[cell] = w;

            #[cfg(not(feature = "directed"))]
            {
                let mirror = self.cell(v, u);
                self.matrix[mirror] = w;
            }

            self.num_edges += 1;
        }
        Ok(())
    }

    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        let row = &self.matrix[self.cell(u, 0)..self.cell(u, 0) + self.len()];
        row.iter()
            .enumerate()
            .filter_map(|(v, &w)| (w >= 0).then_some((v as Node, w)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn insert_and_lookup() {
        let mut g = DenseStore::new(4);
        assert_eq!(g.number_of_edges(), 0);

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
    fn insert_is_idempotent() {
        let mut g = DenseStore::new(3);
        g.insert_edge(0, 1, 5).unwrap();
        g.insert_edge(0, 1, 9).unwrap();

        assert_eq!(g.weight_of(0, 1).unwrap(), 5);
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn invalid_arguments() {
        let mut g = DenseStore::new(3);

        assert_eq!(
            g.is_edge(0, 3),
            Err(GraphError::InvalidVertex {
                node: 3,
                num_nodes: 3
            })
        );
        assert_eq!(
            g.weight_of(7, 0),
            Err(GraphError::InvalidVertex {
                node: 7,
                num_nodes: 3
            })
        );
        assert_eq!(
            g.insert_edge(3, 0, 1),
            Err(GraphError::InvalidVertex {
                node: 3,
                num_nodes: 3
            })
        );
        assert_eq!(g.insert_edge(0, 1, -2), Err(GraphError::InvalidWeight(-2)));
        assert_eq!(g.number_of_edges(), 0);
    }

    #[test]
    fn neighbors_in_index_order() {
        let g =
            DenseStore::from_edges(5, [(2, 4, 1 as Weight), (2, 0, 3), (2, 3, 2)]).unwrap();

        let nbs = g.neighbors_of(2).collect_vec();
        assert_eq!(nbs, vec![(0, 3), (3, 2), (4, 1)]);
        assert_eq!(g.degree_of(2), 3);
    }

    #[test]
    fn empty_graph() {
        let g = DenseStore::new(0);
        assert!(g.is_empty());
        assert!(g.is_singleton());
        assert_eq!(g.weighted_edges().count(), 0);
    }
}
