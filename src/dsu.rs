/*!
# Disjoint-Set-Union

A union-find structure over `n` elements with **O(1)** find and
O(size of the smaller set) union, used to back Kruskal's algorithm.

Unlike the classic parent-pointer forest, every element stores the id of its
*owning set record* directly, so `find` is a single lookup with no path to
compress. Sets are singly linked chains threaded through a `next` array;
`union` splices the smaller chain onto the tail of the larger one and re-tags
the owner of every spliced element. Since each re-tag moves an element into a
set at least twice its former size, the total relink work over any sequence
of unions is O(n log n).

All records live in two flat arenas (`owner`/`next` per element, one
[`SetRecord`] per initial singleton); there is no shared ownership anywhere.
*/

use crate::{
    error::{GraphError, Result},
    node::{Node, NumNodes, INVALID_NODE},
};

type SetId = u32;

#[derive(Debug, Clone)]
struct SetRecord {
    head: Node,
    tail: Node,
    size: NumNodes,
}

/// A partition of `0..n` into disjoint sets
#[derive(Debug, Clone)]
pub struct DisjointSetUnion {
    /// Maps each element to its owning set record
    owner: Vec<SetId>,
    /// Successor of each element in its set's chain, `INVALID_NODE` at the tail
    next: Vec<Node>,
    /// One record per initial singleton; records of absorbed sets go stale
    /// and are never referenced again
    sets: Vec<SetRecord>,
    num_sets: usize,
}

impl DisjointSetUnion {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n - 1}`
    pub fn new(n: usize) -> Self {
        Self {
            owner: (0..n as SetId).collect(),
            next: vec![INVALID_NODE; n],
            sets: (0..n as Node)
                .map(|i| SetRecord {
                    head: i,
                    tail: i,
                    size: 1,
                })
                .collect(),
            num_sets: n,
        }
    }

    /// Returns the number of elements of the partition
    pub fn number_of_elements(&self) -> usize {
        self.owner.len()
    }

    /// Returns the number of (non-empty) disjoint sets
    pub fn number_of_sets(&self) -> usize {
        self.num_sets
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.owner.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidIndex {
                index,
                num_elements: self.owner.len(),
            })
        }
    }

    /// Returns the representative of the set containing `index`: the head
    /// element of its chain. Runs in O(1).
    pub fn find(&self, index: usize) -> Result<usize> {
        self.check_index(index)?;
        Ok(self.sets[self.owner[index] as usize].head as usize)
    }

    /// Returns *true* if both elements belong to the same set
    pub fn same_set(&self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Merges the sets containing `a` and `b`; a no-op if they already share
    /// a representative.
    ///
    /// The larger set absorbs the smaller one (ties toward `a`'s set): the
    /// smaller chain is spliced onto the absorbing tail and each spliced
    /// element is re-tagged. Runs in O(size of the smaller set).
    pub fn union(&mut self, a: usize, b: usize) -> Result<()> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(());
        }

        let set_a = self.owner[root_a];
        let set_b = self.owner[root_b];
        let (absorber, absorbed) =
            if self.sets[set_a as usize].size < self.sets[set_b as usize].size {
                (set_b, set_a)
            } else {
                (set_a, set_b)
            };

        let absorbed_head = self.sets[absorbed as usize].head;
        let absorbed_tail = self.sets[absorbed as usize].tail;
        let absorbed_size = self.sets[absorbed as usize].size;

        let tail = self.sets[absorber as usize].tail;
        self.next[tail as usize] = absorbed_head;

        let mut curr = absorbed_head;
        while curr != INVALID_NODE {
            self.owner[curr as usize] = absorber;
            curr = self.next[curr as usize];
        }

        let record = &mut self.sets[absorber as usize];
        record.size += absorbed_size;
        record.tail = absorbed_tail;
        self.num_sets -= 1;
        Ok(())
    }
}
