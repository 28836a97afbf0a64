//! Partition matroid of one side of a bipartite graph which answers every query
//! by scanning the candidate set.
//!
//! Every query costs $O(|S|)$ time for a candidate set $S$ and no state is kept
//! between queries. Use [IndexedPartitionMatroid](crate::indexed::IndexedPartitionMatroid)
//! for anything but small inputs, this implementation serves as reference.
use bitvec::prelude::*;
use itertools::Itertools;

use crate::graph::*;
use crate::matroid::Matroid;
use crate::partition::SideBlocks;

#[derive(Debug)]
pub struct NaivePartitionMatroid<'a, G> where G: BipartiteGraph {
    blocks: SideBlocks<'a, G>
}

impl<'a, G> NaivePartitionMatroid<'a, G> where G: BipartiteGraph {
    pub fn new(graph: &'a G, side:Side) -> Self {
        NaivePartitionMatroid { blocks: SideBlocks::new(graph, side) }
    }

    /// The first element of `set` sharing the designated endpoint of `x`.
    fn first_conflict<'s>(&self, set:&'s [Edge], x:&Edge) -> Option<&'s Edge> {
        let v = self.blocks.endpoint(x);
        set.iter().find(|e| self.blocks.endpoint(e) == v)
    }
}

impl<'a, G> Matroid for NaivePartitionMatroid<'a, G> where G: BipartiteGraph {
    type Element = Edge;
    type Subset = Vec<Edge>;

    fn ground_set(&self) -> Vec<Edge> {
        self.blocks.ground_set()
    }

    fn to_subset(&self, elements:&[Edge]) -> Vec<Edge> {
        assert!(elements.iter().all_unique(), "Elements {elements:?} contain repetitions");
        elements.to_vec()
    }

    fn elements(&self, set:&Vec<Edge>) -> Vec<Edge> {
        set.clone()
    }

    fn is_independent(&self, set:&Vec<Edge>) -> bool {
        let mut seen = bitvec![u64, Lsb0; 0; self.blocks.num_blocks()];
        for e in set {
            let ix = self.blocks.block_index(e);
            if seen[ix] {
                return false
            }
            seen.set(ix, true);
        }
        true
    }

    fn can_extend(&self, set:&Vec<Edge>, x:&Edge) -> bool {
        assert!(!set.contains(x), "Element {x:?} already contained in set");
        self.first_conflict(set, x).is_none()
    }

    fn can_exchange(&self, set:&Vec<Edge>, x:&Edge, y:&Edge) -> bool {
        assert!(!set.contains(x), "Element {x:?} already contained in set");
        assert!(set.contains(y), "Element {y:?} not contained in set");

        // A partition matroid admits at most one conflict, so the first one decides.
        match self.first_conflict(set, x) {
            Some(e) => e == y,
            None => true
        }
    }

    fn insert(&self, set:&mut Vec<Edge>, x:Edge) {
        assert!(!set.contains(&x), "Element {x:?} already contained in set");
        set.push(x);
    }

    fn remove(&self, set:&mut Vec<Edge>, y:&Edge) {
        match set.iter().position(|e| e == y) {
            Some(ix) => { set.remove(ix); },
            None => panic!("Element {y:?} not contained in set")
        }
    }
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
