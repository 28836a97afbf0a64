//! Maximum common independent sets of two matroids.
//!
//! Starting from the empty set $I$, every round builds the *exchange graph* of
//! $I$ with respect to the two matroids $M_1$ and $M_2$ and searches it for a
//! shortest path from a source to a sink:
//!
//! - for $y \in I$ and $x \notin I$ there is an arc $y \to x$ if $I - y + x$ is
//!   independent in $M_1$, and an arc $x \to y$ if $I - y + x$ is independent in $M_2$;
//! - the sources are the $x \notin I$ for which $I + x$ is independent in $M_1$,
//!   the sinks those for which $I + x$ is independent in $M_2$.
//!
//! Flipping the membership of every element on a shortest such path yields a
//! common independent set with one more element. If no path exists, $I$ is a
//! maximum common independent set. Since $|I|$ grows in every round the search
//! ends after at most $|E|$ rounds, where $E$ is the ground set.
//!
//! ```rust
//! use matroidmatch::graph::*;
//! use matroidmatch::listgraph::ListGraph;
//! use matroidmatch::indexed::IndexedPartitionMatroid;
//! use matroidmatch::intersect::intersect;
//!
//! fn main() {
//!     let graph = ListGraph::from_edges(3, 3, vec![(0,3),(0,4),(1,4),(2,5)]).unwrap();
//!     let left = IndexedPartitionMatroid::new(&graph, Side::Left);
//!     let right = IndexedPartitionMatroid::new(&graph, Side::Right);
//!
//!     let mut matching = intersect(&left, &right);
//!     matching.sort();
//!     assert_eq!(matching, vec![(0,3),(1,4),(2,5)]);
//! }
//! ```
use std::collections::VecDeque;

use fxhash::{FxHashMap, FxHashSet};
use log::{debug, trace};

use crate::matroid::Matroid;

/// Exchange graph of a common independent set. Nodes are positions in the
/// ground set.
#[derive(Debug)]
pub struct ExchangeGraph {
    out_arcs: Vec<Vec<usize>>,
    sources: Vec<usize>,
    is_sink: Vec<bool>,
    num_arcs: usize
}

impl ExchangeGraph {
    /// Builds the exchange graph for the current set. `ground` is the ground set,
    /// `in_set` marks which of its elements belong to the common independent set
    /// and `set1`, `set2` are that set in the representations of `m1` and `m2`.
    pub fn build<M1, M2>(m1:&M1, set1:&M1::Subset, m2:&M2, set2:&M2::Subset,
                         ground:&[M1::Element], in_set:&[bool]) -> ExchangeGraph
        where M1: Matroid, M2: Matroid<Element=M1::Element> {
        let n = ground.len();
        let mut out_arcs = vec![Vec::new(); n];
        let mut sources = Vec::new();
        let mut is_sink = vec![false; n];
        let mut num_arcs = 0;

        let members:Vec<usize> = (0..n).filter(|&i| in_set[i]).collect();

        for ix in (0..n).filter(|&i| !in_set[i]) {
            let x = &ground[ix];
            if m1.can_extend(set1, x) {
                sources.push(ix);
            }
            is_sink[ix] = m2.can_extend(set2, x);

            for &iy in &members {
                let y = &ground[iy];
                if m1.can_exchange(set1, x, y) {
                    out_arcs[iy].push(ix);
                    num_arcs += 1;
                }
                if m2.can_exchange(set2, x, y) {
                    out_arcs[ix].push(iy);
                    num_arcs += 1;
                }
            }
        }

        ExchangeGraph { out_arcs, sources, is_sink, num_arcs }
    }

    pub fn num_nodes(&self) -> usize {
        self.out_arcs.len()
    }

    pub fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    pub fn is_sink(&self, ix:usize) -> bool {
        self.is_sink[ix]
    }

    pub fn out_neighbours(&self, ix:usize) -> &[usize] {
        &self.out_arcs[ix]
    }

    /// Finds a path with the fewest arcs from any source to any sink using a
    /// breadth-first search started from all sources at once.
    ///
    /// Returns the nodes of the path from source to sink, or `None` if no sink
    /// can be reached.
    pub fn shortest_path(&self) -> Option<Vec<usize>> {
        let mut parent:FxHashMap<usize, usize> = FxHashMap::default();
        let mut seen:FxHashSet<usize> = FxHashSet::default();
        let mut queue = VecDeque::new();

        for &s in &self.sources {
            seen.insert(s);
            queue.push_back(s);
        }

        while let Some(u) = queue.pop_front() {
            if self.is_sink[u] {
                let mut path = vec![u];
                let mut curr = u;
                while let Some(&p) = parent.get(&curr) {
                    path.push(p);
                    curr = p;
                }
                path.reverse();
                return Some(path)
            }

            for &v in &self.out_arcs[u] {
                if seen.insert(v) {
                    parent.insert(v, u);
                    queue.push_back(v);
                }
            }
        }

        None
    }
}

/// Computes a maximum common independent set of `m1` and `m2`, which must share
/// the same ground set. The elements are returned in the order in which they
/// were last added to the set.
pub fn intersect<M1, M2>(m1:&M1, m2:&M2) -> Vec<M1::Element>
    where M1: Matroid, M2: Matroid<Element=M1::Element> {
    let ground = m1.ground_set();
    debug_assert_eq!(ground.iter().collect::<FxHashSet<_>>(),
                     m2.ground_set().iter().collect::<FxHashSet<_>>(),
                     "Matroids do not share a ground set");

    let mut in_set = vec![false; ground.len()];
    let mut set1 = m1.to_subset(&[]);
    let mut set2 = m2.to_subset(&[]);
    let mut size = 0;

    for round in 1.. {
        let exchange = ExchangeGraph::build(m1, &set1, m2, &set2, &ground, &in_set);
        debug!("Round {round}: |I| = {size}, {} sources, {} arcs",
               exchange.sources().len(), exchange.num_arcs());

        let path = match exchange.shortest_path() {
            Some(path) => path,
            None => break
        };
        trace!("Augmenting along {:?}", path.iter().map(|&ix| ground[ix]).collect::<Vec<_>>());

        // Members on the path leave before the other path elements enter.
        for &ix in path.iter().filter(|&&ix| in_set[ix]) {
            m1.remove(&mut set1, &ground[ix]);
            m2.remove(&mut set2, &ground[ix]);
        }
        for &ix in &path {
            if in_set[ix] {
                in_set[ix] = false;
            } else {
                m1.insert(&mut set1, ground[ix]);
                m2.insert(&mut set2, ground[ix]);
                in_set[ix] = true;
            }
        }
        size += 1;

        debug_assert!(m1.is_independent(&set1) && m2.is_independent(&set2));
    }

    debug!("Maximum common independent set has {size} elements");
    m1.elements(&set1)
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
