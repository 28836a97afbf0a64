//! Maximum matchings of bipartite graphs through matroid intersection.
//!
//! A set of edges is a matching exactly if it is independent both in the
//! partition matroid of the left side and in that of the right side, so a
//! maximum common independent set of the two is a maximum matching.
//!
//! ```rust
//! use matroidmatch::graph::*;
//! use matroidmatch::listgraph::ListGraph;
//! use matroidmatch::matching::*;
//! use matroidmatch::matroid::MatroidKind;
//!
//! fn main() {
//!     let graph = ListGraph::from_edges(2, 3, vec![(0,2),(1,2)]).unwrap();
//!     let matching = graph.matroid_matching(MatroidKind::Indexed);
//!     assert_eq!(matching.len(), 1);
//!     assert!(is_matching(&graph, &matching));
//! }
//! ```
use crate::graph::*;
use crate::indexed::IndexedPartitionMatroid;
use crate::intersect::intersect;
use crate::matroid::MatroidKind;
use crate::naive::NaivePartitionMatroid;

pub trait MatroidMatching {
    /// Computes a maximum matching using the partition matroids of type `kind`.
    /// The edges are returned as `(left, right)` pairs.
    fn matroid_matching(&self, kind:MatroidKind) -> Vec<Edge>;

    fn naive_matroid_matching(&self) -> Vec<Edge> {
        self.matroid_matching(MatroidKind::Naive)
    }

    fn indexed_matroid_matching(&self) -> Vec<Edge> {
        self.matroid_matching(MatroidKind::Indexed)
    }
}

impl<G> MatroidMatching for G where G: BipartiteGraph {
    fn matroid_matching(&self, kind:MatroidKind) -> Vec<Edge> {
        match kind {
            MatroidKind::Naive => intersect(&NaivePartitionMatroid::new(self, Side::Left),
                                            &NaivePartitionMatroid::new(self, Side::Right)),
            MatroidKind::Indexed => intersect(&IndexedPartitionMatroid::new(self, Side::Left),
                                              &IndexedPartitionMatroid::new(self, Side::Right)),
        }
    }
}

/// Checks that every edge in `edges` exists in `graph` and that no vertex is
/// incident to more than one of them.
pub fn is_matching<G>(graph:&G, edges:&[Edge]) -> bool where G: BipartiteGraph {
    let mut covered = VertexSet::default();
    edges.iter().all(|(u,v)| graph.adjacent(u, v) && covered.insert(*u) && covered.insert(*v))
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

#[cfg(test)]
mod test {
    use super::*;
    use crate::listgraph::ListGraph;
    use crate::matrixgraph::MatrixGraph;
    use crate::testing::{random_graph, reference_matching_size};

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn matching_check() {
        let G = ListGraph::biclique(2, 2);
        assert!(is_matching(&G, &[]));
        assert!(is_matching(&G, &[(0,2),(1,3)]));
        assert!(is_matching(&G, &[(3,1)]));
        assert!(!is_matching(&G, &[(0,2),(0,3)]));
        assert!(!is_matching(&G, &[(0,2),(1,2)]));

        let G = ListGraph::matching(2);
        assert!(!is_matching(&G, &[(0,3)]));
    }

    #[test]
    fn both_kinds() {
        let G = ListGraph::from_edges(3, 3, vec![(0,3),(0,4),(1,4),(2,5)]).unwrap();
        for kind in [MatroidKind::Naive, MatroidKind::Indexed] {
            let res = G.matroid_matching(kind);
            assert_eq!(res.len(), 3);
            assert!(is_matching(&G, &res));
        }

        let G = MatrixGraph::new(3, 4);
        assert!(G.naive_matroid_matching().is_empty());
        assert!(G.indexed_matroid_matching().is_empty());
    }

    #[test]
    fn perfect_matchings() {
        let G = ListGraph::matching(10);
        assert_eq!(G.indexed_matroid_matching().len(), 10);

        let G = ListGraph::biclique(5, 5);
        let res = G.naive_matroid_matching();
        assert_eq!(res.len(), 5);
        assert!(is_matching(&G, &res));
    }

    #[test]
    fn storages_agree() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..10 {
            let L = random_graph(&mut rng, 9, 7, 0.2);
            let M = {
                let mut M = MatrixGraph::new(9, 7);
                M.add_edges(L.edges()).unwrap();
                M
            };
            let expected = reference_matching_size(&L);

            let res = M.indexed_matroid_matching();
            assert_eq!(res.len(), expected);
            assert!(is_matching(&M, &res));
            assert_eq!(L.naive_matroid_matching().len(), expected);
        }
    }
}
