//! Helpers shared by the test modules: random instances, a reference matcher
//! and an exhaustive check of the matroid axioms.
use itertools::Itertools;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::graph::*;
use crate::listgraph::ListGraph;
use crate::matroid::Matroid;

/// Random bipartite graph in which every left-right pair is an edge with probability `p`.
pub fn random_graph<R: Rng>(rng: &mut R, left:usize, right:usize, p:f64) -> ListGraph {
    let mut res = ListGraph::new(left, right);
    for u in 0..left as Vertex {
        for v in (left as Vertex)..((left+right) as Vertex) {
            if rng.gen_bool(p) {
                res.add_edge(&u, &v).unwrap();
            }
        }
    }
    res
}

/// Random subset of `ground` in random order.
pub fn random_subset<R: Rng>(rng: &mut R, ground:&[Edge]) -> Vec<Edge> {
    let mut res = ground.iter().copied().filter(|_| rng.gen_bool(0.5)).collect_vec();
    res.shuffle(rng);
    res
}

/// Size of a maximum matching computed with plain augmenting paths.
pub fn reference_matching_size<G: BipartiteGraph>(graph:&G) -> usize {
    fn augment<G: BipartiteGraph>(graph:&G, u:Vertex, visited:&mut VertexSet, mate:&mut VertexMap<Vertex>) -> bool {
        for v in graph.neighbours(&u) {
            if !visited.insert(v) {
                continue
            }
            let matched = mate.get(&v).copied();
            let free = match matched {
                Some(w) => augment(graph, w, visited, mate),
                None => true
            };
            if free {
                mate.insert(v, u);
                return true
            }
        }
        false
    }

    let mut mate = VertexMap::default();
    (0..graph.num_left() as Vertex)
        .filter(|&u| augment(graph, u, &mut VertexSet::default(), &mut mate))
        .count()
}

/// Checks the matroid axioms and the consistency of the single-element oracles
/// by enumerating all subsets of the ground set.
pub fn check_matroid_axioms<M: Matroid>(matroid:&M) {
    let ground = matroid.ground_set();
    assert!(matroid.is_independent_elements(&[]));

    let independent = ground.iter().copied()
        .powerset()
        .filter(|S| matroid.is_independent_elements(S))
        .collect_vec();

    // Downward closure
    for S in &independent {
        for T in S.iter().copied().powerset() {
            assert!(matroid.is_independent_elements(&T), "{T:?} is dependent but {S:?} is not");
        }
    }

    // Augmentation
    for A in &independent {
        let set = matroid.to_subset(A);
        for B in independent.iter().filter(|B| B.len() > A.len()) {
            assert!(B.iter().filter(|x| !A.contains(*x)).any(|x| matroid.can_extend(&set, x)),
                    "{A:?} cannot be augmented from {B:?}");
        }
    }

    // Extension and exchange agree with the full independence test
    for A in &independent {
        let set = matroid.to_subset(A);
        for x in ground.iter().filter(|x| !A.contains(*x)) {
            let mut extended = A.clone();
            extended.push(*x);
            assert_eq!(matroid.can_extend(&set, x), matroid.is_independent_elements(&extended));

            for y in A {
                let exchanged = A.iter().copied().filter(|e| e != y).chain([*x]).collect_vec();
                assert_eq!(matroid.can_exchange(&set, x, y), matroid.is_independent_elements(&exchanged));
            }
        }
    }
}
