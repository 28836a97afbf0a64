//! Maximum matchings of bipartite graphs computed by matroid intersection.
//!
//! A set of edges of a bipartite graph is a matching if and only if it is
//! independent in two partition matroids: the one whose blocks are the edges
//! around each left vertex and the one whose blocks are the edges around each
//! right vertex. This crate provides
//!
//! - bipartite graph storages ([matrixgraph::MatrixGraph], [listgraph::ListGraph]),
//! - the [matroid::Matroid] oracle interface,
//! - two partition matroids for one side of a bipartite graph, a reference
//!   implementation that scans its input ([naive::NaivePartitionMatroid]) and one
//!   that keeps an index ([indexed::IndexedPartitionMatroid]),
//! - a generic matroid intersection algorithm ([intersect::intersect]).
//!
//! ```rust
//! use matroidmatch::graph::*;
//! use matroidmatch::listgraph::ListGraph;
//! use matroidmatch::matching::*;
//!
//! fn main() {
//!     let mut graph = ListGraph::new(3, 3);
//!     graph.add_edges(vec![(0,3),(0,4),(1,4),(2,5)]).unwrap();
//!
//!     let matching = graph.indexed_matroid_matching();
//!     assert_eq!(matching.len(), 3);
//!     assert!(is_matching(&graph, &matching));
//! }
//! ```
#![allow(non_snake_case)]

pub mod graph;
pub mod matrixgraph;
pub mod listgraph;
pub mod io;
pub mod matroid;
pub mod partition;
pub mod naive;
pub mod indexed;
pub mod intersect;
pub mod matching;

#[cfg(test)]
mod testing;
