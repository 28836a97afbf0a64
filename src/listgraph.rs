//!
//! Bipartite graph stored as one sorted adjacency set per vertex. This is the
//! storage of choice for sparse graphs, the struct also offers a few constructors
//! for named graphs:
//!
//! ```rust
//! use matroidmatch::graph::*;
//! use matroidmatch::listgraph::ListGraph;
//!
//! fn main() {
//!     let graph = ListGraph::matching(3);
//!     assert_eq!(graph.edges().collect::<Vec<Edge>>(), vec![(0,3),(1,4),(2,5)]);
//!
//!     let graph = ListGraph::biclique(2, 2);
//!     assert_eq!(graph.edges().collect::<Vec<Edge>>(), vec![(0,2),(0,3),(1,2),(1,3)]);
//!
//!     let graph = ListGraph::from_edges(2, 3, vec![(0,2),(1,2)]).unwrap();
//!     assert_eq!(graph.degree(&2), 2);
//! }
//! ```
use std::collections::BTreeSet;

use crate::graph::*;

/// An implementation of the [MutableBipartiteGraph] trait backed by adjacency sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListGraph {
    left: usize,
    adj: Vec<BTreeSet<Vertex>>,
    m: usize
}

impl BipartiteGraph for ListGraph {
    fn num_left(&self) -> usize {
        self.left
    }

    fn num_right(&self) -> usize {
        self.adj.len() - self.left
    }

    fn num_edges(&self) -> usize {
        self.m
    }

    fn adjacent(&self, u:&Vertex, v:&Vertex) -> bool {
        match self.adj.get(*u as usize) {
            Some(N) => N.contains(v),
            None => false
        }
    }

    fn degree(&self, u:&Vertex) -> usize {
        self.adj.get(*u as usize).map_or(0, |N| N.len())
    }

    fn neighbours<'a>(&'a self, u:&Vertex) -> Box<dyn Iterator<Item=Vertex> + 'a> {
        match self.adj.get(*u as usize) {
            Some(N) => Box::new(N.iter().copied()),
            None => panic!("Vertex {u} not contained in ListGraph")
        }
    }
}

impl MutableBipartiteGraph for ListGraph {
    fn new(left:usize, right:usize) -> Self {
        ListGraph { left, adj: vec![BTreeSet::new(); left+right], m: 0 }
    }

    fn add_edge(&mut self, u:&Vertex, v:&Vertex) -> Result<bool, GraphError> {
        let (l, r) = self.normalize_edge(u, v)?;
        if !self.adj[l as usize].insert(r) {
            return Ok(false)
        }
        self.adj[r as usize].insert(l);
        self.m += 1;
        Ok(true)
    }

    fn remove_edge(&mut self, u:&Vertex, v:&Vertex) -> bool {
        if !self.adjacent(u, v) {
            return false
        }
        self.adj[*u as usize].remove(v);
        self.adj[*v as usize].remove(u);
        self.m -= 1;
        true
    }
}

impl ListGraph {
    /// Creates a graph on `left`+`right` vertices containing `edges`.
    pub fn from_edges<I>(left:usize, right:usize, edges:I) -> Result<ListGraph, GraphError>
        where I: IntoIterator<Item=Edge> {
        let mut res = ListGraph::new(left, right);
        res.add_edges(edges)?;
        Ok(res)
    }

    /// Generates a complete bipartite graph (biclique) on `s`+`t` vertices.
    pub fn biclique(s:usize, t:usize) -> ListGraph {
        let mut res = ListGraph::new(s, t);
        for u in 0..s {
            for v in s..(s+t) {
                res.adj[u].insert(v as Vertex);
                res.adj[v].insert(u as Vertex);
            }
        }
        res.m = s * t;

        res
    }

    /// Generates a perfect matching on `2n` vertices, pairing `i` with `n+i`.
    pub fn matching(n:usize) -> ListGraph {
        let mut res = ListGraph::new(n, n);
        for u in 0..n {
            let v = u+n;
            res.adj[u].insert(v as Vertex);
            res.adj[v].insert(u as Vertex);
        }
        res.m = n;

        res
    }

    /// Creates a copy of any bipartite graph with the same vertex counts and edges.
    pub fn copy_of(graph: &impl BipartiteGraph) -> ListGraph {
        let mut res = ListGraph::new(graph.num_left(), graph.num_right());
        for (u, v) in graph.edges() {
            res.adj[u as usize].insert(v);
            res.adj[v as usize].insert(u);
            res.m += 1;
        }
        res
    }
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
