//! Basic types and the traits every bipartite graph storage implements.
//!
//! A bipartite graph with $L$ left and $R$ right vertices uses the vertex ids
//! $0,\ldots,L-1$ for the left side and $L,\ldots,L+R-1$ for the right side. Edges
//! only ever connect the two sides and are reported as `(left, right)` pairs.
use fxhash::{FxHashMap, FxHashSet};
use thiserror::Error;

pub type Vertex = u32;
pub type Edge = (Vertex, Vertex);
pub type VertexSet = FxHashSet<Vertex>;
pub type VertexMap<T> = FxHashMap<Vertex, T>;

/// One of the two vertex classes of a bipartite graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right
}

/// Reasons for rejecting an edge or a graph size.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range, graph has {bound} vertices")]
    VertexOutOfRange { vertex: Vertex, bound: Vertex },
    #[error("vertices {u} and {v} lie on the same side")]
    SameSide { u: Vertex, v: Vertex },
    #[error("a graph with {left} left and {right} right vertices is too large for this storage")]
    TooLarge { left: usize, right: usize },
}

/// Read-only access to a bipartite graph. This is everything the matroid layer
/// needs from a graph: vertex counts, an edge query and neighbour enumeration.
pub trait BipartiteGraph {
    fn num_left(&self) -> usize;
    fn num_right(&self) -> usize;
    fn num_edges(&self) -> usize;

    fn num_vertices(&self) -> usize {
        self.num_left() + self.num_right()
    }

    /// Returns the side `u` lies on, or `None` if `u` is not a vertex of the graph.
    fn side_of(&self, u:&Vertex) -> Option<Side> {
        let u = *u as usize;
        if u < self.num_left() {
            Some(Side::Left)
        } else if u < self.num_vertices() {
            Some(Side::Right)
        } else {
            None
        }
    }

    fn contains(&self, u:&Vertex) -> bool {
        self.side_of(u).is_some()
    }

    /// Edge-existence query. The order of `u` and `v` does not matter.
    fn adjacent(&self, u:&Vertex, v:&Vertex) -> bool;

    fn degree(&self, u:&Vertex) -> usize {
        self.neighbours(u).count()
    }

    /// Iterates over the neighbours of `u` in ascending order.
    ///
    /// Panics if `u` is not a vertex of the graph.
    fn neighbours<'a>(&'a self, u:&Vertex) -> Box<dyn Iterator<Item=Vertex> + 'a>;

    /// Iterates over all edges as `(left, right)` pairs in ascending order.
    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item=Edge> + 'a> {
        let left = self.num_left() as Vertex;
        Box::new((0..left).flat_map(move |u| self.neighbours(&u).map(move |v| (u,v))))
    }
}

pub trait MutableBipartiteGraph: BipartiteGraph {
    /// Creates a graph with `left` left and `right` right vertices and no edges.
    fn new(left:usize, right:usize) -> Self;

    /// Checks that a graph with `left` left and `right` right vertices can be
    /// created by [new](MutableBipartiteGraph::new). All vertex ids must fit into
    /// a [Vertex].
    fn check_size(left:usize, right:usize) -> Result<(), GraphError> {
        match left.checked_add(right) {
            Some(n) if n <= Vertex::MAX as usize => Ok(()),
            _ => Err(GraphError::TooLarge { left, right })
        }
    }

    /// Adds the edge $uv$. The endpoints may be given in either order.
    ///
    /// Returns `Ok(false)` if the edge already exists.
    fn add_edge(&mut self, u:&Vertex, v:&Vertex) -> Result<bool, GraphError>;

    fn remove_edge(&mut self, u:&Vertex, v:&Vertex) -> bool;

    /// Adds all `edges` and returns how many of them were new.
    fn add_edges<I>(&mut self, edges:I) -> Result<usize, GraphError> where I: IntoIterator<Item=Edge> {
        let mut res = 0;
        for (u,v) in edges {
            if self.add_edge(&u, &v)? {
                res += 1;
            }
        }
        Ok(res)
    }

    /// Puts `u` and `v` into `(left, right)` order, or explains why $uv$ cannot
    /// be an edge of this graph.
    fn normalize_edge(&self, u:&Vertex, v:&Vertex) -> Result<Edge, GraphError> {
        let bound = self.num_vertices() as Vertex;
        let side_u = self.side_of(u).ok_or(GraphError::VertexOutOfRange{ vertex: *u, bound })?;
        let side_v = self.side_of(v).ok_or(GraphError::VertexOutOfRange{ vertex: *v, bound })?;
        match (side_u, side_v) {
            (Side::Left, Side::Right) => Ok((*u, *v)),
            (Side::Right, Side::Left) => Ok((*v, *u)),
            _ => Err(GraphError::SameSide{ u: *u, v: *v })
        }
    }
}
