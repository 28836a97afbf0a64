//! Bipartite graph stored as an $L \times R$ adjacency bit matrix.
//!
//! Edge queries take $O(1)$ time, enumerating the neighbours of a vertex takes
//! time linear in the size of the opposite side.
use bitvec::prelude::*;

use crate::graph::*;

type AdjacencyBits = BitVec<u64, Lsb0>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGraph {
    left: usize,
    right: usize,
    bits: AdjacencyBits,
    m: usize
}

impl MatrixGraph {
    fn cell(&self, (l, r):Edge) -> usize {
        (l as usize) * self.right + (r as usize - self.left)
    }

    /// The adjacency of $uv$ as a matrix cell, or `None` if $uv$ cannot be an edge.
    fn cell_of(&self, u:&Vertex, v:&Vertex) -> Option<usize> {
        self.normalize_edge(u, v).ok().map(|e| self.cell(e))
    }
}

impl BipartiteGraph for MatrixGraph {
    fn num_left(&self) -> usize {
        self.left
    }

    fn num_right(&self) -> usize {
        self.right
    }

    fn num_edges(&self) -> usize {
        self.m
    }

    fn adjacent(&self, u:&Vertex, v:&Vertex) -> bool {
        match self.cell_of(u, v) {
            Some(ix) => self.bits[ix],
            None => false
        }
    }

    fn neighbours<'a>(&'a self, u:&Vertex) -> Box<dyn Iterator<Item=Vertex> + 'a> {
        let u = *u;
        match self.side_of(&u) {
            Some(Side::Left) => {
                let start = (u as usize) * self.right;
                let row = &self.bits[start..start+self.right];
                let offset = self.left as Vertex;
                Box::new(row.iter_ones().map(move |j| j as Vertex + offset))
            },
            Some(Side::Right) => {
                let col = u as usize - self.left;
                Box::new((0..self.left)
                    .filter(move |i| self.bits[i*self.right + col])
                    .map(|i| i as Vertex))
            },
            None => panic!("Vertex {u} not contained in MatrixGraph")
        }
    }
}

impl MutableBipartiteGraph for MatrixGraph {
    fn new(left:usize, right:usize) -> Self {
        MatrixGraph { left, right, bits: bitvec![u64, Lsb0; 0; left*right], m: 0 }
    }

    /// Besides the vertex ids, all `left * right` matrix cells must fit into a bit-vector.
    fn check_size(left:usize, right:usize) -> Result<(), GraphError> {
        match left.checked_add(right).zip(left.checked_mul(right)) {
            Some((n, cells)) if n <= Vertex::MAX as usize && cells <= BitSlice::<u64, Lsb0>::MAX_BITS => Ok(()),
            _ => Err(GraphError::TooLarge { left, right })
        }
    }

    fn add_edge(&mut self, u:&Vertex, v:&Vertex) -> Result<bool, GraphError> {
        let ix = self.cell(self.normalize_edge(u, v)?);
        if self.bits[ix] {
            return Ok(false)
        }
        self.bits.set(ix, true);
        self.m += 1;
        Ok(true)
    }

    fn remove_edge(&mut self, u:&Vertex, v:&Vertex) -> bool {
        match self.cell_of(u, v) {
            Some(ix) if self.bits[ix] => {
                self.bits.set(ix, false);
                self.m -= 1;
                true
            },
            _ => false
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
