//! Shared plumbing of the two partition matroids defined on one side of a
//! bipartite graph.
//!
//! The ground set is the edge set of the graph. Every vertex on the designated
//! side defines one block of the partition, namely the edges incident to it, and a
//! set of edges is independent if it contains at most one edge of every block.
use crate::graph::*;

#[derive(Debug)]
pub struct SideBlocks<'a, G> where G: BipartiteGraph {
    graph: &'a G,
    side: Side
}

impl<'a, G> SideBlocks<'a, G> where G: BipartiteGraph {
    pub fn new(graph: &'a G, side:Side) -> Self {
        SideBlocks { graph, side }
    }

    /// Number of blocks, i.e. the number of vertices on the designated side.
    pub fn num_blocks(&self) -> usize {
        match self.side {
            Side::Left => self.graph.num_left(),
            Side::Right => self.graph.num_right()
        }
    }

    /// The endpoint of `e` on the designated side. Left ids are always smaller
    /// than right ids, so either orientation of `e` works.
    #[inline]
    pub fn endpoint(&self, e:&Edge) -> Vertex {
        match self.side {
            Side::Left => Vertex::min(e.0, e.1),
            Side::Right => Vertex::max(e.0, e.1)
        }
    }

    /// Position of the block containing `e` in $0,\ldots,$ `num_blocks()`$-1$.
    #[inline]
    pub fn block_index(&self, e:&Edge) -> usize {
        let v = self.endpoint(e) as usize;
        match self.side {
            Side::Left => v,
            Side::Right => v - self.graph.num_left()
        }
    }

    /// All edges of the graph in ascending order.
    pub fn ground_set(&self) -> Vec<Edge> {
        let mut res = Vec::with_capacity(self.graph.num_edges());
        res.extend(self.graph.edges());
        res.sort_unstable();
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
