use super::{id::VertexId, marker::Direction};

/// Access to the adjacency of vertices.
///
/// Neighbors must be reported in the order in which the corresponding edges
/// were added. Parallel edges report the same neighbor multiple times and a
/// self-loop reports the vertex itself.
pub trait Neighbors {
    type NeighborsIter<'a>: Iterator<Item = VertexId>
    where
        Self: 'a;

    fn neighbors_directed(&self, src: VertexId, dir: Direction) -> Self::NeighborsIter<'_>;

    fn degree_directed(&self, id: VertexId, dir: Direction) -> usize {
        self.neighbors_directed(id, dir).count()
    }
}
