use super::id::VertexId;

/// Enumeration of the vertices of a graph.
pub trait VertexSet {
    type VerticesByIdIter<'a>: Iterator<Item = VertexId>
    where
        Self: 'a;

    /// Returns the IDs of all vertices in the order of insertion.
    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_>;

    fn vertex_count(&self) -> usize;

    /// Returns an upper bound of vertex IDs, that is, every ID satisfies
    /// `id.as_usize() < vertex_bound()`.
    ///
    /// Traversals use it to size their per-vertex tables.
    fn vertex_bound(&self) -> usize {
        self.vertex_count()
    }

    fn contains_vertex_id(&self, id: VertexId) -> bool {
        id.as_usize() < self.vertex_bound()
    }
}
