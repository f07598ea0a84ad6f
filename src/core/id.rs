//! Identifiers of vertices stored in a graph.
//!
//! Vertices are stored in an arena and addressed by their position in it. The
//! external name of a vertex is an attribute of the vertex and is translated to
//! [`VertexId`] by the graph (see [`Graph::find_vertex`]).
//!
//! [`Graph::find_vertex`]: crate::graph::Graph::find_vertex

use std::fmt;

/// A position of a vertex in the graph arena.
///
/// IDs are assigned contiguously from zero in the order in which the vertices
/// were added, so they can be used for indexing into per-vertex tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    #[inline]
    pub const fn from_usize(id: usize) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn as_usize(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        Self::from_usize(id)
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.as_usize()
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
