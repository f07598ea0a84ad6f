//! Directed graph with named vertices.
//!
//! [`Graph`] owns all vertices in a single arena. Every vertex record keeps
//! both its outgoing and its incoming adjacency, so the graph can be traversed
//! forward as well as transposed without building a second graph. Vertex
//! names are unique and are mapped to [`VertexId`]s by an index.
//!
//! # Examples
//!
//! ```
//! use kosaraju_scc::{Graph, core::marker::Direction, core::Neighbors};
//!
//! let mut graph = Graph::new();
//!
//! let a = graph.add_vertex("a").unwrap();
//! let b = graph.add_vertex("b").unwrap();
//!
//! graph.add_edge(&"a", &"b").unwrap();
//! assert!(graph.add_edge(&"a", &"c").is_err());
//!
//! let outgoing = graph.neighbors_directed(a, Direction::Outgoing).collect::<Vec<_>>();
//! let incoming = graph.neighbors_directed(b, Direction::Incoming).collect::<Vec<_>>();
//!
//! assert_eq!(outgoing, vec![b]);
//! assert_eq!(incoming, vec![a]);
//! ```

use std::{borrow::Borrow, hash::Hash, iter::Copied, ops::Index, slice};

use rustc_hash::FxHashMap;

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind, AddVertexError, AddVertexErrorKind},
    marker::Direction,
    Neighbors, VertexId, VertexSet,
};

#[derive(Debug, Clone)]
struct VertexData<V> {
    name: V,
    // Indexed by `Direction::index`.
    adjacency: [Vec<VertexId>; 2],
}

impl<V> VertexData<V> {
    fn new(name: V) -> Self {
        Self {
            name,
            adjacency: [Vec::new(), Vec::new()],
        }
    }
}

/// Directed graph with unique vertex names of type `V`.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    vertices: Vec<VertexData<V>>,
    names: FxHashMap<V, VertexId>,
    edge_count: usize,
}

impl<V> Graph<V> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            names: FxHashMap::default(),
            edge_count: 0,
        }
    }

    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            names: FxHashMap::with_capacity_and_hasher(vertex_count, Default::default()),
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the name of the vertex, or `None` if the ID does not belong to
    /// this graph.
    pub fn vertex(&self, id: VertexId) -> Option<&V> {
        self.vertices.get(id.as_usize()).map(|data| &data.name)
    }

    /// Returns the vertices together with their names in the order of
    /// insertion.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &V)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(index, data)| (VertexId::from_usize(index), &data.name))
    }

    /// Adds an edge between two vertices given by their IDs.
    ///
    /// # Panics
    ///
    /// Panics if any of the IDs does not belong to this graph.
    pub fn add_edge_by_id(&mut self, from: VertexId, to: VertexId) {
        assert!(
            self.contains_vertex_id(from) && self.contains_vertex_id(to),
            "vertex id out of bounds"
        );

        self.vertices[from.as_usize()].adjacency[Direction::Outgoing.index()].push(to);
        self.vertices[to.as_usize()].adjacency[Direction::Incoming.index()].push(from);
        self.edge_count += 1;
    }
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash,
{
    /// Creates a graph from a sequence of edges given by vertex names.
    ///
    /// Vertices are created on their first mention, so their IDs follow the
    /// order in which they appear in the sequence.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        graph.extend_with_edges(edges);
        graph
    }

    /// Adds a vertex with given name.
    ///
    /// Vertex names are unique. If there already is a vertex with the name,
    /// the graph is left untouched and the name is returned back in the error.
    pub fn add_vertex(&mut self, name: V) -> Result<VertexId, AddVertexError<V>> {
        if self.names.contains_key(&name) {
            return Err(AddVertexError::new(
                name,
                AddVertexErrorKind::DuplicateVertex,
            ));
        }

        Ok(self.push_vertex(name))
    }

    /// Returns the ID of the vertex with given name, adding the vertex first
    /// if it does not exist yet.
    pub fn get_or_add_vertex(&mut self, name: V) -> VertexId {
        match self.names.get(&name) {
            Some(id) => *id,
            None => self.push_vertex(name),
        }
    }

    /// Adds an edge between two existing vertices given by their names.
    ///
    /// Parallel edges and self-loops are allowed.
    pub fn add_edge(&mut self, from: &V, to: &V) -> Result<(), AddEdgeError<V>> {
        let src = self.names.get(from).copied();
        let dst = self.names.get(to).copied();

        match (src, dst) {
            (Some(src), Some(dst)) => {
                self.add_edge_by_id(src, dst);
                Ok(())
            }
            (None, _) => Err(AddEdgeError::new(
                from.clone(),
                to.clone(),
                AddEdgeErrorKind::SourceAbsent,
            )),
            (_, None) => Err(AddEdgeError::new(
                from.clone(),
                to.clone(),
                AddEdgeErrorKind::DestinationAbsent,
            )),
        }
    }

    /// Adds edges given by vertex names, creating the vertices on their first
    /// mention.
    pub fn extend_with_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (V, V)>,
    {
        for (from, to) in edges {
            let from = self.get_or_add_vertex(from);
            let to = self.get_or_add_vertex(to);
            self.add_edge_by_id(from, to);
        }
    }

    pub fn find_vertex<Q>(&self, name: &Q) -> Option<VertexId>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.names.get(name).copied()
    }

    pub fn contains_vertex<Q>(&self, name: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.names.contains_key(name)
    }

    fn push_vertex(&mut self, name: V) -> VertexId {
        let id = VertexId::from_usize(self.vertices.len());
        self.names.insert(name.clone(), id);
        self.vertices.push(VertexData::new(name));
        id
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Index<VertexId> for Graph<V> {
    type Output = V;

    fn index(&self, id: VertexId) -> &Self::Output {
        &self.vertices[id.as_usize()].name
    }
}

impl<V> Neighbors for Graph<V> {
    type NeighborsIter<'a> = Copied<slice::Iter<'a, VertexId>>
    where
        Self: 'a;

    fn neighbors_directed(&self, src: VertexId, dir: Direction) -> Self::NeighborsIter<'_> {
        self.vertices[src.as_usize()].adjacency[dir.index()]
            .iter()
            .copied()
    }

    fn degree_directed(&self, id: VertexId, dir: Direction) -> usize {
        self.vertices[id.as_usize()].adjacency[dir.index()].len()
    }
}

impl<V> VertexSet for Graph<V> {
    type VerticesByIdIter<'a> = VerticesByIdIter
    where
        Self: 'a;

    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
        VerticesByIdIter {
            range: 0..self.vertices.len(),
        }
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

pub struct VerticesByIdIter {
    range: std::ops::Range<usize>,
}

impl Iterator for VerticesByIdIter {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(VertexId::from_usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for VerticesByIdIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(VertexId::from_usize)
    }
}

impl ExactSizeIterator for VerticesByIdIter {}
