//! Find [strongly connected
//! components](https://en.wikipedia.org/wiki/Strongly_connected_component) in a
//! directed graph.
//!
//! The components are normalized for easy comparison: the names within every
//! component are sorted in ascending order and the components are sorted by
//! their smallest member.
//!
//! # Examples
//!
//! ```
//! use kosaraju_scc::{Graph, algo::{StronglyConnectedComponents, is_strongly_connected}};
//!
//! let graph = Graph::from_edges([(1, 2), (2, 3), (3, 1), (3, 4), (4, 4)]);
//!
//! let components = StronglyConnectedComponents::on(&graph).kosaraju().run();
//!
//! assert_eq!(components.len(), 2);
//! assert_eq!(components.component_of(&2), Some(&[1, 2, 3][..]));
//! assert_eq!(components.into_inner(), vec![vec![1, 2, 3], vec![4]]);
//!
//! assert!(!is_strongly_connected(&graph));
//! ```

use crate::{core::VertexId, graph::Graph};

mod builder;
mod kosaraju;

pub use builder::StronglyConnectedComponentsBuilder;

/// Strongly connected components of a graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StronglyConnectedComponents<V> {
    components: Vec<Vec<V>>,
}

impl<V> StronglyConnectedComponents<V> {
    /// Returns the number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if there are no components, which happens only for an
    /// empty graph.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns an iterator of the components.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.components.iter(),
        }
    }

    pub fn into_inner(self) -> Vec<Vec<V>> {
        self.components
    }
}

impl<V> StronglyConnectedComponents<V>
where
    V: Clone + Ord,
{
    fn from_forest(graph: &Graph<V>, forest: Vec<Vec<VertexId>>) -> Self {
        let mut components = forest
            .into_iter()
            .map(|tree| {
                let mut component = tree
                    .into_iter()
                    .map(|vertex| graph[vertex].clone())
                    .collect::<Vec<_>>();
                component.sort();
                component
            })
            .collect::<Vec<_>>();

        // Components are disjoint and non-empty, so their first members are
        // distinct.
        components.sort_by(|lhs, rhs| lhs.first().cmp(&rhs.first()));

        Self { components }
    }

    /// Returns the component containing the vertex with given name.
    pub fn component_of(&self, name: &V) -> Option<&[V]> {
        self.components
            .iter()
            .find(|component| component.binary_search(name).is_ok())
            .map(Vec::as_slice)
    }
}

impl<V> IntoIterator for StronglyConnectedComponents<V> {
    type Item = Vec<V>;
    type IntoIter = std::vec::IntoIter<Vec<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a StronglyConnectedComponents<V> {
    type Item = &'a [V];
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, V> {
    inner: std::slice::Iter<'a, Vec<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a [V];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|component| component.as_slice())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

/// Algorithm for [`StronglyConnectedComponents`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlgoStrong {
    /// [Kosaraju's
    /// algorithm](https://en.wikipedia.org/wiki/Kosaraju%27s_algorithm).
    ///
    /// Kosaraju's algorithm has two passes, one DFS pass on the graph
    /// collecting the sequence of closed vertices and one DFS pass on the
    /// transposed graph traversing the graph in the reversed order of vertices
    /// collected in the first pass. Every tree of the second pass is one
    /// component.
    ///
    /// # Use cases
    ///
    /// * Finding groups where elements transitively depend on each other.
    Kosaraju,
}

mod algo {
    use super::AlgoStrong;

    #[derive(Debug)]
    pub struct AnyAlgo;

    #[derive(Debug)]
    pub struct SpecificAlgoStrong(pub Option<AlgoStrong>);

    #[derive(Debug)]
    pub struct Kosaraju;
}

/// Computes the strongly connected components of the graph.
///
/// Shorthand for `StronglyConnectedComponents::on(graph).run().into_inner()`.
pub fn compute_scc<V>(graph: &Graph<V>) -> Vec<Vec<V>>
where
    V: Clone + Ord,
{
    StronglyConnectedComponents::on(graph).run().into_inner()
}

/// Returns `true` if every vertex is reachable from every other vertex.
///
/// A graph without vertices is not strongly connected, because it has no
/// component.
pub fn is_strongly_connected<V>(graph: &Graph<V>) -> bool
where
    V: Clone + Ord,
{
    StronglyConnectedComponents::on(graph).run().len() == 1
}
