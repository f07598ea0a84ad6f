//! Depth-first search over an ordered sequence of roots.
//!
//! # Examples
//!
//! ```
//! use kosaraju_scc::{Graph, core::marker::Direction, visit::Dfs};
//!
//! let graph = Graph::from_edges([("a", "b"), ("b", "c"), ("d", "c")]);
//!
//! let forest = Dfs::new(&graph).run_all();
//! let trees = forest
//!     .trees()
//!     .iter()
//!     .map(|tree| tree.iter().map(|&v| graph[v]).collect::<Vec<_>>())
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(trees, vec![vec!["a", "b", "c"], vec!["d"]]);
//!
//! // The same traversal on the transposed graph.
//! let forest = Dfs::new(&graph).direction(Direction::Incoming).run_all();
//! assert_eq!(forest.trees().len(), 3);
//! ```

use log::trace;

use crate::core::{marker::Direction, Neighbors, VertexId, VertexSet};

use super::{DfsEvent, Time, VertexStates};

/// Depth-first search configured for a graph and a traversal direction.
///
/// The direction is [`Outgoing`](Direction::Outgoing) by default.
#[derive(Debug, Clone)]
pub struct Dfs<'a, G> {
    graph: &'a G,
    dir: Direction,
}

impl<'a, G> Dfs<'a, G>
where
    G: Neighbors + VertexSet + 'a,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            dir: Direction::Outgoing,
        }
    }

    /// Chooses the adjacency that is followed during the traversal.
    pub fn direction(self, dir: Direction) -> Self {
        Self { dir, ..self }
    }

    /// Returns a lazy stream of traversal events starting from given roots.
    ///
    /// Roots are tried in the given order and the ones that have already been
    /// visited are skipped. All roots must be vertices of the graph.
    pub fn events<I>(&self, roots: I) -> DfsEvents<'a, G, I::IntoIter>
    where
        I: IntoIterator<Item = VertexId>,
    {
        DfsEvents::new(self.graph, self.dir, roots)
    }

    /// Runs the traversal from given roots to completion.
    pub fn run<I>(&self, roots: I) -> DfsForest
    where
        I: IntoIterator<Item = VertexId>,
    {
        let mut events = self.events(roots);
        let mut finish_order = Vec::with_capacity(self.graph.vertex_count());
        let mut trees: Vec<Vec<VertexId>> = Vec::new();

        for event in events.by_ref() {
            match event {
                DfsEvent::Open {
                    vertex,
                    predecessor: None,
                    ..
                } => trees.push(vec![vertex]),
                DfsEvent::Open { vertex, .. } => {
                    // A non-root vertex is always preceded by the root of its
                    // tree.
                    if let Some(tree) = trees.last_mut() {
                        tree.push(vertex);
                    }
                }
                DfsEvent::Close { vertex, .. } => finish_order.push(vertex),
            }
        }

        DfsForest {
            finish_order,
            trees,
            states: events.into_states(),
        }
    }

    /// Runs the traversal with all vertices of the graph as roots, in their
    /// insertion order.
    pub fn run_all(&self) -> DfsForest {
        self.run(self.graph.vertices_by_id())
    }
}

struct Frame<I> {
    vertex: VertexId,
    neighbors: I,
}

/// Iterative depth-first search producing [`DfsEvent`]s.
///
/// Every open vertex keeps its partially consumed neighbor iterator on the
/// stack. A vertex is closed only when the iterator is exhausted, so the
/// closing events come in true post-order. Whether a neighbor is unvisited is
/// decided at the moment the neighbor is taken from the iterator, exactly as
/// in the recursive formulation.
pub struct DfsEvents<'a, G, R>
where
    G: Neighbors + 'a,
{
    graph: &'a G,
    dir: Direction,
    roots: R,
    states: VertexStates,
    stack: Vec<Frame<G::NeighborsIter<'a>>>,
    time: usize,
}

impl<'a, G, R> DfsEvents<'a, G, R>
where
    G: Neighbors + VertexSet + 'a,
    R: Iterator<Item = VertexId>,
{
    pub fn new<I>(graph: &'a G, dir: Direction, roots: I) -> Self
    where
        I: IntoIterator<IntoIter = R>,
    {
        Self {
            graph,
            dir,
            roots: roots.into_iter(),
            states: VertexStates::new(graph.vertex_bound()),
            stack: Vec::new(),
            time: 0,
        }
    }
}

impl<'a, G, R> DfsEvents<'a, G, R>
where
    G: Neighbors + 'a,
{
    /// Returns the current state of all vertices.
    pub fn states(&self) -> &VertexStates {
        &self.states
    }

    pub fn into_states(self) -> VertexStates {
        self.states
    }

    /// Returns the time of the last reported event.
    pub fn time(&self) -> Time {
        Time(self.time)
    }

    fn tick(&mut self) -> Time {
        self.time += 1;
        Time(self.time)
    }

    fn open(&mut self, vertex: VertexId, predecessor: Option<VertexId>) -> DfsEvent {
        let time = self.tick();
        self.states.open(vertex, predecessor, time);

        let graph: &'a G = self.graph;
        self.stack.push(Frame {
            vertex,
            neighbors: graph.neighbors_directed(vertex, self.dir),
        });

        DfsEvent::Open {
            vertex,
            predecessor,
            time,
        }
    }

    fn close(&mut self, vertex: VertexId) -> DfsEvent {
        let time = self.tick();
        self.states.close(vertex, time);
        DfsEvent::Close { vertex, time }
    }
}

impl<'a, G, R> Iterator for DfsEvents<'a, G, R>
where
    G: Neighbors + 'a,
    R: Iterator<Item = VertexId>,
{
    type Item = DfsEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let states = &self.states;

        match self.stack.last_mut() {
            Some(frame) => {
                let vertex = frame.vertex;

                match frame.neighbors.find(|&next| states.is_unvisited(next)) {
                    Some(next) => Some(self.open(next, Some(vertex))),
                    None => {
                        self.stack.pop();
                        Some(self.close(vertex))
                    }
                }
            }
            None => {
                let root = self.roots.find(|&root| states.is_unvisited(root))?;
                trace!("dfs: new tree rooted at {root}");
                Some(self.open(root, None))
            }
        }
    }
}

/// Result of a complete depth-first search.
#[derive(Debug, Clone)]
pub struct DfsForest {
    finish_order: Vec<VertexId>,
    trees: Vec<Vec<VertexId>>,
    states: VertexStates,
}

impl DfsForest {
    /// Returns all visited vertices in the order in which they were closed.
    pub fn finish_order(&self) -> &[VertexId] {
        &self.finish_order
    }

    /// Returns the trees of the depth-first forest, one per root that was
    /// unvisited when reached. Every tree lists its vertices in the order of
    /// discovery.
    pub fn trees(&self) -> &[Vec<VertexId>] {
        &self.trees
    }

    pub fn into_trees(self) -> Vec<Vec<VertexId>> {
        self.trees
    }

    pub fn states(&self) -> &VertexStates {
        &self.states
    }

    pub fn discovered(&self, vertex: VertexId) -> Option<Time> {
        self.states.get(vertex).and_then(|state| state.discovered)
    }

    pub fn finished(&self, vertex: VertexId) -> Option<Time> {
        self.states.get(vertex).and_then(|state| state.finished)
    }

    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.states.get(vertex).and_then(|state| state.predecessor)
    }

    /// Returns the path from the vertex back to the root of its tree, following
    /// the predecessor links. The path is empty for a vertex that was not
    /// visited.
    pub fn reconstruct(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let start = self.discovered(vertex).map(|_| vertex);
        std::iter::successors(start, move |&current| self.predecessor(current))
    }
}
