use crate::graph::Graph;

use super::{algo, kosaraju::kosaraju, AlgoStrong, StronglyConnectedComponents};

pub struct StronglyConnectedComponentsBuilder<'a, V, A> {
    graph: &'a Graph<V>,
    algo: A,
}

impl<V> StronglyConnectedComponents<V> {
    /// Starts the configuration of the computation on given graph.
    ///
    /// Finish with [`run`](StronglyConnectedComponentsBuilder::run).
    pub fn on(graph: &Graph<V>) -> StronglyConnectedComponentsBuilder<'_, V, algo::AnyAlgo> {
        StronglyConnectedComponentsBuilder {
            graph,
            algo: algo::AnyAlgo,
        }
    }
}

impl<'a, V, A> StronglyConnectedComponentsBuilder<'a, V, A> {
    /// Chooses the Kosaraju's algorithm.
    ///
    /// See [`AlgoStrong::Kosaraju`] for details.
    pub fn kosaraju(self) -> StronglyConnectedComponentsBuilder<'a, V, algo::Kosaraju> {
        StronglyConnectedComponentsBuilder {
            graph: self.graph,
            algo: algo::Kosaraju,
        }
    }

    /// Chooses the algorithm explicitly.
    pub fn using(
        self,
        algo: AlgoStrong,
    ) -> StronglyConnectedComponentsBuilder<'a, V, algo::SpecificAlgoStrong> {
        StronglyConnectedComponentsBuilder {
            graph: self.graph,
            algo: algo::SpecificAlgoStrong(Some(algo)),
        }
    }

    /// Chooses the algorithm explicitly if `Some`, lets the library choose
    /// otherwise.
    pub fn using_opt(
        self,
        algo: Option<AlgoStrong>,
    ) -> StronglyConnectedComponentsBuilder<'a, V, algo::SpecificAlgoStrong> {
        StronglyConnectedComponentsBuilder {
            graph: self.graph,
            algo: algo::SpecificAlgoStrong(algo),
        }
    }
}

impl<'a, V, A> StronglyConnectedComponentsBuilder<'a, V, A>
where
    V: Clone + Ord,
{
    fn run_kosaraju(self) -> StronglyConnectedComponents<V> {
        StronglyConnectedComponents::from_forest(self.graph, kosaraju(self.graph))
    }
}

impl<'a, V> StronglyConnectedComponentsBuilder<'a, V, algo::AnyAlgo>
where
    V: Clone + Ord,
{
    /// Computes the components.
    pub fn run(self) -> StronglyConnectedComponents<V> {
        self.run_kosaraju()
    }
}

impl<'a, V> StronglyConnectedComponentsBuilder<'a, V, algo::Kosaraju>
where
    V: Clone + Ord,
{
    /// Computes the components.
    pub fn run(self) -> StronglyConnectedComponents<V> {
        self.run_kosaraju()
    }
}

impl<'a, V> StronglyConnectedComponentsBuilder<'a, V, algo::SpecificAlgoStrong>
where
    V: Clone + Ord,
{
    /// Computes the components.
    pub fn run(self) -> StronglyConnectedComponents<V> {
        match self.algo.0 {
            Some(AlgoStrong::Kosaraju) | None => self.run_kosaraju(),
        }
    }
}
