use proptest::{collection::vec, prelude::*};

use crate::{core::VertexId, graph::Graph};

/// Parameters of random directed graphs.
#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_size: usize,
    max_degree: usize,
    allow_loops: bool,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 24,
            max_degree: 3,
            allow_loops: true,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    /// Average number of edges per vertex is at most `max_degree`.
    pub fn max_degree(self, max_degree: usize) -> Self {
        Self { max_degree, ..self }
    }

    pub fn allow_loops(self, allow_loops: bool) -> Self {
        Self {
            allow_loops,
            ..self
        }
    }
}

/// Random directed graphs with vertices named `0..n` in the insertion order.
/// Parallel edges may appear.
pub fn graph_directed() -> impl Strategy<Value = Graph<u32>> {
    graph_directed_with(StrategyParams::default())
}

pub fn graph_directed_with(params: StrategyParams) -> impl Strategy<Value = Graph<u32>> {
    let StrategyParams {
        max_size,
        max_degree,
        allow_loops,
    } = params;

    (0..=max_size)
        .prop_flat_map(move |n| {
            // Empty ranges are not valid strategies, the bound is never used
            // for an empty graph though, because there are no edges then.
            let bound = n.max(1) as u32;
            let max_edges = n * max_degree;
            (Just(n), vec((0..bound, 0..bound), 0..=max_edges))
        })
        .prop_map(move |(n, edges)| {
            let mut graph = Graph::with_capacity(n);

            for name in 0..n as u32 {
                graph.get_or_add_vertex(name);
            }

            for (from, to) in edges {
                if from == to && !allow_loops {
                    continue;
                }

                graph.add_edge_by_id(
                    VertexId::from_usize(from as usize),
                    VertexId::from_usize(to as usize),
                );
            }

            graph
        })
}
