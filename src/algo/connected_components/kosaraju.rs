use log::debug;

use crate::{
    core::{marker::Direction, Neighbors, VertexId, VertexSet},
    visit::Dfs,
};

pub fn kosaraju<G>(graph: &G) -> Vec<Vec<VertexId>>
where
    G: Neighbors + VertexSet,
{
    let first = Dfs::new(graph)
        .direction(Direction::Outgoing)
        .run(graph.vertices_by_id());

    debug!(
        "kosaraju: first pass closed {} vertices in {} trees",
        first.finish_order().len(),
        first.trees().len()
    );

    // Vertices that were closed last in the first pass are the roots of the
    // second pass. Traversing the incoming edges is the traversal of the
    // transposed graph.
    let roots = first.finish_order().iter().rev().copied();
    let second = Dfs::new(graph).direction(Direction::Incoming).run(roots);

    debug!(
        "kosaraju: second pass found {} components",
        second.trees().len()
    );

    second.into_trees()
}
