use arbitrary::Arbitrary;

use crate::graph::Graph;

/// Fuzzing input: a sequence of edges given by vertex names.
///
/// Vertices are created on their first mention, as with
/// [`Graph::from_edges`].
#[derive(Debug, Arbitrary, Clone, PartialEq, Eq)]
pub struct EdgeList(pub Vec<(u8, u8)>);

impl EdgeList {
    pub fn into_graph(self) -> Graph<u8> {
        Graph::from_edges(self.0)
    }
}

#[cfg(test)]
mod tests {
    use arbitrary::Unstructured;

    use crate::{algo::compute_scc, infra::testing::check_components};

    use super::*;

    #[test]
    fn arbitrary_edge_list() {
        let bytes = (0..=255u8).rev().cycle().take(1024).collect::<Vec<_>>();
        let mut u = Unstructured::new(&bytes);

        let edges = EdgeList::arbitrary(&mut u).unwrap();
        let graph = edges.clone().into_graph();

        assert_eq!(graph.edge_count(), edges.0.len());

        let components = compute_scc(&graph);
        assert_eq!(check_components(&graph, &components), Ok(()));
    }
}
