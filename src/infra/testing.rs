use std::{collections::VecDeque, fmt::Debug, hash::Hash};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    core::{marker::Direction, Neighbors, VertexId, VertexSet},
    graph::Graph,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComponentsError<V> {
    #[error("vertex {0:?} does not exist in the graph")]
    Unknown(V),
    #[error("vertex {0:?} is in more than one component")]
    Duplicated(V),
    #[error("vertex {0:?} is not in any component")]
    Uncovered(V),
    #[error("component is empty")]
    Empty,
    #[error("vertices {0:?} and {1:?} share a component but are not mutually reachable")]
    NotStronglyConnected(V, V),
    #[error("vertices {0:?} and {1:?} are mutually reachable but in different components")]
    NotMaximal(V, V),
    #[error("component {0:?} is not sorted")]
    UnsortedComponent(Vec<V>),
    #[error("components are not sorted by their smallest member")]
    UnsortedComponents,
}

/// Returns a matrix where `reach[u][v]` tells whether `v` is reachable from
/// `u`. Every vertex is reachable from itself.
pub fn reachability<G>(graph: &G) -> Vec<Vec<bool>>
where
    G: Neighbors + VertexSet,
{
    let n = graph.vertex_bound();
    let mut reach = vec![vec![false; n]; n];
    let mut queue = VecDeque::new();

    for root in graph.vertices_by_id() {
        let row = &mut reach[root.as_usize()];
        row[root.as_usize()] = true;
        queue.push_back(root);

        while let Some(u) = queue.pop_front() {
            for v in graph.neighbors_directed(u, Direction::Outgoing) {
                if !row[v.as_usize()] {
                    row[v.as_usize()] = true;
                    queue.push_back(v);
                }
            }
        }
    }

    reach
}

/// Computes normalized strongly connected components directly from the
/// definition of mutual reachability.
pub fn scc_brute_force<V>(graph: &Graph<V>) -> Vec<Vec<V>>
where
    V: Clone + Ord,
{
    let reach = reachability(graph);
    let mut assigned = vec![false; graph.vertex_count()];
    let mut components = Vec::new();

    for u in graph.vertices_by_id() {
        if assigned[u.as_usize()] {
            continue;
        }

        let mut component = Vec::new();

        for v in graph.vertices_by_id() {
            if reach[u.as_usize()][v.as_usize()] && reach[v.as_usize()][u.as_usize()] {
                assigned[v.as_usize()] = true;
                component.push(graph[v].clone());
            }
        }

        component.sort();
        components.push(component);
    }

    components.sort();
    components
}

/// Checks that the components are a correctly normalized partition of the
/// graph vertices into strongly connected components.
pub fn check_components<V>(graph: &Graph<V>, components: &[Vec<V>]) -> Result<(), ComponentsError<V>>
where
    V: Clone + Ord + Hash + Debug,
{
    let mut membership = FxHashMap::<VertexId, usize>::default();

    for (index, component) in components.iter().enumerate() {
        if component.is_empty() {
            return Err(ComponentsError::Empty);
        }

        for name in component {
            let vertex = graph
                .find_vertex(name)
                .ok_or_else(|| ComponentsError::Unknown(name.clone()))?;

            if membership.insert(vertex, index).is_some() {
                return Err(ComponentsError::Duplicated(name.clone()));
            }
        }
    }

    if let Some((_, name)) = graph
        .vertices()
        .find(|(vertex, _)| !membership.contains_key(vertex))
    {
        return Err(ComponentsError::Uncovered(name.clone()));
    }

    let reach = reachability(graph);

    for u in graph.vertices_by_id() {
        for v in graph.vertices_by_id() {
            let mutual = reach[u.as_usize()][v.as_usize()] && reach[v.as_usize()][u.as_usize()];
            let same = membership[&u] == membership[&v];

            if same && !mutual {
                return Err(ComponentsError::NotStronglyConnected(
                    graph[u].clone(),
                    graph[v].clone(),
                ));
            }

            if mutual && !same {
                return Err(ComponentsError::NotMaximal(
                    graph[u].clone(),
                    graph[v].clone(),
                ));
            }
        }
    }

    if let Some(component) = components
        .iter()
        .find(|component| component.windows(2).any(|pair| pair[0] >= pair[1]))
    {
        return Err(ComponentsError::UnsortedComponent(component.clone()));
    }

    if components
        .windows(2)
        .any(|pair| pair[0].first() >= pair[1].first())
    {
        return Err(ComponentsError::UnsortedComponents);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachability_is_reflexive_and_transitive() {
        let graph = Graph::from_edges([(0, 1), (1, 2), (3, 3)]);
        let reach = reachability(&graph);

        assert!(reach[0][0] && reach[0][1] && reach[0][2]);
        assert!(!reach[2][0]);
        assert!(reach[3][3]);
        assert!(!reach[3][0]);
    }

    #[test]
    fn check_components_detects_errors() {
        let graph = Graph::from_edges([(1, 2), (2, 1), (2, 3)]);

        assert_eq!(check_components(&graph, &[vec![1, 2], vec![3]]), Ok(()));
        assert_eq!(
            check_components(&graph, &[vec![1, 2, 3]]),
            Err(ComponentsError::NotStronglyConnected(1, 3))
        );
        assert_eq!(
            check_components(&graph, &[vec![1], vec![2], vec![3]]),
            Err(ComponentsError::NotMaximal(1, 2))
        );
        assert_eq!(
            check_components(&graph, &[vec![1, 2]]),
            Err(ComponentsError::Uncovered(3))
        );
        assert_eq!(
            check_components(&graph, &[vec![1, 2], vec![3], vec![4]]),
            Err(ComponentsError::Unknown(4))
        );
        assert_eq!(
            check_components(&graph, &[vec![1, 2], vec![3, 1]]),
            Err(ComponentsError::Duplicated(1))
        );
        assert_eq!(
            check_components(&graph, &[vec![2, 1], vec![3]]),
            Err(ComponentsError::UnsortedComponent(vec![2, 1]))
        );
        assert_eq!(
            check_components(&graph, &[vec![3], vec![1, 2]]),
            Err(ComponentsError::UnsortedComponents)
        );
    }

    #[test]
    fn brute_force_components() {
        let graph = Graph::from_edges([(1, 2), (2, 3), (3, 1), (3, 4), (4, 4)]);

        assert_eq!(scc_brute_force(&graph), vec![vec![1, 2, 3], vec![4]]);
    }
}
