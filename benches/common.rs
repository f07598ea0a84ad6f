#![allow(dead_code)]

use fastrand::Rng;
use kosaraju_scc::{core::VertexId, Graph};
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    // Efficient generation of large random networks
    // http://vlado.fmf.uni-lj.si/pub/networks/doc/ms/rndgen.pdf
    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            // Orient the edge randomly so that directed cycles are possible.
            if rng.bool() {
                Some((*v, *w))
            } else {
                Some((*w, *v))
            }
        } else {
            None
        }
    }
}

pub fn random_edges(vertex_count: usize, density: f32, rng: &mut Rng) -> Vec<(usize, usize)> {
    let mut generator = RandomEdges::new(vertex_count, density);
    let mut edges = Vec::new();

    while let Some(edge) = generator.next_edge(rng) {
        edges.push(edge);
    }

    edges
}

pub fn kosaraju_random(vertex_count: usize, density: f32, rng: &mut Rng) -> Graph<u32> {
    let mut graph = Graph::with_capacity(vertex_count);

    for name in 0..vertex_count as u32 {
        graph.get_or_add_vertex(name);
    }

    for (u, v) in random_edges(vertex_count, density, rng) {
        graph.add_edge_by_id(VertexId::from_usize(u), VertexId::from_usize(v));
    }

    graph
}

pub fn petgraph_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<u32, (), petgraph::Directed> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for name in 0..vertex_count as u32 {
        graph.add_node(name);
    }

    for (u, v) in random_edges(vertex_count, density, rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }

    graph
}
