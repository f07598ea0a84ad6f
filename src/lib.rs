//! Strongly connected components of directed graphs using Kosaraju's
//! algorithm.
//!
//! The crate consists of three layers:
//!
//! * [`Graph`] stores vertices with unique names and keeps both outgoing and
//!   incoming adjacency of every vertex,
//! * [`visit::Dfs`] is an iterative depth-first search that can follow either
//!   of the two adjacencies and records discovery/finish times, predecessors
//!   and the depth-first forest,
//! * [`algo::StronglyConnectedComponents`] composes two DFS passes into
//!   Kosaraju's algorithm.
//!
//! # Examples
//!
//! ```
//! use kosaraju_scc::{Graph, compute_scc};
//!
//! let graph = Graph::from_edges([
//!     ('a', 'b'), ('b', 'c'), ('b', 'e'), ('b', 'f'), ('c', 'd'),
//!     ('c', 'g'), ('d', 'c'), ('d', 'h'), ('e', 'a'), ('e', 'f'),
//!     ('f', 'g'), ('g', 'f'), ('g', 'h'), ('h', 'h'),
//! ]);
//!
//! assert_eq!(
//!     compute_scc(&graph),
//!     vec![vec!['a', 'b', 'e'], vec!['c', 'd'], vec!['f', 'g'], vec!['h']]
//! );
//! ```
//!
//! The library reports its progress through the [`log`] facade at `debug`
//! and `trace` levels.

pub mod algo;
pub mod core;
pub mod graph;
pub mod infra;
pub mod visit;

pub use crate::{algo::compute_scc, graph::Graph};
