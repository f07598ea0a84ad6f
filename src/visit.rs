//! Depth-first traversal of graphs.
//!
//! The traversal is **iterative**, that is, it doesn't use recursion. This
//! means that
//!
//! * &#128077; traversal is not limited by the size of the program stack,
//! * &#128077; the events are produced lazily and the traversal can be
//!   stopped at any point,
//! * &#128078; there is a small extra cost for keeping the neighbor iterator
//!   of every open vertex on the stack, which is needed to respect the
//!   [traversal
//!   semantics](https://11011110.github.io/blog/2013/12/17/stack-based-graph-traversal.html).
//!
//! The order of discovery and closing is exactly the same as in the textbook
//! recursive formulation: neighbors are scanned in the order reported by
//! [`Neighbors`](crate::core::Neighbors) and a vertex is closed after all its
//! descendants.
//!
//! Traversal state (colors, timestamps, predecessors) is never stored in the
//! graph. Every traversal allocates its own [`VertexStates`] table, so there is
//! no state shared between two traversals of the same graph.

pub mod dfs;

mod state;

#[doc(inline)]
pub use self::{
    dfs::{Dfs, DfsEvents, DfsForest},
    state::{Color, VertexState, VertexStates},
};

use crate::core::VertexId;

/// Strictly monotonically increasing numbering of graph traversal events.
///
/// Every discovery and every closing of a vertex advances the time by one. The
/// first discovered vertex gets time 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(pub usize);

/// Depth-first search visitor event.
///
/// Use [`DfsEvents`] to traverse a graph by reporting DFS events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// A new vertex was discovered.
    Open {
        /// Discovered vertex.
        vertex: VertexId,

        /// The vertex from which this vertex was discovered, or `None` if it
        /// is the root of a new tree.
        predecessor: Option<VertexId>,

        /// Discovering time.
        time: Time,
    },

    /// All neighbors of the vertex have been processed.
    Close {
        /// Closed vertex.
        vertex: VertexId,

        /// Closing time.
        time: Time,
    },
}

impl DfsEvent {
    pub fn vertex(&self) -> VertexId {
        match self {
            DfsEvent::Open { vertex, .. } | DfsEvent::Close { vertex, .. } => *vertex,
        }
    }

    pub fn time(&self) -> Time {
        match self {
            DfsEvent::Open { time, .. } | DfsEvent::Close { time, .. } => *time,
        }
    }
}
