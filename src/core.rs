//! Core traits and types shared by the graph storage and the traversals.

pub mod error;
pub mod id;
pub mod marker;

mod neighbors;
mod vertices;

pub use id::VertexId;
pub use neighbors::*;
pub use vertices::*;
