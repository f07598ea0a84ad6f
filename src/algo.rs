pub mod connected_components;

pub use connected_components::{
    compute_scc, is_strongly_connected, AlgoStrong, StronglyConnectedComponents,
};
