#![no_main]

use libfuzzer_sys::fuzz_target;

use kosaraju_scc::{
    compute_scc,
    infra::{arbitrary::EdgeList, testing::check_components},
};

fuzz_target!(|edges: EdgeList| {
    let graph = edges.into_graph();
    let components = compute_scc(&graph);

    check_components(&graph, &components)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();
});
