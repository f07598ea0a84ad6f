mod common;

use common::{kosaraju_random, petgraph_random, RANDOM_SEED};
use fastrand::Rng;
use kosaraju_scc::{algo::StronglyConnectedComponents, visit::Dfs};

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.05, 0.5])]
fn kosaraju_random_graph<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = kosaraju_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| StronglyConnectedComponents::on(&graph).kosaraju().run());
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.05, 0.5])]
fn petgraph_kosaraju_random_graph<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| petgraph::algo::kosaraju_scc(&graph));
}

#[divan::bench(consts = [100, 1000], args = [0.01, 0.05, 0.5])]
fn dfs_random_graph<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = kosaraju_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| Dfs::new(&graph).run_all());
}
