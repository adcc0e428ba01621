use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hcf_core::rng::RngHandle;
use hcf_graph::build_hypercube;

fn build_graph_bench(c: &mut Criterion) {
    c.bench_function("build_hypercube_k14", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(42);
            let network = build_hypercube(14, &mut rng).unwrap();
            black_box(network);
        });
    });
}

criterion_group!(benches, build_graph_bench);
criterion_main!(benches);
