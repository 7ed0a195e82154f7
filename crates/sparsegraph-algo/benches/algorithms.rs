use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparsegraph_algo::bfs::{bfs, bfs_multi_source_parents};
use sparsegraph_algo::dynamic::DynamicDijkstra;
use sparsegraph_algo::shortest_path::{bellman_ford, dijkstra, floyd_warshall};
use sparsegraph_algo::triangles::{triangles_count_cohen, triangles_count_sandia};
use sparsegraph_core::{Edge, Graph};

const SIZES: [usize; 3] = [32, 128, 512];
const AVG_OUT_DEGREE: usize = 4;

fn random_graph(n: usize, seed: u64) -> Graph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let edges = (0..n * AVG_OUT_DEGREE).map(|_| {
        let source = rng.gen_range(0..n);
        let target = rng.gen_range(0..n);
        (source, f64::from(rng.gen_range(1_u8..10)), target)
    });
    Graph::from_weighted_lists(0..n, edges.collect::<Vec<_>>()).expect("bench graph")
}

fn random_undirected(n: usize, seed: u64) -> Graph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let pairs: Vec<_> = (0..n * AVG_OUT_DEGREE / 2)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .filter(|(a, b)| a != b)
        .collect();
    Graph::undirected_from_lists(0..n, pairs).expect("bench graph")
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithms.traversal");
    for n in SIZES {
        let graph = random_graph(n, 0x5EED_u64 + n as u64);
        group.throughput(Throughput::Elements(graph.edge_count() as u64));

        group.bench_with_input(BenchmarkId::new("bfs", n), &graph, |b, g| {
            b.iter(|| black_box(bfs(g, 0)));
        });
        group.bench_with_input(BenchmarkId::new("bfs_parents_4", n), &graph, |b, g| {
            b.iter(|| black_box(bfs_multi_source_parents(g, &[0, 1, 2, 3])));
        });
    }
    group.finish();
}

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithms.shortest_path");
    group.sample_size(20);
    for n in SIZES {
        let graph = random_graph(n, 0xD157_u64 + n as u64);

        group.bench_with_input(BenchmarkId::new("dijkstra", n), &graph, |b, g| {
            b.iter(|| black_box(dijkstra(g, 0)));
        });
        group.bench_with_input(BenchmarkId::new("bellman_ford", n), &graph, |b, g| {
            b.iter(|| black_box(bellman_ford(g, 0)));
        });
        // All-pairs is cubic; keep it to the small tiers.
        if n <= 128 {
            group.bench_with_input(BenchmarkId::new("floyd_warshall", n), &graph, |b, g| {
                b.iter(|| black_box(floyd_warshall(g)));
            });
        }
    }
    group.finish();
}

fn bench_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithms.triangles");
    for n in SIZES {
        let graph = random_undirected(n, 0x7819_u64 + n as u64);

        group.bench_with_input(BenchmarkId::new("cohen", n), &graph, |b, g| {
            b.iter(|| black_box(triangles_count_cohen(g)));
        });
        group.bench_with_input(BenchmarkId::new("sandia", n), &graph, |b, g| {
            b.iter(|| black_box(triangles_count_sandia(g)));
        });
    }
    group.finish();
}

fn bench_dynamic(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithms.dynamic");
    for n in SIZES {
        let graph = random_graph(n, 0xD1A_u64 + n as u64);
        let mut rng = StdRng::seed_from_u64(n as u64);
        let edits: Vec<Edge> = (0..16)
            .map(|_| Edge::new(rng.gen_range(0..n), rng.gen_range(0..n), 1.0))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("toggle_16_edges", n),
            &(graph, edits),
            |b, (g, edits)| {
                b.iter_batched(
                    || DynamicDijkstra::new(g.clone(), 0).expect("maintainer"),
                    |mut dd| {
                        for e in edits {
                            if dd.remove_edge(e).is_none() {
                                dd.add_edge(*e).expect("add");
                            }
                        }
                        black_box(dd.dists())
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_traversal,
    bench_shortest_paths,
    bench_triangles,
    bench_dynamic
);
criterion_main!(benches);
