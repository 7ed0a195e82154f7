//! Known-topology regression tests for the algorithm engines.
//!
//! Each test builds a small hand-crafted graph whose results can be worked
//! out on paper. Expected values are hardcoded so any change in masking,
//! semiring choice or decoding shows up here.

use petgraph::graph::DiGraph;

use sparsegraph_algo::bfs::{bfs, bfs_multi_source_parents};
use sparsegraph_algo::dynamic::DynamicDijkstra;
use sparsegraph_algo::shortest_path::{
    bellman_ford, bellman_ford_multi_source, dijkstra, floyd_warshall,
};
use sparsegraph_algo::triangles::{
    triangles_count_cohen, triangles_count_for_each_vertex, triangles_count_sandia,
};
use sparsegraph_core::config::AnalyticsConfig;
use sparsegraph_core::{Edge, Graph, GraphError};

const INF: f64 = f64::INFINITY;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn directed(n: u32, edges: &[(u32, u32)]) -> Graph<u32> {
    Graph::from_lists(0..n, edges.iter().copied()).expect("graph")
}

fn undirected(n: u32, edges: &[(u32, u32)]) -> Graph<u32> {
    Graph::undirected_from_lists(0..n, edges.iter().copied()).expect("graph")
}

// ===========================================================================
// Topology 1: Linear chain  0 → 1 → 2
// ===========================================================================

#[test]
fn chain_bfs_levels_and_parents() {
    let g = directed(3, &[(0, 1), (1, 2)]);
    assert_eq!(bfs(&g, 0).expect("bfs"), vec![0, 1, 2]);
    assert_eq!(bfs(&g, 2).expect("bfs"), vec![-1, -1, 0]);
    assert_eq!(
        bfs_multi_source_parents(&g, &[0]).expect("parents"),
        vec![(0, vec![-1, 0, 1])]
    );
}

#[test]
fn chain_shortest_paths_agree() {
    let g = directed(3, &[(0, 1), (1, 2)]);
    let expected = vec![0.0, 1.0, 2.0];
    assert_eq!(bellman_ford(&g, 0).expect("bf"), expected);
    assert_eq!(dijkstra(&g, 0).expect("dijkstra"), expected);
    assert_eq!(floyd_warshall(&g).expect("fw")[0], (0, expected));
}

#[test]
fn chain_dynamic_remove_and_restore() {
    let g = directed(3, &[(0, 1), (1, 2)]);
    let mut dd = DynamicDijkstra::new(g, 0).expect("maintainer");
    dd.remove_edge(&Edge::unit(0, 1));
    assert_eq!(dd.dists(), vec![0.0, INF, INF]);
    dd.add_edge(Edge::unit(0, 1)).expect("add");
    assert_eq!(dd.dists(), vec![0.0, 1.0, 2.0]);
}

// ===========================================================================
// Topology 2: Fan  0 → 1 → 2, 0 → 3
// ===========================================================================

#[test]
fn fan_bfs_levels_and_parents() {
    let g = directed(4, &[(0, 1), (1, 2), (0, 3)]);
    assert_eq!(bfs(&g, 0).expect("bfs"), vec![0, 1, 2, 1]);
    assert_eq!(
        bfs_multi_source_parents(&g, &[0]).expect("parents"),
        vec![(0, vec![-1, 0, 1, 0])]
    );
}

#[test]
fn fan_half_weights() {
    let g = Graph::from_weighted_lists([0, 1, 2, 3], [(0, 0.5, 1), (1, 0.5, 2), (0, 0.5, 3)])
        .expect("graph");
    assert_eq!(bellman_ford(&g, 0).expect("bf"), vec![0.0, 0.5, 1.0, 0.5]);
}

// ===========================================================================
// Topology 3: Star  0 → {1, 2, 3}
// ===========================================================================

#[test]
fn star_multi_source_bellman_ford() {
    let g = directed(4, &[(0, 1), (0, 2), (0, 3)]);
    assert_eq!(
        bellman_ford_multi_source(&g, &[0, 1]).expect("bf"),
        vec![(0, vec![0.0, 1.0, 1.0, 1.0]), (1, vec![INF, 0.0, INF, INF])]
    );
}

// ===========================================================================
// Topology 4: Directed 3-cycle  0 → 1 → 2 → 0
// ===========================================================================

#[test]
fn cycle_levels_and_parents() {
    let g = directed(3, &[(0, 1), (1, 2), (2, 0)]);
    assert_eq!(bfs(&g, 0).expect("bfs"), vec![0, 1, 2]);
    assert_eq!(
        bfs_multi_source_parents(&g, &[0]).expect("parents"),
        vec![(0, vec![-1, 0, 1])]
    );
}

#[test]
fn cycle_multi_source_bellman_ford() {
    let g = directed(3, &[(0, 1), (1, 2), (2, 0)]);
    assert_eq!(
        bellman_ford_multi_source(&g, &[0, 1]).expect("bf"),
        vec![(0, vec![0.0, 1.0, 2.0]), (1, vec![2.0, 0.0, 1.0])]
    );
}

// ===========================================================================
// Topology 5: Two disjoint edges  0 → 1, 2 → 3
// ===========================================================================

#[test]
fn disjoint_edges_multi_source_parents() {
    let g = directed(4, &[(0, 1), (2, 3)]);
    assert_eq!(
        bfs_multi_source_parents(&g, &[0, 2]).expect("parents"),
        vec![(0, vec![-1, 0, -2, -2]), (2, vec![-2, -2, -1, 2])]
    );
}

// ===========================================================================
// Topology 6: Edgeless and empty graphs
// ===========================================================================

#[test]
fn edgeless_graph() {
    let g = directed(3, &[]);
    assert_eq!(bfs(&g, 0).expect("bfs"), vec![0, -1, -1]);
    assert_eq!(
        bfs_multi_source_parents(&g, &[0]).expect("parents"),
        vec![(0, vec![-1, -2, -2])]
    );
    assert_eq!(bellman_ford(&g, 0).expect("bf"), vec![0.0, INF, INF]);
    assert_eq!(triangles_count_sandia(&g).expect("sandia"), 0);
}

#[test]
fn empty_graph_everywhere() {
    let g = Graph::<u32>::empty();
    assert!(bfs(&g, 0).expect("bfs").is_empty());
    assert!(bfs_multi_source_parents(&g, &[0]).expect("parents").is_empty());
    assert!(bellman_ford_multi_source(&g, &[0]).expect("bf").is_empty());
    assert!(floyd_warshall(&g).expect("fw").is_empty());
    assert!(triangles_count_for_each_vertex(&g).expect("per node").is_empty());
    assert_eq!(triangles_count_cohen(&g).expect("cohen"), 0);
}

// ===========================================================================
// Topology 7: Seven-node undirected graph with five triangles
// ===========================================================================

const SEVEN: [(u32, u32); 12] = [
    (0, 1),
    (0, 3),
    (1, 3),
    (1, 4),
    (1, 6),
    (2, 3),
    (2, 5),
    (2, 6),
    (3, 5),
    (3, 6),
    (4, 5),
    (4, 6),
];

#[test]
fn seven_node_triangles() {
    let g = undirected(7, &SEVEN);
    let per_node = triangles_count_for_each_vertex(&g).expect("per node");
    assert_eq!(per_node, vec![1, 3, 2, 4, 1, 1, 3]);
    assert_eq!(per_node.iter().sum::<i32>(), 15);
    assert_eq!(triangles_count_cohen(&g).expect("cohen"), 5);
    assert_eq!(triangles_count_sandia(&g).expect("sandia"), 5);
}

#[test]
fn triangle_and_chain() {
    let tri = undirected(3, &[(0, 1), (1, 2), (2, 0)]);
    assert_eq!(triangles_count_for_each_vertex(&tri).expect("per node"), vec![1, 1, 1]);
    let chain = undirected(3, &[(0, 1), (1, 2)]);
    assert_eq!(triangles_count_for_each_vertex(&chain).expect("per node"), vec![0, 0, 0]);
}

// ===========================================================================
// Topology 8: Directed 4-cycle under dynamic edits
// ===========================================================================

#[test]
fn four_cycle_dynamic_sequence() {
    let g = directed(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    let mut dd = DynamicDijkstra::new(g, 0).expect("maintainer");

    dd.remove_edge(&Edge::unit(0, 1));
    assert_eq!(dd.dists(), vec![0.0, INF, INF, INF]);
    dd.add_edge(Edge::unit(0, 1)).expect("add");
    assert_eq!(dd.dists(), vec![0.0, 1.0, 2.0, 3.0]);
    dd.add_edge(Edge::unit(0, 3)).expect("add");
    assert_eq!(dd.dists(), vec![0.0, 1.0, 2.0, 1.0]);
    dd.remove_edge(&Edge::unit(0, 1));
    assert_eq!(dd.dists(), vec![0.0, INF, INF, 1.0]);
    dd.add_edge(Edge::unit(3, 1)).expect("add");
    assert_eq!(dd.dists(), vec![0.0, 2.0, 3.0, 1.0]);

    let from_scratch = dijkstra(dd.graph(), dd.start()).expect("dijkstra");
    assert_eq!(dd.dists(), from_scratch);
}

// ===========================================================================
// Topology 9: Negative cycle  0 → 1 → 2 → 1
// ===========================================================================

#[test]
fn negative_cycle_reported_by_both_engines() {
    let g = Graph::from_weighted_lists([0, 1, 2], [(0, 1.0, 1), (1, -2.0, 2), (2, 1.0, 1)])
        .expect("graph");
    let err = bellman_ford(&g, 0).expect_err("cycle");
    assert_eq!(err, GraphError::NegativeWeightCycle);
    assert_eq!(err.code().code(), "E4001");
    assert_eq!(floyd_warshall(&g), Err(GraphError::NegativeWeightCycle));
}

// ===========================================================================
// Adapters and configuration
// ===========================================================================

#[test]
fn petgraph_import_feeds_engines() {
    let mut foreign = DiGraph::<&str, f64>::new();
    let a = foreign.add_node("a");
    let b = foreign.add_node("b");
    let c = foreign.add_node("c");
    foreign.add_edge(a, b, 2.0);
    foreign.add_edge(b, c, 2.0);
    foreign.add_edge(a, c, 5.0);

    let g = Graph::from_petgraph(&foreign).expect("import");
    assert_eq!(dijkstra(&g, 0).expect("dijkstra"), vec![0.0, 2.0, 4.0]);
    assert_eq!(bfs(&g, 0).expect("bfs"), vec![0, 1, 1]);
}

#[test]
fn config_drives_bfs_depth() {
    let config = AnalyticsConfig::from_toml_str("[bfs]\nmax_depth = 2\n").expect("config");
    let g = directed(4, &[(0, 1), (1, 2), (2, 3)]);
    assert_eq!(
        sparsegraph_algo::bfs::bfs_with_config(&g, 0, &config.bfs).expect("bfs"),
        vec![0, 1, 2, -1]
    );
}
