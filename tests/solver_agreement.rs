use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use route_solver::graph::{Graph, MutableGraph};
use route_solver::{
    AdjacencyGraph, BellmanFord, Dijkstra, FloydWarshall, OrderedFloat, SingleSourceAlgorithm,
};

type Weight = OrderedFloat<f64>;

// Test helper generating a random directed graph with non-negative integer
// weights. Seeded so every run exercises the same graphs.
fn random_graph(rng: &mut StdRng, vertex_count: u32) -> AdjacencyGraph<u32, Weight> {
    let mut graph = AdjacencyGraph::new();
    for v in 0..vertex_count {
        graph.add_vertex(v);
    }

    for from in 0..vertex_count {
        for to in 0..vertex_count {
            if from != to && rng.gen_bool(0.3) {
                let weight = rng.gen_range(1..=20) as f64;
                graph.add_edge(&from, &to, OrderedFloat(weight)).unwrap();
            }
        }
    }

    graph
}

// On non-negative graphs all three algorithms must report exactly the same
// distance for every ordered pair, and every non-empty path must traverse
// existing edges summing to that distance.
#[test]
fn all_three_solvers_agree_on_random_graphs() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..10 {
        let graph = random_graph(&mut rng, 8);
        let tables = FloydWarshall::new().all_pairs(&graph);

        for start in 0..8u32 {
            let dijkstra_tree = Dijkstra::new().shortest_path_tree(&graph, &start).unwrap();
            let bellman_tree = BellmanFord::new().shortest_path_tree(&graph, &start).unwrap();

            for end in 0..8u32 {
                let expected = dijkstra_tree.distance_to(&end);

                assert_eq!(
                    expected,
                    bellman_tree.distance_to(&end),
                    "Bellman-Ford disagrees on {} -> {}",
                    start,
                    end
                );
                assert_eq!(
                    expected,
                    tables.distance(&start, &end),
                    "Floyd-Warshall disagrees on {} -> {}",
                    start,
                    end
                );

                let (distance, path) =
                    Dijkstra::new().shortest_path(&graph, &start, &end).unwrap();
                assert_eq!(distance, expected);
                assert_path_consistent(&graph, &path, distance);

                let (fw_distance, fw_path) = tables.path_between(&start, &end).unwrap();
                assert_eq!(fw_distance, expected);
                assert_path_consistent(&graph, &fw_path, fw_distance);
            }
        }
    }
}

fn assert_path_consistent(graph: &AdjacencyGraph<u32, Weight>, path: &[u32], distance: Option<Weight>) {
    if path.is_empty() {
        assert_eq!(distance, None, "an empty path means no route exists");
        return;
    }

    let mut total = OrderedFloat(0.0);
    for pair in path.windows(2) {
        let weight = graph
            .edge_weight(&pair[0], &pair[1])
            .unwrap_or_else(|| panic!("path uses missing edge {} -> {}", pair[0], pair[1]));
        total = total + weight;
    }

    assert_eq!(distance, Some(total), "path weights must sum to the distance");
}
