use std::collections::HashMap;

use barter_core::ExchangeGraph;
use common::types::WeightPair;
use proptest::prelude::*;
use proptest::strategy::Strategy;

const NUM_VERTICES_STRATEGY: std::ops::Range<usize> = 1usize..10;

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    NUM_VERTICES_STRATEGY.prop_flat_map(|num_vertices| {
        let edge_generator = (1usize..=num_vertices, 1usize..=num_vertices, 0.01f64..10.0);
        let edges_generator = prop::collection::vec(edge_generator, 0..50);

        (proptest::strategy::Just(num_vertices), edges_generator)
    })
}

fn build(num_vertices: usize, edges: &[(usize, usize, f64)]) -> ExchangeGraph {
    let mut graph = ExchangeGraph::new(num_vertices);
    for &(from, to, rate) in edges {
        graph
            .add_edge(from, to, rate, WeightPair::new(1.0, rate))
            .unwrap();
    }
    graph
}

proptest! {
    /// Property: one stored edge per distinct ordered pair
    #[test]
    fn edge_count_matches_distinct_pairs((num_vertices, edges) in graph_strategy()) {
        let graph = build(num_vertices, &edges);

        let mut pairs: Vec<_> = edges.iter().map(|&(u, v, _)| (u, v)).collect();
        pairs.sort_unstable();
        pairs.dedup();

        prop_assert_eq!(graph.num_edges(), pairs.len());

        let total_out: usize = graph.vertices().map(|v| graph.out_edges(v).len()).sum();
        prop_assert_eq!(total_out, pairs.len());
    }

    /// Property: the last write for an ordered pair is the one that is kept
    #[test]
    fn last_write_wins((num_vertices, edges) in graph_strategy()) {
        let graph = build(num_vertices, &edges);

        let mut latest = HashMap::new();
        for &(u, v, rate) in &edges {
            latest.insert((u, v), rate);
        }

        for u in graph.vertices() {
            for v in graph.vertices() {
                prop_assert_eq!(graph.rate(u, v), latest.get(&(u, v)).copied());
            }
        }
    }

    /// Property: neighbours appear in order of their first insertion
    #[test]
    fn neighbors_in_first_insertion_order((num_vertices, edges) in graph_strategy()) {
        let graph = build(num_vertices, &edges);

        for u in graph.vertices() {
            let mut expected: Vec<usize> = Vec::new();
            for &(from, to, _) in &edges {
                if from == u && !expected.contains(&to) {
                    expected.push(to);
                }
            }
            prop_assert_eq!(graph.neighbors(u).collect::<Vec<_>>(), expected);
        }
    }
}
