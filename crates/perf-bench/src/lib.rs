use std::time::{Duration, Instant};

use barter_core::{CycleFinder, DfsCycleFinder, ExchangeGraph, SearchStats};
use common::types::{CycleResult, WeightPair};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const DENSE_VERTICES: usize = 400;
pub const SPARSE_COMPONENTS: usize = 20_000;
pub const SPARSE_COMPONENT_SIZE: usize = 8;
pub const SPARSE_EDGES_PER_COMPONENT: usize = 24;
pub const SEED: u64 = 0x5EED;

fn add(graph: &mut ExchangeGraph, from: usize, to: usize, rate: f64) {
    graph
        .add_edge(from, to, rate, WeightPair::new(1.0, rate))
        .expect("generated edge must be valid");
}

/// Complete digraph where every edge has rate 1.0, so every cycle breaks even.
///
/// Exhaustive path enumeration is factorial here; the back-edge search scans each edge once.
pub fn generate_dense_break_even() -> ExchangeGraph {
    let n = DENSE_VERTICES;
    let mut graph = ExchangeGraph::new(n);
    for u in 1..=n {
        for v in 1..=n {
            if u != v {
                add(&mut graph, u, v, 1.0);
            }
        }
    }
    graph
}

/// Many disjoint random components with rates at most 1.0, plus one profitable
/// triangle in the last component.
pub fn generate_sparse_components() -> ExchangeGraph {
    let size = SPARSE_COMPONENT_SIZE;
    let n = SPARSE_COMPONENTS * size;
    let mut graph = ExchangeGraph::new(n);
    let mut rng = SmallRng::seed_from_u64(SEED);

    for component in 0..SPARSE_COMPONENTS {
        let base = component * size;
        for _ in 0..SPARSE_EDGES_PER_COMPONENT {
            let from = base + rng.random_range(1..=size);
            let to = base + rng.random_range(1..=size);
            add(&mut graph, from, to, rng.random_range(0.5..=1.0));
        }
    }

    let base = n - size;
    add(&mut graph, base + 1, base + 2, 1.1);
    add(&mut graph, base + 2, base + 3, 1.1);
    add(&mut graph, base + 3, base + 1, 1.1);
    graph
}

/// Times a single search run.
pub fn timed_search(graph: &ExchangeGraph) -> (CycleResult, SearchStats, Duration) {
    let start_time = Instant::now();
    let (result, stats) = DfsCycleFinder.search(graph);
    (result, stats, start_time.elapsed())
}

pub fn print_report(title: &str, graph: &ExchangeGraph) {
    let (result, stats, elapsed) = timed_search(graph);

    println!(
        "--- {} ({} vertices, {} edges) ---",
        title,
        graph.num_vertices(),
        graph.num_edges()
    );
    match result.cycle() {
        Some(cycle) => println!("Cycle: {:?} (profit {:.6})", cycle.path, cycle.profit),
        None => println!("Cycle: none"),
    }
    println!(
        "Roots: {}  Explored: {}  Edges scanned: {}  Cycles priced: {}",
        stats.roots, stats.vertices_explored, stats.edges_scanned, stats.cycles_evaluated
    );
    println!("Elapsed Time: {:?}", elapsed);
}
