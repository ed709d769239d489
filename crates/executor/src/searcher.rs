use std::time::Instant;

use tracing::info;

use barter_core::{ExchangeGraph, SearchStats, traits::CycleFinder};
use common::types::CycleResult;

/// Runs a single cycle search over a loaded graph and logs the outcome.
pub struct ArbSearcher<F> {
    finder: F,
}

impl<F> ArbSearcher<F>
where
    F: CycleFinder,
{
    pub fn new(finder: F) -> Self {
        ArbSearcher { finder }
    }

    pub fn search_for_arbs(&self, graph: &ExchangeGraph) -> CycleResult {
        self.search_with_stats(graph).0
    }

    /// Runs the finder and logs its outcome, elapsed time and traversal counters.
    pub fn search_with_stats(&self, graph: &ExchangeGraph) -> (CycleResult, SearchStats) {
        info!(
            vertices = graph.num_vertices(),
            edges = graph.num_edges(),
            "Searcher: starting cycle search"
        );

        let started = Instant::now();
        let (result, stats) = self.finder.search(graph);
        let elapsed = started.elapsed();

        match &result {
            CycleResult::Found(cycle) => info!(
                path = ?cycle.path,
                profit = cycle.profit,
                ?elapsed,
                "Cycle FOUND"
            ),
            CycleResult::NotFound => info!(?elapsed, "Search complete: no arbitrage opportunities"),
        }
        info!(
            roots = stats.roots,
            vertices_explored = stats.vertices_explored,
            edges_scanned = stats.edges_scanned,
            cycles_evaluated = stats.cycles_evaluated,
            "Search stats"
        );

        (result, stats)
    }
}
