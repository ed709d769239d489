use super::graph::ExchangeGraph;
use common::types::CycleResult;

/// Counters collected over one search run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// DFS trees started.
    pub roots: usize,
    /// Vertices pushed onto the path stack.
    pub vertices_explored: usize,
    /// Outgoing edges examined.
    pub edges_scanned: usize,
    /// Back edges whose cycle was priced.
    pub cycles_evaluated: usize,
}

/// Trait for algorithms that look for a profitable exchange cycle.
pub trait CycleFinder {
    /// Searches `graph` and returns the first cycle whose compounded rate
    /// exceeds 1.0 under the implementation's traversal order, together with
    /// the traversal counters of the run.
    fn search(&self, graph: &ExchangeGraph) -> (CycleResult, SearchStats);

    /// Same as [`CycleFinder::search`], without the counters.
    ///
    /// Returns `CycleResult::NotFound` when no such cycle is discovered.
    fn find_profitable_cycle(&self, graph: &ExchangeGraph) -> CycleResult {
        self.search(graph).0
    }
}
