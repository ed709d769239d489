use std::iter;

use tracing::{debug, trace};

use super::graph::{ExchangeGraph, Quote};
use super::traits::{CycleFinder, SearchStats};
use common::numeric_kernel::{compound_rate, is_profitable};
use common::types::{CycleHop, CycleResult, ProfitableCycle};

/// Iterative depth-first search that prices every cycle closed by a back edge
/// and stops at the first one with a compounded rate above 1.0.
///
/// Roots are taken in ascending vertex order and neighbours in insertion order,
/// so the reported cycle is fully determined by the graph.
#[derive(Debug, Default, Clone, Copy)]
pub struct DfsCycleFinder;

impl CycleFinder for DfsCycleFinder {
    fn search(&self, graph: &ExchangeGraph) -> (CycleResult, SearchStats) {
        let mut state = TraversalState::new(graph.num_vertices());
        let mut result = CycleResult::NotFound;

        for root in graph.vertices() {
            if state.visited[root] {
                continue;
            }

            if let Some(cycle) = state.explore(graph, root) {
                result = CycleResult::Found(cycle);
                break;
            }
        }

        let stats = state.stats;
        debug!(
            found = result.is_found(),
            roots = stats.roots,
            vertices_explored = stats.vertices_explored,
            edges_scanned = stats.edges_scanned,
            cycles_evaluated = stats.cycles_evaluated,
            "Search finished"
        );
        (result, stats)
    }
}

/// A vertex on the current DFS path.
#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: usize,
    /// Index of the next outgoing edge to scan.
    cursor: usize,
    /// Edge that pushed this frame; `None` for the root.
    entry: Option<Quote>,
}

/// Traversal state owned by a single search run.
///
/// `visited` is monotone: a vertex is marked once all of its descendants have
/// been processed without finding profit, and is never pushed again.
struct TraversalState {
    visited: Vec<bool>,
    /// Position of each vertex in `stack`, `None` when it is off the path.
    stack_position: Vec<Option<usize>>,
    stack: Vec<Frame>,
    stats: SearchStats,
}

impl TraversalState {
    fn new(num_vertices: usize) -> Self {
        Self {
            visited: vec![false; num_vertices + 1],
            stack_position: vec![None; num_vertices + 1],
            stack: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    fn push(&mut self, vertex: usize, entry: Option<Quote>) {
        self.stack_position[vertex] = Some(self.stack.len());
        self.stack.push(Frame {
            vertex,
            cursor: 0,
            entry,
        });
        self.stats.vertices_explored += 1;
    }

    /// Explores the DFS tree rooted at `root`. Leaves the stack empty unless a
    /// profitable cycle is returned.
    fn explore(&mut self, graph: &ExchangeGraph, root: usize) -> Option<ProfitableCycle> {
        self.stats.roots += 1;
        trace!(root, "Starting DFS tree");
        self.push(root, None);

        while let Some(frame) = self.stack.last_mut() {
            let current = frame.vertex;

            let Some(&quote) = graph.out_edges(current).get(frame.cursor) else {
                // All neighbours of `current` are exhausted.
                self.stack.pop();
                self.stack_position[current] = None;
                self.visited[current] = true;
                continue;
            };
            frame.cursor += 1;
            self.stats.edges_scanned += 1;

            if let Some(position) = self.stack_position[quote.to] {
                if let Some(cycle) = self.price_back_edge(position, quote) {
                    return Some(cycle);
                }
            } else if !self.visited[quote.to] {
                self.push(quote.to, Some(quote));
            }
        }

        None
    }

    /// Prices the cycle running from `stack[position]` up to the top of the
    /// stack and closed by `closing`. Returns it only when profitable.
    fn price_back_edge(&mut self, position: usize, closing: Quote) -> Option<ProfitableCycle> {
        self.stats.cycles_evaluated += 1;

        // Frames above `position` are never roots, so each carries its entry edge.
        let rates = self.stack[position + 1..]
            .iter()
            .filter_map(|frame| frame.entry.map(|quote| quote.rate))
            .chain(iter::once(closing.rate));
        let profit = compound_rate(rates);

        debug!(
            start = closing.to,
            hops = self.stack.len() - position,
            profit,
            "Cycle closed by back edge"
        );

        if !is_profitable(profit) {
            return None;
        }

        Some(self.collect_cycle(position, closing, profit))
    }

    fn collect_cycle(&self, position: usize, closing: Quote, profit: f64) -> ProfitableCycle {
        let frames = &self.stack[position..];

        let mut path: Vec<usize> = frames.iter().map(|frame| frame.vertex).collect();
        path.push(closing.to);

        let entries = frames
            .iter()
            .skip(1)
            .filter_map(|frame| frame.entry)
            .chain(iter::once(closing));
        let hops = path
            .iter()
            .zip(entries)
            .map(|(&from, quote)| CycleHop {
                from,
                to: quote.to,
                rate: quote.rate,
                weights: quote.weights,
            })
            .collect();

        ProfitableCycle { path, hops, profit }
    }
}
