use std::fmt;

use super::error::Error;
use super::numeric_kernel::{compound_rate, exchange_rate};

/// The original pair of magnitudes behind an edge: `from_weight` units of the
/// source commodity trade for `to_weight` units of the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightPair {
    pub from_weight: f64,
    pub to_weight: f64,
}

impl WeightPair {
    pub fn new(from_weight: f64, to_weight: f64) -> Self {
        Self {
            from_weight,
            to_weight,
        }
    }

    /// Units of the target obtained per unit of the source.
    ///
    /// # Errors
    /// Returns `Error::InvalidWeights` if either magnitude is not strictly positive.
    pub fn rate(&self) -> Result<f64, Error> {
        exchange_rate(self.from_weight, self.to_weight)
    }
}

impl fmt::Display for WeightPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            format_magnitude(self.from_weight),
            format_magnitude(self.to_weight)
        )
    }
}

/// Round-trip float notation that always keeps a decimal point (`1.0`, not `1`).
pub fn format_magnitude(value: f64) -> String {
    format!("{:?}", value)
}

/// One directed edge as read from a graph description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRecord {
    pub from: usize,
    pub to: usize,
    pub weights: WeightPair,
}

impl EdgeRecord {
    pub fn new(from: usize, to: usize, from_weight: f64, to_weight: f64) -> Self {
        Self {
            from,
            to,
            weights: WeightPair::new(from_weight, to_weight),
        }
    }

    pub fn rate(&self) -> Result<f64, Error> {
        self.weights.rate()
    }
}

/// A single edge of a reported cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleHop {
    pub from: usize,
    pub to: usize,
    pub rate: f64,
    pub weights: WeightPair,
}

/// A cycle whose compounded rate exceeds 1.0.
///
/// Fields:
/// - `path`: vertices in traversal order, closed (`path.first() == path.last()`).
/// - `hops`: one entry per consecutive pair of `path`.
/// - `profit`: product of the hop rates, in hop order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitableCycle {
    pub path: Vec<usize>,
    pub hops: Vec<CycleHop>,
    pub profit: f64,
}

impl ProfitableCycle {
    /// The vertex the cycle starts and ends at.
    pub fn start(&self) -> usize {
        self.path[0]
    }

    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    /// Recomputes the profit from the hop rates alone.
    pub fn recompute_profit(&self) -> f64 {
        compound_rate(self.hops.iter().map(|hop| hop.rate))
    }
}

/// Outcome of a full cycle search.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleResult {
    NotFound,
    Found(ProfitableCycle),
}

impl CycleResult {
    pub fn is_found(&self) -> bool {
        matches!(self, CycleResult::Found(_))
    }

    pub fn cycle(&self) -> Option<&ProfitableCycle> {
        match self {
            CycleResult::Found(cycle) => Some(cycle),
            CycleResult::NotFound => None,
        }
    }

    /// Profit of the found cycle, or 0.0 when nothing was found.
    pub fn profit(&self) -> f64 {
        self.cycle().map_or(0.0, |cycle| cycle.profit)
    }
}
