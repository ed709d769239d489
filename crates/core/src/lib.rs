pub mod graph;
pub mod solver;
pub mod traits;

pub use graph::{ExchangeGraph, MAX_VERTICES, Quote};
pub use solver::DfsCycleFinder;
pub use traits::{CycleFinder, SearchStats};
