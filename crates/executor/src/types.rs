use barter_core::ExchangeGraph;
use common::types::EdgeRecord;

use super::error::Error;

/// A source that yields a complete graph description.
///
/// Decouples the pipeline from the concrete input format (plain text vs. CSV).
pub trait GraphSource {
    fn load(&self) -> Result<GraphDescription, Error>;
}

/// Vertex count plus edge records, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphDescription {
    pub num_vertices: usize,
    pub records: Vec<EdgeRecord>,
}

impl GraphDescription {
    /// Inserts every record, in order, into a fresh graph.
    ///
    /// Out-of-range vertices and unusable magnitudes are rejected here, before
    /// any search runs.
    pub fn build_graph(&self) -> Result<ExchangeGraph, Error> {
        Ok(ExchangeGraph::from_records(self.num_vertices, &self.records)?)
    }
}
