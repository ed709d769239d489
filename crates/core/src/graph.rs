use std::collections::HashMap;
use std::fmt;

use common::error::Error;
use common::types::{EdgeRecord, WeightPair};

/// Largest vertex count a graph can be built with.
pub const MAX_VERTICES: usize = 1 << 22;

/// An outgoing edge as stored in the adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub to: usize,
    pub rate: f64,
    pub weights: WeightPair,
}

/// Directed exchange-rate graph over vertices `1..=num_vertices`.
///
/// Layout:
/// - `adjacency[u]` -> outgoing quotes of `u`, in first-insertion order
/// - `slots[(u, v)]` -> position of the `u -> v` quote inside `adjacency[u]`
///
/// Slot 0 of `adjacency` is allocated but never addressable, so vertex ids
/// index it directly. A missing `(u, v)` slot is the absent-edge sentinel.
/// The display pair is stored on the quote itself; rates are never used as
/// lookup keys.
#[derive(Debug, Clone, Default)]
pub struct ExchangeGraph {
    num_vertices: usize,
    adjacency: Vec<Vec<Quote>>,
    slots: HashMap<(usize, usize), usize>,
}

impl ExchangeGraph {
    /// Allocates an edgeless graph over `1..=num_vertices`.
    ///
    /// # Panics
    /// Panics if `num_vertices` exceeds [`MAX_VERTICES`]. Use
    /// [`ExchangeGraph::try_new`] for counts read from input.
    pub fn new(num_vertices: usize) -> Self {
        match Self::try_new(num_vertices) {
            Ok(graph) => graph,
            Err(e) => panic!("{}", e),
        }
    }

    /// Allocates an edgeless graph, rejecting counts above [`MAX_VERTICES`].
    ///
    /// # Errors
    /// Returns `Error::TooManyVertices` for oversized counts.
    pub fn try_new(num_vertices: usize) -> Result<Self, Error> {
        let len = num_vertices
            .checked_add(1)
            .filter(|_| num_vertices <= MAX_VERTICES)
            .ok_or(Error::TooManyVertices {
                requested: num_vertices,
                limit: MAX_VERTICES,
            })?;

        Ok(Self {
            num_vertices,
            adjacency: vec![Vec::new(); len],
            slots: HashMap::new(),
        })
    }

    /// Builds a graph by inserting `records` in order.
    ///
    /// # Errors
    /// `Error::TooManyVertices` for an oversized count, otherwise the first
    /// error [`ExchangeGraph::add_record`] reports.
    pub fn from_records<'a, I>(num_vertices: usize, records: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = &'a EdgeRecord>,
    {
        let mut graph = Self::try_new(num_vertices)?;
        for record in records {
            graph.add_record(record)?;
        }
        Ok(graph)
    }

    /// Inserts a parsed record, deriving its rate from the magnitude pair.
    ///
    /// # Errors
    /// `Error::InvalidWeights` for unusable magnitudes, `Error::VertexOutOfBounds`
    /// for ids outside `[1, num_vertices]`.
    pub fn add_record(&mut self, record: &EdgeRecord) -> Result<(), Error> {
        let rate = record.rate()?;
        self.add_edge(record.from, record.to, rate, record.weights)
    }

    /// Records the directed edge `from -> to`.
    ///
    /// A second insertion for the same ordered pair overwrites the rate and the
    /// display pair; the neighbour keeps the position of its first insertion.
    ///
    /// # Errors
    /// `Error::VertexOutOfBounds` if either endpoint is outside `[1, num_vertices]`,
    /// `Error::InvalidRate` if `rate` is not strictly positive and finite.
    pub fn add_edge(
        &mut self,
        from: usize,
        to: usize,
        rate: f64,
        weights: WeightPair,
    ) -> Result<(), Error> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if !(rate.is_finite() && rate > 0.0) {
            return Err(Error::InvalidRate(rate));
        }

        let quote = Quote { to, rate, weights };
        match self.slots.get(&(from, to)) {
            Some(&slot) => self.adjacency[from][slot] = quote,
            None => {
                self.slots.insert((from, to), self.adjacency[from].len());
                self.adjacency[from].push(quote);
            }
        }
        Ok(())
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), Error> {
        if vertex == 0 || vertex > self.num_vertices {
            return Err(Error::VertexOutOfBounds {
                vertex,
                num_vertices: self.num_vertices,
            });
        }
        Ok(())
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.slots.len()
    }

    /// Vertex ids in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = usize> + use<> {
        1..=self.num_vertices
    }

    /// Outgoing quotes of `vertex` in insertion order; empty for unknown ids.
    pub fn out_edges(&self, vertex: usize) -> &[Quote] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Direct successors of `vertex` in insertion order.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.out_edges(vertex).iter().map(|quote| quote.to)
    }

    pub fn edge(&self, from: usize, to: usize) -> Option<&Quote> {
        self.slots
            .get(&(from, to))
            .map(|&slot| &self.adjacency[from][slot])
    }

    /// The stored rate, or `None` when the edge is absent.
    pub fn rate(&self, from: usize, to: usize) -> Option<f64> {
        self.edge(from, to).map(|quote| quote.rate)
    }
}

impl fmt::Display for ExchangeGraph {
    /// Adjacency dump, one line per vertex: `[1] -> [2] 2.0 -> [3] 0.5 -> `.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices() {
            write!(f, "[{}] -> ", vertex)?;
            for quote in self.out_edges(vertex) {
                write!(f, "[{}] {:?} -> ", quote.to, quote.rate)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(rate: f64) -> WeightPair {
        WeightPair::new(1.0, rate)
    }

    #[test]
    fn new_graph_has_no_edges() {
        let graph = ExchangeGraph::new(3);

        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![1, 2, 3]);
        for u in 1..=3 {
            assert!(graph.out_edges(u).is_empty());
            for v in 1..=3 {
                assert_eq!(graph.rate(u, v), None);
            }
        }
    }

    #[test]
    fn empty_graph() {
        let graph = ExchangeGraph::new(0);

        assert_eq!(graph.vertices().count(), 0);
        assert!(graph.out_edges(0).is_empty());
        assert!(graph.out_edges(1).is_empty());
    }

    #[test]
    fn neighbors_follow_insertion_order() {
        let mut graph = ExchangeGraph::new(4);
        graph.add_edge(1, 4, 1.0, pair(1.0)).unwrap();
        graph.add_edge(1, 2, 2.0, pair(2.0)).unwrap();
        graph.add_edge(1, 3, 3.0, pair(3.0)).unwrap();

        assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![4, 2, 3]);
        assert_eq!(graph.rate(1, 2), Some(2.0));
        assert_eq!(graph.rate(2, 1), None);
    }

    #[test]
    fn duplicate_edge_overwrites_in_place() {
        let mut graph = ExchangeGraph::new(3);
        graph.add_edge(1, 2, 1.0, pair(1.0)).unwrap();
        graph.add_edge(1, 3, 1.5, pair(1.5)).unwrap();
        graph.add_edge(1, 2, 2.0, WeightPair::new(0.5, 1.0)).unwrap();

        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(graph.rate(1, 2), Some(2.0));
        assert_eq!(
            graph.edge(1, 2).unwrap().weights,
            WeightPair::new(0.5, 1.0)
        );
    }

    #[test]
    fn self_loop_is_a_regular_edge() {
        let mut graph = ExchangeGraph::new(1);
        graph.add_edge(1, 1, 1.5, pair(1.5)).unwrap();

        assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![1]);
        assert_eq!(graph.rate(1, 1), Some(1.5));
    }

    #[test]
    fn out_of_range_vertices_are_rejected() {
        let mut graph = ExchangeGraph::new(2);

        assert_eq!(
            graph.add_edge(0, 1, 1.0, pair(1.0)),
            Err(Error::VertexOutOfBounds {
                vertex: 0,
                num_vertices: 2
            })
        );
        assert_eq!(
            graph.add_edge(1, 3, 1.0, pair(1.0)),
            Err(Error::VertexOutOfBounds {
                vertex: 3,
                num_vertices: 2
            })
        );
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn non_positive_rates_are_rejected() {
        let mut graph = ExchangeGraph::new(2);

        assert_eq!(
            graph.add_edge(1, 2, -1.0, pair(1.0)),
            Err(Error::InvalidRate(-1.0))
        );
        assert!(graph.add_edge(1, 2, 0.0, pair(1.0)).is_err());
        assert!(graph.add_edge(1, 2, f64::NAN, pair(1.0)).is_err());
    }

    #[test]
    fn from_records_derives_rates_from_weights() {
        let records = vec![EdgeRecord::new(1, 2, 0.5, 1.0), EdgeRecord::new(2, 1, 4.0, 1.0)];
        let graph = ExchangeGraph::from_records(2, &records).unwrap();

        assert_eq!(graph.rate(1, 2), Some(2.0));
        assert_eq!(graph.rate(2, 1), Some(0.25));
        assert_eq!(graph.edge(2, 1).unwrap().weights.to_string(), "4.0 1.0");
    }

    #[test]
    fn from_records_stops_at_first_bad_record() {
        let records = vec![EdgeRecord::new(1, 2, 1.0, 1.0), EdgeRecord::new(2, 1, 0.0, 1.0)];

        assert!(matches!(
            ExchangeGraph::from_records(2, &records),
            Err(Error::InvalidWeights { .. })
        ));
    }

    #[test]
    fn oversized_vertex_count_is_rejected() {
        assert_eq!(
            ExchangeGraph::try_new(usize::MAX).err(),
            Some(Error::TooManyVertices {
                requested: usize::MAX,
                limit: MAX_VERTICES
            })
        );
        assert!(ExchangeGraph::try_new(MAX_VERTICES + 1).is_err());
        assert!(ExchangeGraph::try_new(1_000_000_000_000).is_err());
    }

    #[test]
    fn from_records_rejects_oversized_count() {
        let records = vec![EdgeRecord::new(1, 1, 1.0, 2.0)];

        assert!(matches!(
            ExchangeGraph::from_records(usize::MAX, &records),
            Err(Error::TooManyVertices { .. })
        ));
    }

    #[test]
    fn display_dumps_adjacency() {
        let mut graph = ExchangeGraph::new(2);
        graph.add_edge(1, 2, 2.0, pair(2.0)).unwrap();
        graph.add_edge(2, 1, 0.5, pair(0.5)).unwrap();

        assert_eq!(graph.to_string(), "[1] -> [2] 2.0 -> \n[2] -> [1] 0.5 -> \n");
    }
}
