use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Indicates a vertex id outside `[1, num_vertices]`.
    VertexOutOfBounds { vertex: usize, num_vertices: usize },

    /// A magnitude pair that cannot define an exchange rate (zero, negative or non-finite).
    InvalidWeights { from_weight: f64, to_weight: f64 },

    /// A rate that is not strictly positive and finite.
    InvalidRate(f64),

    /// A vertex count above the supported limit.
    TooManyVertices { requested: usize, limit: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::VertexOutOfBounds {
                vertex,
                num_vertices,
            } => write!(
                f,
                "Vertex {} is out of bounds (valid ids are 1..={}).",
                vertex, num_vertices
            ),

            Error::InvalidWeights {
                from_weight,
                to_weight,
            } => write!(
                f,
                "Weights {} and {} do not define a positive exchange rate.",
                from_weight, to_weight
            ),

            Error::InvalidRate(rate) => {
                write!(f, "Exchange rate {} must be positive and finite.", rate)
            }

            Error::TooManyVertices { requested, limit } => write!(
                f,
                "Vertex count {} exceeds the supported maximum of {}.",
                requested, limit
            ),
        }
    }
}

impl std::error::Error for Error {}
