use thiserror::Error;

use common::error::Error as BarterError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed input at line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    #[error("Truncated input: {0}")]
    TruncatedInput(String),

    #[error("Graph processing error: {0}")]
    GraphError(#[from] BarterError),

    #[error("Configuration error: {0}")]
    ConfigLoadError(String),
}
