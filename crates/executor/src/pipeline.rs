use tracing::{debug, info};

use super::config::{Config, InputFormat};
use super::csv_loader::CsvLoader;
use super::error::Error;
use super::report::ReportWriter;
use super::searcher::ArbSearcher;
use super::text_loader::TextLoader;
use super::types::{GraphDescription, GraphSource};
use barter_core::DfsCycleFinder;
use common::types::CycleResult;

/// Loads the graph, searches it once and writes the report.
pub fn run(config: &Config) -> Result<CycleResult, Error> {
    let description = load_description(config)?;
    let graph = description.build_graph()?;
    debug!("Loaded graph:\n{}", graph);

    let searcher = ArbSearcher::new(DfsCycleFinder);
    let result = searcher.search_for_arbs(&graph);

    ReportWriter::new(&config.io.output_path).write(&result)?;
    Ok(result)
}

fn load_description(config: &Config) -> Result<GraphDescription, Error> {
    let path = &config.io.input_path;
    match config.io.input_format.resolve(path) {
        InputFormat::Csv => {
            info!(path = %path.display(), "Loading CSV graph description");
            CsvLoader::new(path).load()
        }
        _ => {
            info!(path = %path.display(), "Loading text graph description");
            TextLoader::new(path).load()
        }
    }
}
