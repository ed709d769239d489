pub mod config;
pub mod csv_loader;
pub mod error;
pub mod logger;
pub mod pipeline;
pub mod report;
pub mod searcher;
pub mod text_loader;
pub mod types;

use std::env;
use std::process;

use tracing::{error, info};

fn main() {
    let (input, output) = parse_args();

    let config = match config::load_config() {
        Ok(config) => config.with_args(input, output),
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            process::exit(1);
        }
    };

    logger::init(&config.logging.level);

    match pipeline::run(&config) {
        Ok(result) => info!(found = result.is_found(), "Pipeline finished."),
        Err(e) => {
            error!("Pipeline failed: {}", e);
            process::exit(1);
        }
    }
}

/// Parse the optional positional `[input] [output]` arguments.
fn parse_args() -> (Option<String>, Option<String>) {
    let mut args = env::args().skip(1);
    (args.next(), args.next())
}
