use std::fs;
use std::path::PathBuf;

use tracing::info;

use super::error::Error;
use common::types::{CycleResult, format_magnitude};

/// Renders a search result in the report format.
///
/// ```text
/// yes
/// 1 2 0.5 1.0
/// 2 1 1.0 0.75
/// one kg of product 1 gets 1.5 kg of product 1 from the above sequence.
/// ```
///
/// or the single line `no`.
pub fn render(result: &CycleResult) -> String {
    let Some(cycle) = result.cycle() else {
        return "no\n".to_string();
    };

    let mut report = String::from("yes\n");
    for hop in &cycle.hops {
        report.push_str(&format!("{} {} {}\n", hop.from, hop.to, hop.weights));
    }
    report.push_str(&format!(
        "one kg of product {start} gets {profit} kg of product {start} from the above sequence.\n",
        start = cycle.start(),
        profit = format_magnitude(cycle.profit),
    ));
    report
}

/// Writes rendered results to a file, replacing its contents.
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn write(&self, result: &CycleResult) -> Result<(), Error> {
        fs::write(&self.path, render(result))?;
        info!(path = %self.path.display(), found = result.is_found(), "Report written");
        Ok(())
    }
}
