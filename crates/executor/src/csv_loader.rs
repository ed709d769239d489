use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::fs::File;
use std::path::PathBuf;

use tracing::{debug, error};

use super::error::Error;
use super::types::{GraphDescription, GraphSource};
use common::types::EdgeRecord;

// Helper struct for CSV parsing
#[derive(Debug, Deserialize, Default)]
pub struct CsvRecord {
    #[serde(rename = "from")]
    pub from_node: usize,

    #[serde(rename = "to")]
    pub to_node: usize,

    pub from_weight: f64,

    pub to_weight: f64,
}

/// Reads edges from a CSV file with a `from,to,from_weight,to_weight` header.
///
/// CSV input carries no vertex count; the largest referenced vertex id is used.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvLoader { path: path.into() }
    }

    fn parse_csv_to_records(&self) -> Result<Vec<EdgeRecord>, Error> {
        let file = File::open(&self.path).map_err(|e| {
            error!("Failed to read file {}: {:?}", self.path.display(), e);
            Error::IoError(e)
        })?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(file);

        let mut records = Vec::new();

        for result in rdr.deserialize() {
            let record: CsvRecord = result?;
            records.push(EdgeRecord::new(
                record.from_node,
                record.to_node,
                record.from_weight,
                record.to_weight,
            ));
        }
        Ok(records)
    }
}

impl GraphSource for CsvLoader {
    fn load(&self) -> Result<GraphDescription, Error> {
        let records = self.parse_csv_to_records()?;
        let num_vertices = records
            .iter()
            .flat_map(|record| [record.from, record.to])
            .max()
            .unwrap_or(0);

        debug!(
            path = %self.path.display(),
            vertices = num_vertices,
            records = records.len(),
            "Parsed CSV graph description"
        );

        Ok(GraphDescription {
            num_vertices,
            records,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::error::Error as BarterError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MOCK_CSV_CONTENT: &str = "\
from,to,from_weight,to_weight
1,2,0.5,1.0
2, 3, 1.0, 2.0
3,1,10.0,3.0
5,4,1.0,1.0
";

    fn write_temp(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(content.as_bytes())
            .expect("Failed to write mock content");
        temp_file
    }

    #[test]
    fn test_parse_csv_success() {
        let temp_file = write_temp(MOCK_CSV_CONTENT);

        let description = CsvLoader::new(temp_file.path()).load().unwrap();

        assert_eq!(description.num_vertices, 5, "Largest id defines the vertex count.");
        assert_eq!(
            description.records,
            vec![
                EdgeRecord::new(1, 2, 0.5, 1.0),
                EdgeRecord::new(2, 3, 1.0, 2.0),
                EdgeRecord::new(3, 1, 10.0, 3.0),
                EdgeRecord::new(5, 4, 1.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_header_only_yields_empty_graph() {
        let temp_file = write_temp("from,to,from_weight,to_weight\n");

        let description = CsvLoader::new(temp_file.path()).load().unwrap();
        assert_eq!(description, GraphDescription::default());
    }

    #[test]
    fn test_bad_field_is_csv_error() {
        let temp_file = write_temp("from,to,from_weight,to_weight\n1,2,abc,1.0\n");

        let result = CsvLoader::new(temp_file.path()).load();
        assert!(matches!(result, Err(Error::CsvError(_))));
    }

    #[test]
    fn test_huge_vertex_id_is_graph_error() {
        let temp_file = write_temp("from,to,from_weight,to_weight\n1,1000000000000,1.0,2.0\n");

        let description = CsvLoader::new(temp_file.path()).load().unwrap();
        assert_eq!(description.num_vertices, 1_000_000_000_000);
        assert!(matches!(
            description.build_graph(),
            Err(Error::GraphError(BarterError::TooManyVertices { .. }))
        ));
    }

    #[test]
    fn test_parse_csv_file_not_found() {
        let result = CsvLoader::new("non_existent_file.csv").load();

        if let Err(Error::IoError(e)) = result {
            assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
        } else {
            panic!("Expected IoError, got: {:?}", result.err());
        }
    }
}
