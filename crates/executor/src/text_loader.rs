use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, error};

use super::error::Error;
use super::types::{GraphDescription, GraphSource};
use common::types::EdgeRecord;

/// Reads the whitespace-separated graph description:
///
/// ```text
/// <num_vertices>
/// <from> <to> <from_weight> <to_weight>
/// ...
/// ```
///
/// Tokens are consumed as a stream, so a record may wrap across lines.
pub struct TextLoader {
    path: PathBuf,
}

impl TextLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TextLoader { path: path.into() }
    }
}

impl GraphSource for TextLoader {
    fn load(&self) -> Result<GraphDescription, Error> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            error!("Failed to read file {}: {:?}", self.path.display(), e);
            Error::IoError(e)
        })?;

        let description = parse_description(&content)?;
        debug!(
            path = %self.path.display(),
            vertices = description.num_vertices,
            records = description.records.len(),
            "Parsed text graph description"
        );
        Ok(description)
    }
}

/// A token together with the 1-based line it came from.
type Token<'a> = (usize, &'a str);

pub fn parse_description(input: &str) -> Result<GraphDescription, Error> {
    let mut tokens = input
        .lines()
        .enumerate()
        .flat_map(|(idx, line)| line.split_whitespace().map(move |token| (idx + 1, token)));

    let num_vertices = match tokens.next() {
        Some(token) => parse_token(token, "vertex count")?,
        None => return Err(Error::TruncatedInput("missing vertex count".to_string())),
    };

    let mut records = Vec::new();
    while let Some(first) = tokens.next() {
        let record_no = records.len() + 1;
        let mut field = |name: &str| {
            tokens.next().ok_or_else(|| {
                Error::TruncatedInput(format!(
                    "edge record {} ends before its {} field",
                    record_no, name
                ))
            })
        };
        let to = field("to")?;
        let from_weight = field("from weight")?;
        let to_weight = field("to weight")?;

        records.push(EdgeRecord::new(
            parse_token(first, "from vertex")?,
            parse_token(to, "to vertex")?,
            parse_token(from_weight, "from weight")?,
            parse_token(to_weight, "to weight")?,
        ));
    }

    Ok(GraphDescription {
        num_vertices,
        records,
    })
}

fn parse_token<T: FromStr>((line, token): Token<'_>, what: &str) -> Result<T, Error> {
    token.parse().map_err(|_| Error::MalformedInput {
        line,
        message: format!("expected {}, found {:?}", what, token),
    })
}
