use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;
use vertex_coloring::{AdjacencyMatrix, InvalidGraphError};

#[derive(Error, Debug)]
pub enum ReadAdjacencyMatrixError {
    #[error("invalid entry on line {line}")]
    ParseInt { line: usize, source: ParseIntError },
    #[error("invalid graph")]
    InvalidGraph(#[from] InvalidGraphError),
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Reads a square 0/1 matrix with one whitespace separated row per line.
/// Empty lines and lines starting with '%' are skipped.
pub fn read_adjacency_matrix<P>(path: P) -> Result<AdjacencyMatrix, ReadAdjacencyMatrixError>
where
    P: AsRef<Path>,
{
    parse_adjacency_matrix(BufReader::new(File::open(path)?))
}

pub fn parse_adjacency_matrix<R: BufRead>(reader: R) -> Result<AdjacencyMatrix, ReadAdjacencyMatrixError> {
    let mut rows = vec![];
    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.starts_with('%') || line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_ascii_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|source| ReadAdjacencyMatrixError::ParseInt { line: line_idx + 1, source })?;
        rows.push(row);
    }
    Ok(AdjacencyMatrix::new(rows)?)
}
