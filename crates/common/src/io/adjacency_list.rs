use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;
use vertex_coloring::{AdjacencyList, InvalidGraphError};

#[derive(Error, Debug)]
pub enum ReadAdjacencyListError {
    #[error("invalid neighbor on line {line}")]
    ParseInt { line: usize, source: ParseIntError },
    #[error("invalid graph")]
    InvalidGraph(#[from] InvalidGraphError),
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Reads neighbor lists. Line `i` holds the whitespace separated, 0-based
/// neighbors of vertex `i`. An empty line is a vertex without neighbors.
/// Lines starting with '%' are comments and do not count as vertices.
///
/// Every edge has to appear in the lines of both endpoints.
pub fn read_adjacency_list<P>(path: P) -> Result<AdjacencyList, ReadAdjacencyListError>
where
    P: AsRef<Path>,
{
    parse_adjacency_list(BufReader::new(File::open(path)?))
}

pub fn parse_adjacency_list<R: BufRead>(reader: R) -> Result<AdjacencyList, ReadAdjacencyListError> {
    let mut lists = vec![];
    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.starts_with('%') {
            continue;
        }
        let neighbors = line
            .split_ascii_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<usize>, _>>()
            .map_err(|source| ReadAdjacencyListError::ParseInt { line: line_idx + 1, source })?;
        lists.push(neighbors);
    }
    Ok(AdjacencyList::new(lists)?)
}
