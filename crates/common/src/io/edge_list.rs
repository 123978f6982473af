use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;
use vertex_coloring::{AdjacencyList, InvalidGraphError};

#[derive(Error, Debug)]
pub enum ReadEdgeListError {
    #[error("invalid line (got {0})")]
    InvalidLine(String),
    #[error("parse int error")]
    ParseInt(#[from] ParseIntError),
    #[error("invalid graph")]
    InvalidGraph(#[from] InvalidGraphError),
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Reads one `u v` pair of 0-based vertex indices per line. The number of
/// vertices is one more than the largest index.
///
/// Indices without edges in between become isolated vertices, so one large
/// index allocates a neighbor list for every smaller vertex.
pub fn read_edge_list<P>(path: P) -> Result<AdjacencyList, ReadEdgeListError>
where
    P: AsRef<Path>,
{
    parse_edge_list(BufReader::new(File::open(path)?))
}

pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<AdjacencyList, ReadEdgeListError> {
    let mut n = 0;
    let mut edges = vec![];
    for line in reader.lines() {
        let line = line?;
        if line.starts_with('%') {
            continue;
        }
        let mut tokens = line.split_ascii_whitespace();
        let (Some(a), Some(b), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(ReadEdgeListError::InvalidLine(line));
        };

        let u: usize = a.parse()?;
        let v: usize = b.parse()?;
        let Some(bound) = u.max(v).checked_add(1) else {
            return Err(ReadEdgeListError::InvalidLine(line));
        };
        edges.push((u, v));
        n = n.max(bound);
    }

    Ok(AdjacencyList::from_edges(n, edges)?)
}
