mod adjacency_list;
mod adjacency_matrix;
mod edge_list;

use clap::ValueEnum;
pub use adjacency_list::{parse_adjacency_list, read_adjacency_list, ReadAdjacencyListError};
pub use adjacency_matrix::{parse_adjacency_matrix, read_adjacency_matrix, ReadAdjacencyMatrixError};
pub use edge_list::{parse_edge_list, read_edge_list, ReadEdgeListError};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum GraphFileType {
    AdjacencyList,
    AdjacencyMatrix,
    EdgeList,
}
