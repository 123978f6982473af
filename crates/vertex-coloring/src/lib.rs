//! This is a library to enumerate the optimal [vertex colorings](https://en.wikipedia.org/wiki/Graph_coloring) of a small, simple, undirected graph.
//!
//! A coloring assigns a color to every vertex such that no edge joins two
//! vertices of the same color. The search finds the smallest number of colors
//! for which this is possible, the *chromatic number*, together with colorings
//! that achieve it.
//!
//! The search is exhaustive. Its running time grows with the number of integer
//! partitions of the vertex count times the number of arrangements of each
//! partition, so it is intended for graphs with up to about 15 to 20
//! vertices. [SearchOptions] provides limits for larger inputs.
//!
//! # Examples
//!
//! A path graph on 4 nodes can be colored with 2 colors.
//! ```rust
//! # use std::error::Error;
//! #
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use petgraph::graph::UnGraph;
//! use vertex_coloring::optimal_colorings;
//!
//! // a path graph with 4 nodes
//! let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3)]);
//! let colorings = optimal_colorings(&graph)?;
//!
//! assert_eq!(colorings.color_count(), Some(2));
//! assert_eq!(colorings[0].as_slice(), &[0, 1, 0, 1]);
//! # Ok(())
//! # }
//! ```
//!
//! The [Petersen graph](https://en.wikipedia.org/wiki/Petersen_graph) has
//! chromatic number 3. Its largest cliques are edges, which can be passed as
//! a lower bound.
//! ```rust
//! # use std::error::Error;
//! #
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use vertex_coloring::{
//!     is_proper_coloring, optimal_colorings_with, AdjacencyList, LowerBound, SearchOptions, ShapePolicy,
//! };
//!
//! let graph = AdjacencyList::new(vec![
//!     vec![1, 4, 5],
//!     vec![0, 2, 6],
//!     vec![1, 3, 7],
//!     vec![2, 4, 8],
//!     vec![0, 3, 9],
//!     vec![0, 7, 8],
//!     vec![1, 8, 9],
//!     vec![2, 5, 9],
//!     vec![3, 5, 6],
//!     vec![4, 6, 7],
//! ])?;
//!
//! let options = SearchOptions::new()
//!     .with_lower_bound(LowerBound::Trusted(2))
//!     .with_shape_policy(ShapePolicy::AllPerShape);
//! let colorings = optimal_colorings_with(&graph, &options)?;
//!
//! assert_eq!(colorings.color_count(), Some(3));
//! assert!(colorings.iter().all(|coloring| is_proper_coloring(&graph, coloring.as_slice())));
//! # Ok(())
//! # }
//! ```
//!
//! # Shapes
//!
//! A coloring with `k` colors splits the vertices into `k` color classes. The
//! sizes of these classes, sorted in non-increasing order, form a
//! [partition](partition::Partition) of the number of vertices, the *shape* of
//! the coloring. By default only the first valid coloring of each shape with
//! the minimum number of colors is reported. [ShapePolicy::AllPerShape]
//! reports every coloring with distinct color classes instead.
//!
//! # Generics
//!
//! The search is implemented for structs that implement the `petgraph`
//! traits `NodeCompactIndexable`, `IntoNeighbors`, and `GraphProp<EdgeType =
//! Undirected>`. [AdjacencyList] and [AdjacencyMatrix] are validated
//! implementations of these traits.

#![forbid(unsafe_code)]
#![doc(test(attr(deny(warnings, rust_2018_idioms), allow(dead_code))))]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

mod clique;
mod coloring;
mod graph;
/// Integer partitions of the vertex count.
pub mod partition;
/// Lexicographic successors of arrangements.
pub mod permutation;
mod search;
#[cfg(test)]
mod tests;

pub use clique::greedy_clique_size;
pub use coloring::{is_proper_coloring, Coloring};
pub use graph::{AdjacencyList, AdjacencyMatrix, InvalidGraphError, MatrixNeighbors};
pub use search::{
    optimal_colorings, optimal_colorings_with, Colorings, LowerBound, SearchError, SearchOptions, SearchStats,
    ShapePolicy,
};
