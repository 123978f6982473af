use petgraph::visit::{GraphBase, GraphProp, IntoNeighbors, NodeCompactIndexable, NodeCount, NodeIndexable};
use petgraph::Undirected;
use thiserror::Error;

/// A graph failed validation.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum InvalidGraphError {
    /// The graph has no vertices.
    #[error("graph does not contain any vertices")]
    Empty,
    /// A neighbor index is not a vertex of the graph.
    #[error("neighbor {neighbor} of vertex {vertex} is out of range (expected less than {vertex_count})")]
    NeighborOutOfRange {
        /// The vertex whose list contains the neighbor.
        vertex: usize,
        /// The offending neighbor index.
        neighbor: usize,
        /// Number of vertices of the graph.
        vertex_count: usize,
    },
    /// A vertex is adjacent to itself. Such a graph has no proper coloring.
    #[error("found self loop at vertex {0}")]
    SelfLoop(usize),
    /// An edge is listed twice for the same vertex.
    #[error("edge ({u}, {v}) is listed more than once")]
    DuplicateEdge {
        /// First endpoint.
        u: usize,
        /// Second endpoint.
        v: usize,
    },
    /// `u` is adjacent to `v`, but `v` is not adjacent to `u`.
    #[error("edge ({u}, {v}) has no reverse edge")]
    Asymmetric {
        /// First endpoint.
        u: usize,
        /// Second endpoint.
        v: usize,
    },
    /// A matrix row does not have one entry per vertex.
    #[error("row {row} has {len} entries (expected {expected})")]
    NotSquare {
        /// Row index.
        row: usize,
        /// Number of entries in the row.
        len: usize,
        /// Number of rows.
        expected: usize,
    },
    /// A matrix entry is neither 0 nor 1.
    #[error("entry ({row}, {col}) is {value} (expected 0 or 1)")]
    NonBinaryEntry {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// The entry.
        value: u8,
    },
}

/// An undirected graph given by one neighbor list per vertex.
///
/// Every edge appears in the lists of both endpoints. The lists are checked on
/// construction and immutable afterwards.
///
/// ```rust
/// use vertex_coloring::AdjacencyList;
///
/// let path = AdjacencyList::new(vec![vec![1], vec![0, 2], vec![1]]).unwrap();
/// assert_eq!(path.vertex_count(), 3);
/// assert_eq!(path.edge_count(), 2);
/// assert!(path.has_edge(2, 1));
///
/// assert!(AdjacencyList::new(vec![vec![1], vec![]]).is_err());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdjacencyList {
    lists: Vec<Vec<usize>>,
    edge_count: usize,
}

impl AdjacencyList {
    /// Create a graph from neighbor lists, where `lists[u]` holds the neighbors of `u`.
    ///
    /// # Errors
    ///
    /// Returns an [InvalidGraphError] if there are no vertices, a neighbor is
    /// out of range, a vertex is its own neighbor, a neighbor is listed twice,
    /// or an edge is missing in the list of its other endpoint.
    pub fn new(lists: Vec<Vec<usize>>) -> Result<Self, InvalidGraphError> {
        let n = lists.len();
        if n == 0 {
            return Err(InvalidGraphError::Empty);
        }
        for (u, neighbors) in lists.iter().enumerate() {
            for (i, &v) in neighbors.iter().enumerate() {
                if v >= n {
                    return Err(InvalidGraphError::NeighborOutOfRange { vertex: u, neighbor: v, vertex_count: n });
                }
                if v == u {
                    return Err(InvalidGraphError::SelfLoop(u));
                }
                if neighbors[..i].contains(&v) {
                    return Err(InvalidGraphError::DuplicateEdge { u, v });
                }
            }
        }
        for (u, neighbors) in lists.iter().enumerate() {
            if let Some(&v) = neighbors.iter().find(|&&v| !lists[v].contains(&u)) {
                return Err(InvalidGraphError::Asymmetric { u, v });
            }
        }
        let edge_count = lists.iter().map(Vec::len).sum::<usize>() / 2;
        Ok(Self { lists, edge_count })
    }

    /// Create a graph with `n` vertices from undirected edges. Repeated edges
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns an [InvalidGraphError] if `n == 0`, an endpoint is out of range,
    /// or an edge is a self loop.
    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Result<Self, InvalidGraphError> {
        let mut lists = vec![vec![]; n];
        for (u, v) in edges {
            if u >= n || v >= n {
                let (vertex, neighbor) = if u >= n { (v, u) } else { (u, v) };
                return Err(InvalidGraphError::NeighborOutOfRange { vertex, neighbor, vertex_count: n });
            }
            if u == v {
                return Err(InvalidGraphError::SelfLoop(u));
            }
            if !lists[u].contains(&v) {
                lists[u].push(v);
                lists[v].push(u);
            }
        }
        Self::new(lists)
    }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    /// Returns the number of undirected edges.
    #[inline(always)]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the neighbors of `u` in list order, or `None` if `u` is not a vertex.
    pub fn neighbors_of(&self, u: usize) -> Option<&[usize]> {
        self.lists.get(u).map(Vec::as_slice)
    }

    /// Returns whether `u` and `v` are adjacent.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.lists.get(u).is_some_and(|neighbors| neighbors.contains(&v))
    }
}

impl From<&AdjacencyMatrix> for AdjacencyList {
    fn from(matrix: &AdjacencyMatrix) -> Self {
        let lists = (0..matrix.vertex_count()).map(|u| MatrixNeighbors::new(matrix.row(u)).collect()).collect();
        Self { lists, edge_count: matrix.edge_count() }
    }
}

impl GraphBase for AdjacencyList {
    type EdgeId = (usize, usize);
    type NodeId = usize;
}

impl GraphProp for AdjacencyList {
    type EdgeType = Undirected;
}

impl<'a> IntoNeighbors for &'a AdjacencyList {
    type Neighbors = std::iter::Copied<std::slice::Iter<'a, usize>>;
    fn neighbors(self, a: Self::NodeId) -> Self::Neighbors {
        self.lists[a].iter().copied()
    }
}

impl NodeCount for AdjacencyList {
    fn node_count(&self) -> usize {
        self.vertex_count()
    }
}

impl NodeIndexable for AdjacencyList {
    fn node_bound(&self) -> usize {
        self.vertex_count()
    }
    fn to_index(&self, a: Self::NodeId) -> usize {
        a
    }
    fn from_index(&self, i: usize) -> Self::NodeId {
        i
    }
}

impl NodeCompactIndexable for AdjacencyList {}

/// An undirected graph given by a symmetric 0/1 matrix with zero diagonal.
///
/// ```rust
/// use vertex_coloring::AdjacencyMatrix;
///
/// let triangle = AdjacencyMatrix::new(vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]).unwrap();
/// assert_eq!(triangle.edge_count(), 3);
///
/// assert!(AdjacencyMatrix::new(vec![vec![0, 1], vec![0, 0]]).is_err());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdjacencyMatrix {
    entries: Vec<u8>,
    n: usize,
    edge_count: usize,
}

impl AdjacencyMatrix {
    /// Create a graph from the rows of its adjacency matrix.
    ///
    /// # Errors
    ///
    /// Returns an [InvalidGraphError] if the matrix is empty or not square,
    /// contains entries other than 0 and 1, has a non-zero diagonal, or is
    /// not symmetric.
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self, InvalidGraphError> {
        let n = rows.len();
        if n == 0 {
            return Err(InvalidGraphError::Empty);
        }
        let mut entries = Vec::with_capacity(n * n);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return Err(InvalidGraphError::NotSquare { row, len: values.len(), expected: n });
            }
            if let Some((col, &value)) = values.iter().enumerate().find(|(_, &value)| value > 1) {
                return Err(InvalidGraphError::NonBinaryEntry { row, col, value });
            }
            if values[row] != 0 {
                return Err(InvalidGraphError::SelfLoop(row));
            }
            entries.extend_from_slice(values);
        }
        let mut edge_count = 0;
        for u in 0..n {
            for v in u + 1..n {
                if entries[u * n + v] != entries[v * n + u] {
                    let (u, v) = if entries[u * n + v] == 1 { (u, v) } else { (v, u) };
                    return Err(InvalidGraphError::Asymmetric { u, v });
                }
                edge_count += entries[u * n + v] as usize;
            }
        }
        Ok(Self { entries, n, edge_count })
    }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Returns the number of undirected edges.
    #[inline(always)]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns whether `u` and `v` are adjacent.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u < self.n && v < self.n && self.entries[u * self.n + v] == 1
    }

    fn row(&self, u: usize) -> &[u8] {
        &self.entries[u * self.n..(u + 1) * self.n]
    }
}

impl GraphBase for AdjacencyMatrix {
    type EdgeId = (usize, usize);
    type NodeId = usize;
}

impl GraphProp for AdjacencyMatrix {
    type EdgeType = Undirected;
}

/// Neighbors of a vertex in an [AdjacencyMatrix], in ascending order.
#[derive(Clone, Debug)]
pub struct MatrixNeighbors<'a> {
    row: std::iter::Enumerate<std::slice::Iter<'a, u8>>,
}

impl<'a> MatrixNeighbors<'a> {
    fn new(row: &'a [u8]) -> Self {
        Self { row: row.iter().enumerate() }
    }
}

impl<'a> Iterator for MatrixNeighbors<'a> {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        self.row.by_ref().find(|(_, &entry)| entry == 1).map(|(v, _)| v)
    }
}

impl<'a> IntoNeighbors for &'a AdjacencyMatrix {
    type Neighbors = MatrixNeighbors<'a>;
    fn neighbors(self, a: Self::NodeId) -> Self::Neighbors {
        MatrixNeighbors::new(self.row(a))
    }
}

impl NodeCount for AdjacencyMatrix {
    fn node_count(&self) -> usize {
        self.n
    }
}

impl NodeIndexable for AdjacencyMatrix {
    fn node_bound(&self) -> usize {
        self.n
    }
    fn to_index(&self, a: Self::NodeId) -> usize {
        a
    }
    fn from_index(&self, i: usize) -> Self::NodeId {
        i
    }
}

impl NodeCompactIndexable for AdjacencyMatrix {}

/// Facts about a graph gathered by [inspect].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct GraphSummary {
    pub(crate) vertex_count: usize,
    pub(crate) has_edges: bool,
}

/// Checks the properties the search relies on for an arbitrary graph: at
/// least one vertex, neighbors in range, and no self loops.
pub(crate) fn inspect<G>(graph: G) -> Result<GraphSummary, InvalidGraphError>
where
    G: NodeCompactIndexable + IntoNeighbors,
{
    let n = graph.node_bound();
    if n == 0 {
        return Err(InvalidGraphError::Empty);
    }
    let mut has_edges = false;
    for u in 0..n {
        for v in graph.neighbors(graph.from_index(u)) {
            let v = graph.to_index(v);
            if v >= n {
                return Err(InvalidGraphError::NeighborOutOfRange { vertex: u, neighbor: v, vertex_count: n });
            }
            if v == u {
                return Err(InvalidGraphError::SelfLoop(u));
            }
            has_edges = true;
        }
    }
    Ok(GraphSummary { vertex_count: n, has_edges })
}
