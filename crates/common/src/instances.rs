use vertex_coloring::{AdjacencyList, AdjacencyMatrix};

fn from_edges(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> AdjacencyList {
    assert!(n > 0, "graphs need at least one vertex");
    AdjacencyList::from_edges(n, edges).expect("generated edges are in range and loop free")
}

pub fn empty_graph(n: usize) -> AdjacencyList {
    from_edges(n, [])
}

pub fn complete_graph(n: usize) -> AdjacencyList {
    from_edges(n, (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v))))
}

pub fn path_graph(n: usize) -> AdjacencyList {
    from_edges(n, (1..n).map(|u| (u - 1, u)))
}

pub fn cycle_graph(n: usize) -> AdjacencyList {
    assert!(n >= 3, "cycles need at least three vertices");
    from_edges(n, (0..n).map(|u| (u, (u + 1) % n)))
}

/// The [Petersen graph](https://en.wikipedia.org/wiki/Petersen_graph): 10
/// vertices, 3-regular, chromatic number 3.
pub fn petersen_graph() -> AdjacencyList {
    AdjacencyList::new(vec![
        vec![1, 4, 5],
        vec![0, 2, 6],
        vec![1, 3, 7],
        vec![2, 4, 8],
        vec![0, 3, 9],
        vec![0, 7, 8],
        vec![1, 8, 9],
        vec![2, 5, 9],
        vec![3, 5, 6],
        vec![4, 6, 7],
    ])
    .expect("the petersen graph is symmetric")
}

/// The [Petersen graph](https://en.wikipedia.org/wiki/Petersen_graph) as an adjacency matrix.
pub fn petersen_matrix() -> AdjacencyMatrix {
    AdjacencyMatrix::new(vec![
        vec![0, 1, 0, 0, 1, 1, 0, 0, 0, 0],
        vec![1, 0, 1, 0, 0, 0, 1, 0, 0, 0],
        vec![0, 1, 0, 1, 0, 0, 0, 1, 0, 0],
        vec![0, 0, 1, 0, 1, 0, 0, 0, 1, 0],
        vec![1, 0, 0, 1, 0, 0, 0, 0, 0, 1],
        vec![1, 0, 0, 0, 0, 0, 0, 1, 1, 0],
        vec![0, 1, 0, 0, 0, 0, 0, 0, 1, 1],
        vec![0, 0, 1, 0, 0, 1, 0, 0, 0, 1],
        vec![0, 0, 0, 1, 0, 1, 1, 0, 0, 0],
        vec![0, 0, 0, 0, 1, 0, 1, 1, 0, 0],
    ])
    .expect("the petersen matrix is symmetric")
}
