use petgraph::graph::{NodeIndex, UnGraph};

pub(crate) fn empty_graph(n: usize) -> UnGraph<(), ()> {
    let mut graph = UnGraph::with_capacity(n, 0);
    for _ in 0..n {
        graph.add_node(());
    }
    graph
}

fn graph_from_edges(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> UnGraph<(), ()> {
    let mut graph = empty_graph(n);
    for (u, v) in edges {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }
    graph
}

pub(crate) fn complete_graph(n: usize) -> UnGraph<(), ()> {
    graph_from_edges(n, (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v))))
}

pub(crate) fn path_graph(n: usize) -> UnGraph<(), ()> {
    graph_from_edges(n, (1..n).map(|u| (u - 1, u)))
}

pub(crate) fn cycle_graph(n: usize) -> UnGraph<(), ()> {
    assert!(n >= 3);
    graph_from_edges(n, (0..n).map(|u| (u, (u + 1) % n)))
}

/// Outer 5-cycle 0..5, inner pentagram 5..10, spokes u -- u + 5.
pub(crate) fn petersen_graph() -> UnGraph<(), ()> {
    graph_from_edges(10, (0..5).flat_map(|u| [(u, (u + 1) % 5), (u, u + 5), (u + 5, (u + 2) % 5 + 5)]))
}
