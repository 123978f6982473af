use std::cmp::Reverse;
use std::collections::HashSet;

use petgraph::visit::{IntoNeighbors, NodeCompactIndexable};
use tracing::{debug, instrument};

/// Returns the size of a clique found greedily.
///
/// Every vertex is tried as a seed, in order of decreasing degree. Vertices
/// adjacent to all current members are added in the same order. The result
/// is not necessarily the maximum clique size, but every proper coloring
/// needs at least this many colors.
///
/// ```rust
/// use petgraph::graph::UnGraph;
/// use vertex_coloring::greedy_clique_size;
///
/// // a triangle with a pendant vertex
/// let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (0, 2), (2, 3)]);
/// assert_eq!(greedy_clique_size(&graph), 3);
/// ```
#[instrument(skip_all)]
pub fn greedy_clique_size<G>(graph: G) -> usize
where
    G: NodeCompactIndexable + IntoNeighbors,
{
    let n = graph.node_bound();
    if n == 0 {
        return 0;
    }

    let adjacent: Vec<HashSet<usize>> = (0..n)
        .map(|u| {
            graph
                .neighbors(graph.from_index(u))
                .map(|v| graph.to_index(v))
                .filter(|&v| v < n && v != u)
                .collect()
        })
        .collect();
    let degree: Vec<usize> = adjacent.iter().map(HashSet::len).collect();

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&u| Reverse(degree[u]));

    let mut best = 1;
    let mut clique = Vec::with_capacity(n);
    for &seed in &order {
        if degree[seed] < best {
            continue;
        }
        clique.clear();
        clique.push(seed);
        for &candidate in &order {
            if clique.iter().all(|&member| adjacent[member].contains(&candidate)) {
                clique.push(candidate);
            }
        }
        best = best.max(clique.len());
    }
    debug!(clique_size = best);
    best
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tests::{complete_graph, cycle_graph, empty_graph, path_graph, petersen_graph};

    #[test]
    fn known_clique_sizes() {
        assert_eq!(greedy_clique_size(&empty_graph(1)), 1);
        assert_eq!(greedy_clique_size(&empty_graph(4)), 1);
        assert_eq!(greedy_clique_size(&path_graph(5)), 2);
        assert_eq!(greedy_clique_size(&cycle_graph(3)), 3);
        assert_eq!(greedy_clique_size(&cycle_graph(5)), 2);
        assert_eq!(greedy_clique_size(&complete_graph(6)), 6);
        assert_eq!(greedy_clique_size(&petersen_graph()), 2);
    }

    #[test]
    fn parallel_edges_count_once() {
        // a path whose middle edge is doubled has no triangle
        let graph = petgraph::graph::UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (1, 2), (2, 3)]);
        assert_eq!(greedy_clique_size(&graph), 2);
    }

    #[test]
    fn large_sparse_graph() {
        let graph = path_graph(2_000);
        assert_eq!(greedy_clique_size(&graph), 2);
    }

    #[test]
    fn null_graph() {
        assert_eq!(greedy_clique_size(&empty_graph(0)), 0);
    }

    #[test]
    fn finds_clique_away_from_high_degree_vertex() {
        // vertex 0 is the center of a star, vertices 5, 6, 7 form a triangle
        let graph = petgraph::graph::UnGraph::<(), ()>::from_edges([
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (0, 5),
            (5, 6),
            (6, 7),
            (5, 7),
        ]);
        assert_eq!(greedy_clique_size(&graph), 3);
    }
}
