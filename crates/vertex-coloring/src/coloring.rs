use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::ops::Index;

use petgraph::visit::{IntoNeighbors, NodeCompactIndexable};

/// Returns whether `coloring` is a proper coloring of `graph`.
///
/// `coloring[i]` is the color of the vertex with index `i`. A coloring is
/// proper if no edge joins two vertices of the same color. A slice whose
/// length differs from the number of vertices is never proper.
///
/// ```rust
/// use petgraph::graph::UnGraph;
/// use vertex_coloring::is_proper_coloring;
///
/// let path = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2)]);
/// assert!(is_proper_coloring(&path, &[0, 1, 0]));
/// assert!(!is_proper_coloring(&path, &[0, 0, 1]));
/// ```
pub fn is_proper_coloring<G>(graph: G, coloring: &[u32]) -> bool
where
    G: NodeCompactIndexable + IntoNeighbors,
{
    if coloring.len() != graph.node_bound() {
        return false;
    }
    coloring.iter().enumerate().all(|(u, color)| {
        graph.neighbors(graph.from_index(u)).all(|v| coloring.get(graph.to_index(v)) != Some(color))
    })
}

/// A vertex coloring. Colors are `0..k` where `k` is the number of colors.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Coloring {
    colors: Vec<u32>,
}

impl Debug for Coloring {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.colors).finish()
    }
}

impl Coloring {
    pub(crate) fn new(colors: Vec<u32>) -> Self {
        Self { colors }
    }

    /// Returns the number of colored vertices.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.colors.len()
    }

    /// Returns the number of colors used.
    pub fn color_count(&self) -> usize {
        self.colors.iter().max().map_or(0, |&c| c as usize + 1)
    }

    /// Returns the color of `vertex`, or `None` if there is no such vertex.
    pub fn color(&self, vertex: usize) -> Option<u32> {
        self.colors.get(vertex).copied()
    }

    /// Returns the number of vertices of each color.
    pub fn class_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.color_count()];
        for &c in &self.colors {
            sizes[c as usize] += 1;
        }
        sizes
    }

    /// Returns the vertices of each color in ascending order.
    pub fn color_classes(&self) -> Vec<Vec<usize>> {
        let mut classes = vec![vec![]; self.color_count()];
        for (u, &c) in self.colors.iter().enumerate() {
            classes[c as usize].push(u);
        }
        classes
    }

    /// Returns the colors as a slice, indexed by vertex.
    #[inline(always)]
    pub fn as_slice(&self) -> &[u32] {
        &self.colors
    }

    /// Converts into the underlying vector.
    pub fn into_vec(self) -> Vec<u32> {
        self.colors
    }

    /// Relabels colors in order of first appearance. Two colorings induce the
    /// same color classes exactly if their normal forms are equal.
    pub(crate) fn normal_form(&self) -> Vec<u32> {
        let mut labels = HashMap::new();
        self.colors
            .iter()
            .map(|c| {
                let next = labels.len() as u32;
                *labels.entry(*c).or_insert(next)
            })
            .collect()
    }
}

impl AsRef<[u32]> for Coloring {
    fn as_ref(&self) -> &[u32] {
        &self.colors
    }
}

impl Index<usize> for Coloring {
    type Output = u32;
    fn index(&self, vertex: usize) -> &Self::Output {
        &self.colors[vertex]
    }
}

impl From<Coloring> for Vec<u32> {
    fn from(coloring: Coloring) -> Self {
        coloring.colors
    }
}

impl<const N: usize> PartialEq<[u32; N]> for Coloring {
    fn eq(&self, other: &[u32; N]) -> bool {
        self.colors == other
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tests::{complete_graph, cycle_graph, empty_graph, path_graph, petersen_graph};

    #[test]
    fn distinct_colors_are_proper() {
        for graph in [complete_graph(5), cycle_graph(6), path_graph(4), petersen_graph()] {
            let n = graph.node_count() as u32;
            let distinct: Vec<u32> = (0..n).collect();
            assert!(is_proper_coloring(&graph, &distinct));
        }
    }

    #[test]
    fn single_color_is_not_proper() {
        for graph in [complete_graph(2), cycle_graph(5), path_graph(4), petersen_graph()] {
            let same = vec![0; graph.node_count()];
            assert!(!is_proper_coloring(&graph, &same));
        }
        assert!(is_proper_coloring(&empty_graph(3), &[0, 0, 0]));
    }

    #[test]
    fn wrong_length_is_not_proper() {
        let graph = path_graph(3);
        assert!(!is_proper_coloring(&graph, &[0, 1]));
        assert!(!is_proper_coloring(&graph, &[0, 1, 0, 1]));
    }

    #[test]
    fn odd_cycle() {
        let graph = cycle_graph(5);
        assert!(!is_proper_coloring(&graph, &[0, 1, 0, 1, 0]));
        assert!(is_proper_coloring(&graph, &[0, 1, 0, 1, 2]));
    }

    #[test]
    fn coloring_accessors() {
        let coloring = Coloring::new(vec![0, 1, 0, 1, 2, 1, 2, 2, 0, 0]);
        assert_eq!(coloring.vertex_count(), 10);
        assert_eq!(coloring.color_count(), 3);
        assert_eq!(coloring.color(4), Some(2));
        assert_eq!(coloring.color(10), None);
        assert_eq!(coloring[1], 1);
        assert_eq!(coloring.class_sizes(), vec![4, 3, 3]);
        assert_eq!(coloring.color_classes(), vec![vec![0, 2, 8, 9], vec![1, 3, 5], vec![4, 6, 7]]);
        assert_eq!(format!("{:?}", coloring), "[0, 1, 0, 1, 2, 1, 2, 2, 0, 0]");
        assert_eq!(Vec::from(coloring.clone()), coloring.clone().into_vec());
    }

    #[test]
    fn normal_form() {
        let a = Coloring::new(vec![1, 0, 1, 0]);
        let b = Coloring::new(vec![0, 1, 0, 1]);
        assert_eq!(a.normal_form(), vec![0, 1, 0, 1]);
        assert_eq!(a.normal_form(), b.normal_form());
        assert_ne!(Coloring::new(vec![0, 1, 1, 0]).normal_form(), b.normal_form());
    }
}
