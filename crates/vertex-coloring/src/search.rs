use std::collections::HashSet;
use std::ops::Index;
use std::time::{Duration, Instant};

use petgraph::visit::{GraphProp, IntoNeighbors, NodeCompactIndexable};
use petgraph::Undirected;
use thiserror::Error;
use tracing::{debug, info, instrument, trace};

use crate::clique::greedy_clique_size;
use crate::coloring::{is_proper_coloring, Coloring};
use crate::graph::{inspect, InvalidGraphError};
use crate::partition::Partitions;
use crate::permutation::next_permutation;

/// The time limit is checked after this many permutations.
const PERMUTATIONS_PER_CLOCK_CHECK: u64 = 1 << 12;

/// Where the search starts counting colors.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LowerBound {
    /// Start with two colors, or with one if the graph has no edges.
    #[default]
    Unbounded,
    /// Start with the given number of colors.
    ///
    /// The value is trusted. If the graph can be colored with fewer colors,
    /// those colorings are not found.
    Trusted(usize),
    /// Start with the size of a clique found by [greedy_clique_size].
    GreedyClique,
}

/// Which valid arrangements of a partition shape are kept.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ShapePolicy {
    /// Keep the first valid arrangement of each shape and move on to the next
    /// shape. Each result represents one distribution of color class sizes.
    #[default]
    FirstPerShape,
    /// Keep every valid arrangement of each shape whose color classes differ
    /// from those of all arrangements kept before.
    AllPerShape,
}

/// Options for [optimal_colorings_with].
///
/// ```rust
/// use std::time::Duration;
/// use vertex_coloring::{LowerBound, SearchOptions, ShapePolicy};
///
/// let options = SearchOptions::new()
///     .with_lower_bound(LowerBound::GreedyClique)
///     .with_shape_policy(ShapePolicy::AllPerShape)
///     .with_time_limit(Duration::from_secs(10));
/// assert_eq!(options.shape_policy(), ShapePolicy::AllPerShape);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchOptions {
    lower_bound: LowerBound,
    shape_policy: ShapePolicy,
    max_partitions: Option<usize>,
    time_limit: Option<Duration>,
}

impl SearchOptions {
    /// Default options: no lower bound, one coloring per shape, no limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lower bound on the number of colors.
    pub fn with_lower_bound(mut self, lower_bound: LowerBound) -> Self {
        self.lower_bound = lower_bound;
        self
    }

    /// Set which arrangements of a shape are kept.
    pub fn with_shape_policy(mut self, shape_policy: ShapePolicy) -> Self {
        self.shape_policy = shape_policy;
        self
    }

    /// Stop after examining this many partitions.
    pub fn with_max_partitions(mut self, max_partitions: usize) -> Self {
        self.max_partitions = Some(max_partitions);
        self
    }

    /// Stop once the search has run this long.
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    /// Returns the lower bound on the number of colors.
    pub fn lower_bound(&self) -> LowerBound {
        self.lower_bound
    }

    /// Returns which arrangements of a shape are kept.
    pub fn shape_policy(&self) -> ShapePolicy {
        self.shape_policy
    }

    /// Returns the maximum number of partitions examined, if any.
    pub fn max_partitions(&self) -> Option<usize> {
        self.max_partitions
    }

    /// Returns the time limit, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }
}

/// The search was not started.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SearchError {
    /// The graph is not valid input.
    #[error("invalid graph")]
    InvalidGraph(#[from] InvalidGraphError),
    /// A trusted lower bound is zero or exceeds the number of vertices.
    #[error("lower bound {bound} is not in 1..={vertex_count}")]
    InvalidLowerBound {
        /// The given bound.
        bound: usize,
        /// Number of vertices of the graph.
        vertex_count: usize,
    },
}

/// Counters collected during a search.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchStats {
    /// Number of partition shapes whose arrangements were enumerated.
    pub partitions_examined: usize,
    /// Number of arrangements checked for validity.
    pub permutations_examined: u64,
}

/// The colorings found by a search, in order of discovery.
///
/// All colorings use the same number of colors. If the search was exhaustive,
/// that number is the chromatic number of the graph.
#[derive(Clone, Debug)]
pub struct Colorings {
    colorings: Vec<Coloring>,
    stats: SearchStats,
    exhaustive: bool,
}

impl Colorings {
    /// Returns the number of colors of the colorings, or `None` if a limit
    /// stopped the search before any coloring was found.
    pub fn color_count(&self) -> Option<usize> {
        self.colorings.first().map(Coloring::color_count)
    }

    /// Returns whether the search ran to completion. Otherwise a limit
    /// stopped it and the colorings need not use the fewest colors.
    pub fn is_exhaustive(&self) -> bool {
        self.exhaustive
    }

    /// Returns the search counters.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Returns the number of colorings.
    pub fn len(&self) -> usize {
        self.colorings.len()
    }

    /// Returns whether no coloring was found.
    pub fn is_empty(&self) -> bool {
        self.colorings.is_empty()
    }

    /// Returns an iterator over the colorings.
    pub fn iter(&self) -> std::slice::Iter<'_, Coloring> {
        self.colorings.iter()
    }

    /// Returns the colorings as a slice.
    pub fn as_slice(&self) -> &[Coloring] {
        &self.colorings
    }

    /// Converts into the underlying vector.
    pub fn into_vec(self) -> Vec<Coloring> {
        self.colorings
    }
}

impl Index<usize> for Colorings {
    type Output = Coloring;
    fn index(&self, index: usize) -> &Self::Output {
        &self.colorings[index]
    }
}

impl IntoIterator for Colorings {
    type Item = Coloring;
    type IntoIter = std::vec::IntoIter<Coloring>;
    fn into_iter(self) -> Self::IntoIter {
        self.colorings.into_iter()
    }
}

impl<'a> IntoIterator for &'a Colorings {
    type Item = &'a Coloring;
    type IntoIter = std::slice::Iter<'a, Coloring>;
    fn into_iter(self) -> Self::IntoIter {
        self.colorings.iter()
    }
}

/// Computes colorings with the minimum number of colors using the default
/// [SearchOptions].
///
/// # Errors
///
/// Returns a [SearchError] if the graph has no vertices or contains a self loop.
pub fn optimal_colorings<G>(graph: G) -> Result<Colorings, SearchError>
where
    G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
{
    optimal_colorings_with(graph, &SearchOptions::default())
}

/// Computes colorings with the minimum number of colors.
///
/// Partitions of the vertex count are examined with an increasing number of
/// parts. Each partition is turned into its canonical coloring, whose
/// arrangements are checked in lexicographic order. The number of parts of the
/// first partition with a valid arrangement is the minimum number of colors.
/// The remaining partitions with that many parts are examined as well, then
/// the search stops.
///
/// # Errors
///
/// Returns a [SearchError] if the graph has no vertices or contains a self
/// loop, or if a trusted lower bound is not in `1..=n`. No search work is
/// done in that case.
#[instrument(skip_all)]
pub fn optimal_colorings_with<G>(graph: G, options: &SearchOptions) -> Result<Colorings, SearchError>
where
    G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
{
    let summary = inspect(graph)?;
    let n = summary.vertex_count;

    let start_parts = match options.lower_bound {
        LowerBound::Unbounded => {
            if summary.has_edges {
                2
            } else {
                1
            }
        }
        LowerBound::Trusted(bound) => {
            if bound == 0 || bound > n {
                return Err(SearchError::InvalidLowerBound { bound, vertex_count: n });
            }
            bound
        }
        LowerBound::GreedyClique => greedy_clique_size(graph),
    };

    if n == 1 {
        info!(number_of_vertices = 1, number_of_colors = 1, number_of_colorings = 1);
        return Ok(Colorings {
            colorings: vec![Coloring::new(vec![0])],
            stats: SearchStats::default(),
            exhaustive: true,
        });
    }

    let start = Instant::now();
    let timed_out = || options.time_limit.is_some_and(|limit| start.elapsed() >= limit);

    let mut colorings = Vec::new();
    let mut stats = SearchStats::default();
    let mut exhaustive = true;
    let mut best: Option<usize> = None;
    let mut coloring = Vec::with_capacity(n);
    let mut seen = HashSet::new();

    'partitions: for partition in Partitions::starting_at(n, start_parts) {
        if best.is_some_and(|k| partition.part_count() > k) {
            break;
        }
        if options.max_partitions.is_some_and(|max| stats.partitions_examined >= max) || timed_out() {
            debug!(?partition, "search limit reached");
            exhaustive = false;
            break;
        }
        stats.partitions_examined += 1;
        trace!(?partition);

        partition.fill_canonical_coloring(&mut coloring);
        seen.clear();
        loop {
            stats.permutations_examined += 1;
            if is_proper_coloring(graph, &coloring) {
                best = Some(partition.part_count());
                let found = Coloring::new(coloring.clone());
                match options.shape_policy {
                    ShapePolicy::FirstPerShape => {
                        debug!(coloring = ?found, "found coloring");
                        colorings.push(found);
                        break;
                    }
                    ShapePolicy::AllPerShape => {
                        if seen.insert(found.normal_form()) {
                            debug!(coloring = ?found, "found coloring");
                            colorings.push(found);
                        }
                    }
                }
            }
            if !next_permutation(&mut coloring) {
                break;
            }
            if stats.permutations_examined % PERMUTATIONS_PER_CLOCK_CHECK == 0 && timed_out() {
                debug!(?partition, "search limit reached");
                exhaustive = false;
                break 'partitions;
            }
        }
    }

    info!(
        number_of_vertices = n,
        number_of_colors = ?best,
        number_of_colorings = colorings.len(),
        partitions_examined = stats.partitions_examined,
        permutations_examined = stats.permutations_examined,
        exhaustive
    );

    Ok(Colorings { colorings, stats, exhaustive })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tests::{complete_graph, cycle_graph, empty_graph, path_graph, petersen_graph};
    use crate::{AdjacencyList, AdjacencyMatrix};
    use petgraph::graph::{NodeIndex, UnGraph};

    const PETERSEN_FIRST: [u32; 10] = [0, 1, 0, 1, 2, 1, 2, 2, 0, 0];

    #[test]
    fn triangle() {
        let colorings = optimal_colorings(&complete_graph(3)).unwrap();
        assert_eq!(colorings.color_count(), Some(3));
        assert_eq!(colorings.len(), 1);
        assert_eq!(colorings[0], [0, 1, 2]);
        assert!(colorings.is_exhaustive());
        assert_eq!(colorings.stats(), SearchStats { partitions_examined: 2, permutations_examined: 4 });
    }

    #[test]
    fn path_4() {
        let colorings = optimal_colorings(&path_graph(4)).unwrap();
        assert_eq!(colorings.color_count(), Some(2));
        assert_eq!(colorings.as_slice(), &[Coloring::new(vec![0, 1, 0, 1])]);
        assert_eq!(colorings.stats(), SearchStats { partitions_examined: 2, permutations_examined: 6 });
    }

    #[test]
    fn petersen() {
        let graph = petersen_graph();
        let colorings = optimal_colorings(&graph).unwrap();
        assert_eq!(colorings.color_count(), Some(3));
        assert_eq!(colorings.len(), 1);
        assert_eq!(colorings[0], PETERSEN_FIRST);
        assert_eq!(colorings[0].class_sizes(), vec![4, 3, 3]);
        assert!(colorings.iter().all(|c| is_proper_coloring(&graph, c.as_slice())));
        assert_eq!(colorings.stats().partitions_examined, 13);
    }

    #[test]
    fn single_vertex() {
        let colorings = optimal_colorings(&empty_graph(1)).unwrap();
        let colorings: Vec<Vec<u32>> = colorings.into_iter().map(Vec::from).collect();
        assert_eq!(colorings, vec![vec![0]]);
    }

    #[test]
    fn edgeless_graph_uses_one_color() {
        let colorings = optimal_colorings(&empty_graph(4)).unwrap();
        assert_eq!(colorings.color_count(), Some(1));
        assert_eq!(colorings[0], [0, 0, 0, 0]);
    }

    #[test]
    fn single_edge() {
        let colorings = optimal_colorings(&complete_graph(2)).unwrap();
        assert_eq!(colorings.color_count(), Some(2));
        assert_eq!(colorings[0], [0, 1]);
    }

    #[test]
    fn complete_4() {
        let colorings = optimal_colorings(&complete_graph(4)).unwrap();
        assert_eq!(colorings.color_count(), Some(4));
        assert_eq!(colorings[0], [0, 1, 2, 3]);
    }

    #[test]
    fn cycles() {
        let colorings = optimal_colorings(&cycle_graph(5)).unwrap();
        assert_eq!(colorings.color_count(), Some(3));
        assert_eq!(colorings[0], [0, 1, 0, 1, 2]);

        let colorings = optimal_colorings(&cycle_graph(4)).unwrap();
        assert_eq!(colorings.color_count(), Some(2));
        assert_eq!(colorings[0], [0, 1, 0, 1]);
    }

    #[test]
    fn star() {
        let graph = UnGraph::<(), ()>::from_edges([(0, 1), (0, 2), (0, 3)]);
        let colorings = optimal_colorings(&graph).unwrap();
        assert_eq!(colorings.as_slice(), &[Coloring::new(vec![1, 0, 0, 0])]);
    }

    #[test]
    fn deterministic() {
        let graph = petersen_graph();
        let options = SearchOptions::new().with_shape_policy(ShapePolicy::AllPerShape);
        let first = optimal_colorings_with(&graph, &options).unwrap();
        let second = optimal_colorings_with(&graph, &options).unwrap();
        assert_eq!(first.as_slice(), second.as_slice());
        assert_eq!(first.stats(), second.stats());
    }

    #[test]
    fn representations_agree() {
        let graph = petersen_graph();
        let lists: Vec<Vec<usize>> =
            graph.node_indices().map(|u| graph.neighbors(u).map(|v| v.index()).collect()).collect();
        let list = AdjacencyList::new(lists).unwrap();
        let rows = (0..10).map(|u| (0..10).map(|v| list.has_edge(u, v) as u8).collect()).collect();
        let matrix = AdjacencyMatrix::new(rows).unwrap();

        let expected = optimal_colorings(&graph).unwrap().into_vec();
        assert_eq!(optimal_colorings(&list).unwrap().into_vec(), expected);
        assert_eq!(optimal_colorings(&matrix).unwrap().into_vec(), expected);
    }

    #[test]
    fn all_per_shape() {
        let graph = petersen_graph();
        let options = SearchOptions::new().with_shape_policy(ShapePolicy::AllPerShape);
        let colorings = optimal_colorings_with(&graph, &options).unwrap();
        assert_eq!(colorings.color_count(), Some(3));
        assert_eq!(colorings.len(), 20);
        assert_eq!(colorings[0], PETERSEN_FIRST);
        assert!(colorings.iter().all(|c| is_proper_coloring(&graph, c.as_slice())));
        let classes: HashSet<_> = colorings.iter().map(Coloring::normal_form).collect();
        assert_eq!(classes.len(), 20);

        let colorings = optimal_colorings_with(&cycle_graph(5), &options).unwrap();
        let colorings: Vec<Vec<u32>> = colorings.into_iter().map(Coloring::into_vec).collect();
        assert_eq!(
            colorings,
            vec![vec![0, 1, 0, 1, 2], vec![0, 1, 0, 2, 1], vec![0, 1, 2, 0, 1], vec![0, 2, 1, 0, 1], vec![2, 0, 1, 0, 1]]
        );
    }

    #[test]
    fn relabelings_are_not_repeated() {
        // [2, 2] has two arrangements with the classes {0, 2} and {1, 3}
        let options = SearchOptions::new().with_shape_policy(ShapePolicy::AllPerShape);
        let colorings = optimal_colorings_with(&path_graph(4), &options).unwrap();
        assert_eq!(colorings.len(), 1);
        assert_eq!(colorings[0], [0, 1, 0, 1]);
    }

    #[test]
    fn trusted_lower_bound() {
        let graph = petersen_graph();
        let options = SearchOptions::new().with_lower_bound(LowerBound::Trusted(3));
        let colorings = optimal_colorings_with(&graph, &options).unwrap();
        assert_eq!(colorings[0], PETERSEN_FIRST);
        assert_eq!(colorings.stats().partitions_examined, 8);

        let options = SearchOptions::new().with_lower_bound(LowerBound::Trusted(1));
        let colorings = optimal_colorings_with(&cycle_graph(5), &options).unwrap();
        assert_eq!(colorings[0], [0, 1, 0, 1, 2]);
    }

    #[test]
    fn too_large_lower_bound_skips_optimum() {
        let options = SearchOptions::new().with_lower_bound(LowerBound::Trusted(4));
        let colorings = optimal_colorings_with(&petersen_graph(), &options).unwrap();
        assert_eq!(colorings.color_count(), Some(4));
        assert_eq!(colorings.len(), 4);
        assert!(colorings.is_exhaustive());
    }

    #[test]
    fn greedy_clique_lower_bound() {
        let options = SearchOptions::new().with_lower_bound(LowerBound::GreedyClique);
        let colorings = optimal_colorings_with(&complete_graph(5), &options).unwrap();
        assert_eq!(colorings[0], [0, 1, 2, 3, 4]);
        assert_eq!(colorings.stats().partitions_examined, 1);

        let colorings = optimal_colorings_with(&petersen_graph(), &options).unwrap();
        assert_eq!(colorings[0], PETERSEN_FIRST);
    }

    #[test]
    fn invalid_lower_bound() {
        let graph = path_graph(3);
        for bound in [0, 4] {
            let options = SearchOptions::new().with_lower_bound(LowerBound::Trusted(bound));
            let err = optimal_colorings_with(&graph, &options).unwrap_err();
            assert_eq!(err, SearchError::InvalidLowerBound { bound, vertex_count: 3 });
        }
    }

    #[test]
    fn invalid_graphs() {
        let graph = UnGraph::<(), ()>::default();
        assert_eq!(optimal_colorings(&graph).unwrap_err(), SearchError::InvalidGraph(InvalidGraphError::Empty));

        let mut graph = path_graph(3);
        graph.add_edge(NodeIndex::new(2), NodeIndex::new(2), ());
        assert_eq!(optimal_colorings(&graph).unwrap_err(), SearchError::InvalidGraph(InvalidGraphError::SelfLoop(2)));
    }

    #[test]
    fn partition_limit() {
        // [9, 1] is the only partition examined and has no valid arrangement
        let options = SearchOptions::new().with_max_partitions(1);
        let colorings = optimal_colorings_with(&petersen_graph(), &options).unwrap();
        assert!(colorings.is_empty());
        assert_eq!(colorings.color_count(), None);
        assert!(!colorings.is_exhaustive());
        assert_eq!(colorings.stats().partitions_examined, 1);
        assert_eq!(colorings.stats().permutations_examined, 10);
    }

    #[test]
    fn partition_limit_not_reached() {
        let options = SearchOptions::new().with_max_partitions(2);
        let colorings = optimal_colorings_with(&complete_graph(3), &options).unwrap();
        assert!(colorings.is_exhaustive());
        assert_eq!(colorings[0], [0, 1, 2]);
    }

    #[test]
    fn time_limit() {
        let options = SearchOptions::new().with_time_limit(Duration::ZERO);
        let colorings = optimal_colorings_with(&petersen_graph(), &options).unwrap();
        assert!(colorings.is_empty());
        assert!(!colorings.is_exhaustive());
        assert_eq!(colorings.stats().partitions_examined, 0);
    }

    #[test]
    fn time_limit_inside_shape() {
        // [11, 1, ..., 1] has 20! / 11! arrangements, none of them proper
        let options = SearchOptions::new()
            .with_lower_bound(LowerBound::Trusted(10))
            .with_time_limit(Duration::from_millis(50));
        let colorings = optimal_colorings_with(&complete_graph(20), &options).unwrap();
        assert!(colorings.is_empty());
        assert!(!colorings.is_exhaustive());
        let stats = colorings.stats();
        assert_eq!(stats.partitions_examined, 1);
        assert!(stats.permutations_examined >= PERMUTATIONS_PER_CLOCK_CHECK);
        assert_eq!(stats.permutations_examined % PERMUTATIONS_PER_CLOCK_CHECK, 0);
    }

    #[test]
    fn unbounded_is_default() {
        assert_eq!(SearchOptions::new().lower_bound(), LowerBound::Unbounded);
    }

    #[test]
    fn error_messages() {
        let err = SearchError::InvalidLowerBound { bound: 5, vertex_count: 3 };
        assert_eq!(err.to_string(), "lower bound 5 is not in 1..=3");
        let err = SearchError::from(InvalidGraphError::SelfLoop(1));
        assert_eq!(err.to_string(), "invalid graph");
        assert_eq!(InvalidGraphError::SelfLoop(1).to_string(), "found self loop at vertex 1");
    }
}
