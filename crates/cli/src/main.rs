use clap::Parser;
use common::instances::petersen_graph;
use common::io::{read_adjacency_list, read_adjacency_matrix, read_edge_list, GraphFileType};
use std::error::Error;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::FmtSubscriber;
use vertex_coloring::{optimal_colorings_with, Colorings, LowerBound, SearchOptions, ShapePolicy};

/// Prints the colorings of a graph that use the fewest colors.
///
/// Without an input file, the Petersen graph is colored.
#[derive(Debug, Parser)]
struct Cli {
    #[arg(long, value_enum, default_value_t = GraphFileType::AdjacencyList)]
    input_type: GraphFileType,
    #[arg(long)]
    input: Option<PathBuf>,
    /// Start the search at this many colors. The value is not verified.
    #[arg(long, conflicts_with = "clique_bound")]
    lower_bound: Option<usize>,
    /// Start the search at the size of a greedily found clique.
    #[arg(long)]
    clique_bound: bool,
    /// Report every coloring with distinct color classes, not one per shape.
    #[arg(long)]
    all_per_shape: bool,
    #[arg(long)]
    max_partitions: Option<usize>,
    #[arg(long)]
    time_limit_ms: Option<u64>,
    #[arg(long)]
    log_level: Option<Level>,
}

impl Cli {
    fn search_options(&self) -> SearchOptions {
        let lower_bound = match (self.lower_bound, self.clique_bound) {
            (Some(bound), _) => LowerBound::Trusted(bound),
            (None, true) => LowerBound::GreedyClique,
            (None, false) => LowerBound::Unbounded,
        };
        let shape_policy = if self.all_per_shape { ShapePolicy::AllPerShape } else { ShapePolicy::FirstPerShape };
        let mut options = SearchOptions::new().with_lower_bound(lower_bound).with_shape_policy(shape_policy);
        if let Some(max_partitions) = self.max_partitions {
            options = options.with_max_partitions(max_partitions);
        }
        if let Some(ms) = self.time_limit_ms {
            options = options.with_time_limit(Duration::from_millis(ms));
        }
        options
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(level) = cli.log_level {
        let subscriber = FmtSubscriber::builder().with_max_level(level).with_span_events(FmtSpan::CLOSE).finish();

        subscriber.init();
    };

    let options = cli.search_options();
    let start = Instant::now();
    let colorings = match &cli.input {
        None => {
            println!("colorings of the petersen graph:");
            optimal_colorings_with(&petersen_graph(), &options)?
        }
        Some(path) => match cli.input_type {
            GraphFileType::AdjacencyList => optimal_colorings_with(&read_adjacency_list(path)?, &options)?,
            GraphFileType::AdjacencyMatrix => optimal_colorings_with(&read_adjacency_matrix(path)?, &options)?,
            GraphFileType::EdgeList => optimal_colorings_with(&read_edge_list(path)?, &options)?,
        },
    };
    let elapsed = start.elapsed();

    print_colorings(&colorings);
    eprintln!(
        "{} partitions, {} permutations, {} μs",
        colorings.stats().partitions_examined,
        colorings.stats().permutations_examined,
        elapsed.as_micros()
    );
    Ok(())
}

fn print_colorings(colorings: &Colorings) {
    for coloring in colorings {
        println!("{:?}", coloring);
    }
    match (colorings.color_count(), colorings.is_exhaustive()) {
        (Some(k), true) => println!("minimum number of colors: {k}"),
        (Some(k), false) => println!("search stopped early, best number of colors found: {k}"),
        (None, _) => println!("search stopped early, no coloring found"),
    }
}
