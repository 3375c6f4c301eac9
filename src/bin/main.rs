use anstream::println;
use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use owo_colors::OwoColorize;

use graph_search::Algorithm;
use graph_search::Cost;
use graph_search::EdgeWeights;
use graph_search::Graph;
use graph_search::NodeId;
use graph_search::Outcome;
use graph_search::SearchInputs;
use graph_search::adversarial::GameTree;
use graph_search::input::EdgeSpec;
use graph_search::input::HeuristicSpec;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Command line arguments
#[derive(Parser, Debug)]
#[clap(long_version = graph_search::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Searches a path between two nodes of an undirected graph.
    Search {
        /// Undirected edge, `SRC-DEST` or `SRC-DEST:WEIGHT` (weight defaults to 1).
        #[arg(short, long = "edge", required = true)]
        edges: Vec<EdgeSpec>,

        /// Heuristic estimate of a node, `NODE=VALUE`.
        #[arg(long = "heuristic")]
        heuristics: Vec<HeuristicSpec>,

        #[arg(short, long)]
        start: NodeId,

        #[arg(short, long)]
        goal: NodeId,

        /// Largest acceptable path cost for the bounded searches.
        #[arg(long, env = "ORACLE")]
        oracle: Option<u32>,

        /// Runs every algorithm when omitted.
        #[arg(short, long)]
        algorithm: Option<Algorithm>,
    },

    /// Evaluates a binary game tree given its leaves, left to right.
    AlphaBeta {
        /// A power-of-two number of leaf values.
        #[arg(required = true, allow_negative_numbers = true)]
        leaves: Vec<i64>,
    },
}

/// Path costs saturate at the sentinel when an edge weight is missing.
fn cost_label(cost: u32) -> String {
    if cost.valid() {
        cost.to_string()
    } else {
        "unknown".to_owned()
    }
}

fn search(
    edges: &[EdgeSpec],
    heuristics: &[HeuristicSpec],
    start: NodeId,
    goal: NodeId,
    oracle: Option<u32>,
    algorithm: Option<Algorithm>,
) -> anyhow::Result<()> {
    let mut graph = Graph::<u32>::new();
    let mut weights = EdgeWeights::<u32>::new();
    for e in edges {
        graph
            .add_weighted_edge(e.src, e.dest, e.weight(), &mut weights)
            .with_context(|| format!("Adding edge {}-{}", e.src, e.dest))?;
    }
    for h in heuristics {
        graph.set_heuristic(h.node, h.value);
    }
    log::debug!("{graph}");

    let mut inputs = SearchInputs::new(&graph, &weights);
    if let Some(oracle) = oracle {
        inputs = inputs.with_oracle(oracle);
    }

    let algorithms = match algorithm {
        Some(a) => vec![a],
        None => Algorithm::ALL.to_vec(),
    };
    println!("Searching {}->{}", start.yellow(), goal.yellow());
    for algorithm in algorithms {
        let name = algorithm.to_string();
        let outcome = match graph_search::run(algorithm, &inputs, start, goal) {
            Ok(outcome) => outcome,
            Err(e) => {
                println!("{:>32}: {}", name.bold(), e.red());
                continue;
            }
        };
        match &outcome {
            Outcome::Single(p) if p.is_empty() => {
                println!("{:>32}: {}", name.bold(), "no path".red());
            }
            Outcome::Single(p) => {
                println!(
                    "{:>32}: {} (cost {})",
                    name.bold(),
                    p.green(),
                    cost_label(p.cost(&weights)).cyan()
                );
            }
            Outcome::Many(ps) => {
                println!("{:>32}: {} paths", name.bold(), ps.len().yellow());
                for p in ps {
                    println!(
                        "{:>32}  {} (cost {})",
                        "",
                        p.green(),
                        cost_label(p.cost(&weights)).cyan()
                    );
                }
            }
        }
    }

    Ok(())
}

fn alpha_beta(leaves: Vec<i64>) -> anyhow::Result<()> {
    let tree = GameTree::new(leaves)?;
    let evaluation = tree.alpha_beta();
    println!(
        "Value {} ({}/{} leaves evaluated, {} cutoffs)",
        evaluation.value.green(),
        evaluation.leaves_evaluated.yellow(),
        tree.leaves().len(),
        evaluation.cutoffs.yellow()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    args.color.write_global();
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?.start()?;

    match args.command {
        Command::Search {
            edges,
            heuristics,
            start,
            goal,
            oracle,
            algorithm,
        } => search(&edges, &heuristics, start, goal, oracle, algorithm),
        Command::AlphaBeta { leaves } => alpha_beta(leaves),
    }
}
