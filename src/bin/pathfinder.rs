use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pathfinder::{find_path_by_name, load_graph, spanning_forest_with, Graph, SpanningStrategy};
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "PATHFINDER_LOG";

#[derive(Parser)]
#[command(name = "pathfinder")]
#[command(about = "Path search and spanning forests over a graph file", long_about = None)]
struct Cli {
    /// Graph description file (image line, NODES section, ARCS section)
    graph: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    /// Log at debug level unless PATHFINDER_LOG says otherwise
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a path between two named nodes
    Path {
        /// Start node
        from: String,
        /// Target node
        to: String,
    },
    /// Select a minimum spanning forest
    Mst {
        /// Edge acceptance rule
        #[arg(long, value_enum, default_value_t = Strategy::Membership)]
        strategy: Strategy,
    },
    /// Summarise the graph
    Info,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    /// Reject an edge once both endpoints have been touched
    Membership,
    /// Reject an edge whose endpoints are already connected
    UnionFind,
}

impl From<Strategy> for SpanningStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Membership => SpanningStrategy::VisitedMembership,
            Strategy::UnionFind => SpanningStrategy::UnionFind,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let graph = load_graph(&cli.graph)
        .with_context(|| format!("Failed to load graph from {}", cli.graph.display()))?;

    match cli.command {
        Commands::Path { from, to } => run_path(&graph, &from, &to, cli.json)?,
        Commands::Mst { strategy } => run_mst(&graph, strategy.into(), cli.json)?,
        Commands::Info => run_info(&graph, cli.json)?,
    }

    Ok(())
}

fn run_path(graph: &Graph, from: &str, to: &str, json: bool) -> Result<()> {
    let outcome = find_path_by_name(graph, from, to)
        .with_context(|| format!("Failed to find a path from {from} to {to}"))?;

    if json {
        let report = json!({
            "from": from,
            "to": to,
            "weight": outcome.path.weight(),
            "dequeues": outcome.dequeues,
            "edges": outcome.path.describe(graph),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in outcome.path.describe(graph) {
            println!("{line}");
        }
        println!("Total distance: {}", outcome.path.weight());
        println!(
            "The search dequeued {} paths to find this one.",
            outcome.dequeues
        );
    }
    Ok(())
}

fn run_mst(graph: &Graph, strategy: SpanningStrategy, json: bool) -> Result<()> {
    let forest = spanning_forest_with(graph, strategy);
    let describe = |edges: &[pathfinder::EdgeId]| -> Vec<String> {
        edges.iter().map(|&e| graph.describe_edge(e)).collect()
    };

    if json {
        let report = json!({
            "strategy": strategy,
            "total_weight": forest.total_weight,
            "accepted": describe(&forest.accepted),
            "rejected": describe(&forest.rejected),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in describe(&forest.accepted) {
            println!("{line}");
        }
        println!(
            "Accepted {} of {} edges, total distance {}",
            forest.accepted.len(),
            graph.edge_count(),
            forest.total_weight
        );
    }
    Ok(())
}

fn run_info(graph: &Graph, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(graph)?);
    } else {
        if let Some(background) = graph.background() {
            println!("Background: {background}");
        }
        println!("{graph}");
        for (_, node) in graph.nodes() {
            println!("  {} degree {}", node.name(), node.degree());
        }
    }
    Ok(())
}
