use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use pn_graph::{
    BuildOptions, DEFAULT_ANCHOR_ID, Graph, PathOutcome, ReachabilityOptions, build_graph_with,
    find_path, find_unreachable_nodes_with,
};
use pn_network::{
    RawConnection, RawNode, connections_along_path, dangling_connections,
    filter_dangling_connections, load_connections, load_nodes, total_energy_loss,
    total_volume_liters, validate_network,
};

mod error;

use error::CliResult;

#[derive(Parser, Debug)]
#[command(name = "pn-cli")]
#[command(about = "PipeNet CLI - pipe network pathfinding and reachability", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check node and connection records for consistency
    Validate {
        #[command(flatten)]
        network: NetworkArgs,
    },
    /// Print network size, total pipe volume and total energy loss
    Stats {
        #[command(flatten)]
        network: NetworkArgs,
    },
    /// Find the cheapest path from a node to the goal
    Path {
        #[command(flatten)]
        network: NetworkArgs,
        #[command(flatten)]
        search: SearchArgs,
        /// Node to start from
        start: String,
    },
    /// List nodes that cannot reach the goal
    Unreachable {
        #[command(flatten)]
        network: NetworkArgs,
        #[command(flatten)]
        search: SearchArgs,
        /// Run the per-node searches on all cores
        #[arg(long)]
        parallel: bool,
    },
}

#[derive(Args, Debug)]
struct NetworkArgs {
    /// Node records (JSON or YAML array)
    #[arg(long)]
    nodes: PathBuf,
    /// Connection records (JSON or YAML array)
    #[arg(long)]
    connections: PathBuf,
    /// Drop connections whose endpoints are missing instead of failing
    #[arg(long)]
    clean: bool,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Node the heuristic is measured against
    #[arg(long, default_value = DEFAULT_ANCHOR_ID)]
    anchor: String,
    /// Target node (defaults to the anchor)
    #[arg(long)]
    goal: Option<String>,
}

impl SearchArgs {
    fn goal(&self) -> &str {
        self.goal.as_deref().unwrap_or(&self.anchor)
    }
}

struct Network {
    nodes: Vec<RawNode>,
    connections: Vec<RawConnection>,
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { network } => cmd_validate(&network),
        Commands::Stats { network } => cmd_stats(&network),
        Commands::Path {
            network,
            search,
            start,
        } => cmd_path(&network, &search, &start),
        Commands::Unreachable {
            network,
            search,
            parallel,
        } => cmd_unreachable(&network, &search, parallel),
    }
}

fn load_network(args: &NetworkArgs) -> CliResult<Network> {
    let nodes = load_nodes(&args.nodes)?;
    let mut connections = load_connections(&args.connections)?;
    if args.clean {
        connections = filter_dangling_connections(&connections, &nodes);
    }
    tracing::info!(
        nodes = nodes.len(),
        connections = connections.len(),
        "network loaded"
    );
    Ok(Network { nodes, connections })
}

fn build(network: &Network, search: &SearchArgs) -> CliResult<Graph> {
    let options = BuildOptions {
        anchor_id: search.anchor.clone(),
    };
    Ok(build_graph_with(&network.nodes, &network.connections, &options)?)
}

fn cmd_validate(args: &NetworkArgs) -> CliResult<()> {
    println!(
        "Validating network: {} + {}",
        args.nodes.display(),
        args.connections.display()
    );
    let network = load_network(args)?;

    let dangling = dangling_connections(&network.connections, &network.nodes);
    for connection in &dangling {
        println!("  dangling: {}", connection.key());
    }

    validate_network(&network.nodes, &network.connections)?;
    println!("✓ Network is valid");
    Ok(())
}

fn cmd_stats(args: &NetworkArgs) -> CliResult<()> {
    let network = load_network(args)?;
    let volume = total_volume_liters(&network.connections, &network.nodes)?;
    let loss = total_energy_loss(&network.connections, &network.nodes)?;

    println!("Nodes:        {}", network.nodes.len());
    println!("Connections:  {}", network.connections.len());
    println!("Pipe volume:  {:.3} L", volume);
    println!("Energy loss:  {:.3}", loss);
    Ok(())
}

fn cmd_path(args: &NetworkArgs, search: &SearchArgs, start: &str) -> CliResult<()> {
    let network = load_network(args)?;
    let graph = build(&network, search)?;
    let goal = search.goal();

    match find_path(&graph, start, goal)? {
        PathOutcome::Found(path) => {
            println!("✓ Path {} → {} ({} hops)", start, goal, path.hops());
            println!("  {}", path.nodes.join(" → "));
            println!("  cost: {:.6}", path.cost);
            for connection in connections_along_path(&path.nodes, &network.connections)? {
                println!(
                    "  {} ({} cm, loss {})",
                    connection.key(),
                    connection.diameter_in_cm,
                    connection.loss_of_energy
                );
            }
        }
        PathOutcome::NoPath => println!("✗ No path from {} to {}", start, goal),
    }
    Ok(())
}

fn cmd_unreachable(args: &NetworkArgs, search: &SearchArgs, parallel: bool) -> CliResult<()> {
    let network = load_network(args)?;
    let graph = build(&network, search)?;
    let goal = search.goal();

    let unreachable = find_unreachable_nodes_with(&graph, goal, ReachabilityOptions { parallel })?;
    if unreachable.is_empty() {
        println!("✓ All {} nodes reach {}", graph.len(), goal);
    } else {
        println!("{} of {} nodes cannot reach {}:", unreachable.len(), graph.len(), goal);
        for id in &unreachable {
            println!("  {}", id);
        }
    }
    Ok(())
}
