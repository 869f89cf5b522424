use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand, ValueEnum};
use digraph::{DirectedGraph, Graph, builder::GraphBuilder};
use log::{error, info};

mod demo;

#[derive(Parser)]
#[command(version, about = "Directed graph traversal and cycle detection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Check the sample graphs and print a random graph
    Demo {
        /// Seed for the random graph
        #[arg(short, long, default_value_t = 10)]
        seed: u64,

        /// Number of nodes in the random graph
        #[arg(short, long, default_value_t = 6)]
        nodes: usize,

        /// Maximum number of neighbors per node
        #[arg(short, long, default_value_t = 3)]
        max_degree: usize,
    },
    /// Run an algorithm on a graph read from <IN_FILE>
    Run {
        /// Graph as '.json' adjacency object, any other extension is read as edge list
        in_file: PathBuf,

        algorithm: Algorithm,

        /// Node to start from
        start: String,
    },
    /// Print the adjacency list of a graph read from <IN_FILE>
    Print { in_file: PathBuf },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Algorithm {
    Bfs,
    Dfs,
    Cycle,
}

fn load_graph(in_file: &Path) -> Result<DirectedGraph<String>, Box<dyn Error>> {
    info!("Load graph from {:?}", in_file);
    let content = fs::read_to_string(in_file)?;

    let graph = match in_file.extension().and_then(|ext| ext.to_str()) {
        Some("json") => GraphBuilder::new().json(&content)?.build(),
        _ => GraphBuilder::new().edge_list(&content)?.build(),
    };

    info!(
        "Loaded graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

fn run(command: Commands) -> Result<bool, Box<dyn Error>> {
    match command {
        Commands::Demo {
            seed,
            nodes,
            max_degree,
        } => {
            let checks = demo::check_samples();
            demo::random_demo(nodes, max_degree, seed)?;
            Ok(checks.failed() == 0)
        }
        Commands::Run {
            in_file,
            algorithm,
            start,
        } => {
            let graph = load_graph(&in_file)?;

            match algorithm {
                Algorithm::Bfs => println!("{:?}", graph.bfs(&start)?),
                Algorithm::Dfs => println!("{:?}", graph.dfs(&start)?),
                Algorithm::Cycle => println!("{}", graph.has_cycle(&start)?),
            }
            Ok(true)
        }
        Commands::Print { in_file } => {
            load_graph(&in_file)?.print_graph();
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            error!("Some sample checks failed");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
