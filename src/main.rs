//! Ant colony TSP solver CLI.
//!
//! Solve a node list once, or edit it interactively and solve on demand.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_antcolony::aco::{AcoConfig, AcoResult, Colony};
use u_antcolony::editor::EditorSession;
use u_antcolony::nodes::NodeList;
use u_antcolony::render::{TourPlot, DEFAULT_POINT_RADIUS};

#[derive(Parser)]
#[command(name = "aco-tsp")]
#[command(about = "Approximate symmetric TSP tours with ant colony optimization")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a node list once and print the best tour.
    Solve {
        #[command(flatten)]
        params: RunParams,
    },

    /// Edit the node list interactively; `run` solves the current list.
    Interactive {
        #[command(flatten)]
        params: RunParams,
    },
}

#[derive(Args)]
struct RunParams {
    /// CSV file of `x,y` rows; the built-in 30-node instance if omitted
    #[arg(short, long)]
    nodes: Option<PathBuf>,

    /// Number of ants
    #[arg(short, long, default_value = "4")]
    colony_size: usize,

    /// Number of iterations
    #[arg(short, long, default_value = "100")]
    steps: usize,

    /// Pheromone exponent
    #[arg(long, default_value = "1.0")]
    alpha: f64,

    /// Heuristic exponent
    #[arg(long, default_value = "3.0")]
    beta: f64,

    /// Evaporation rate in [0, 1]
    #[arg(long, default_value = "0.1")]
    rho: f64,

    /// Pheromone deposit constant Q
    #[arg(long, default_value = "1.0")]
    deposit_weight: f64,

    /// Initial pheromone on every edge
    #[arg(long, default_value = "1.0")]
    initial_pheromone: f64,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write an SVG plot of the best tour to this file
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Marker radius in the SVG plot
    #[arg(long, default_value_t = DEFAULT_POINT_RADIUS)]
    point_radius: f64,
}

impl RunParams {
    fn config(&self) -> AcoConfig {
        AcoConfig {
            colony_size: self.colony_size,
            alpha: self.alpha,
            beta: self.beta,
            rho: self.rho,
            pheromone_deposit_weight: self.deposit_weight,
            initial_pheromone: self.initial_pheromone,
            steps: self.steps,
            seed: self.seed,
        }
    }

    fn load_nodes(&self) -> Result<NodeList> {
        match &self.nodes {
            Some(path) => NodeList::from_csv_path(path)
                .with_context(|| format!("loading nodes from {}", path.display())),
            None => Ok(NodeList::sample()),
        }
    }

    fn plot(&self, result: &AcoResult, nodes: &NodeList) -> Result<(), u_antcolony::AcoError> {
        if let Some(path) = &self.svg {
            TourPlot::default()
                .with_point_radius(self.point_radius)
                .save(path, &result.best_tour, nodes.points(), "ant colony tour")?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Solve { params } => {
            let nodes = params.load_nodes()?;
            let config = params.config();
            info!(nodes = nodes.len(), "solving");

            let result = Colony::new(nodes.points(), &config)?.run()?;
            println!("{result}");
            params.plot(&result, &nodes)?;
        }

        Commands::Interactive { params } => {
            let nodes = params.load_nodes()?;
            let mut session = EditorSession::new(nodes, params.config());
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            session.drive(stdin.lock(), &mut stdout, |result, nodes| {
                params.plot(result, nodes)
            })?;
        }
    }

    Ok(())
}
