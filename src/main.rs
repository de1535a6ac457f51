//! Marjana - run a cleaning agent on a generated grid world.
//!
//! Usage:
//!   marjana --agent model_based --grid-seed 42 --show-grid
//!   marjana --config configs/config.yaml

use std::path::PathBuf;

use clap::Parser;
use log::info;

use marjana::{AgentKind, MarjanaConfig, Result, Simulation};

/// Grid-world cleaning agent simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (defaults to configs/config.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Agent strategy: reflexive, model_based, utility_based, goal_based
    #[arg(short, long)]
    agent: Option<AgentKind>,

    /// Seed for world generation
    #[arg(long)]
    grid_seed: Option<u64>,

    /// Seed for the reflexive agent's RNG
    #[arg(long)]
    agent_seed: Option<u64>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Tick limit for the run
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Print the grid before and after the run
    #[arg(long)]
    show_grid: bool,
}

impl Args {
    /// Command-line values override the file.
    fn apply(&self, config: &mut MarjanaConfig) {
        if let Some(kind) = self.agent {
            config.agent.kind = kind;
        }
        if let Some(seed) = self.grid_seed {
            config.grid.seed = Some(seed);
        }
        if let Some(seed) = self.agent_seed {
            config.agent.seed = Some(seed);
        }
        if let Some(width) = self.width {
            config.grid.width = width;
        }
        if let Some(height) = self.height {
            config.grid.height = height;
        }
        if let Some(max_ticks) = self.max_ticks {
            config.simulation.max_ticks = max_ticks;
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("marjana=info"))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            MarjanaConfig::load(path)?
        }
        None => MarjanaConfig::load_default()?,
    };
    args.apply(&mut config);
    config.validate()?;

    let mut sim = Simulation::from_config(&config)?;
    if args.show_grid {
        println!("{}", sim.world());
    }

    let report = sim.run(config.simulation.max_ticks);

    if args.show_grid {
        println!("{}", sim.world());
    }
    println!("Agent:   {}", report.agent.name());
    println!("Outcome: {}", report.outcome);
    report.summary.print();

    Ok(())
}
