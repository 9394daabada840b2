use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use maze_core::layout::{self, SpawnPositions, WallSegment, WorldScale};
use maze_core::logging::{self, LogLevel, TracingConfig};
use maze_core::visualization::render_ascii;
use maze_core::{Maze, MazeConfig, MazeView, SpawnPolicy};

// ============================================================================
// CLI Argument Parsing
// ============================================================================

/// Perfect maze generator with player, adversary and goal placement
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze config file (.json or .ron); flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maze width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Maze height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Never spawn player or adversary on the goal cell
    #[arg(long, default_value_t = false)]
    exclusive_goal: bool,

    /// Print the collaborator export as JSON instead of a drawing
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Baseline log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

/// Everything a geometry/gameplay consumer needs, in one document
#[derive(Serialize)]
struct Export {
    maze: MazeView,
    walls: Vec<WallSegment>,
    positions: SpawnPositions,
}

fn build_config(args: &Args) -> Result<MazeConfig> {
    let mut config = match &args.config {
        Some(path) => MazeConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => MazeConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.exclusive_goal {
        config.spawn_policy = SpawnPolicy::ExclusiveGoal;
    }
    Ok(config)
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_tracing(&TracingConfig::with_level(args.log_level));

    let config = build_config(&args)?;
    let maze = Maze::generate(&config).context("maze generation failed")?;

    if args.json {
        let scale = WorldScale::from(&config);
        let export = Export {
            maze: maze.view(),
            walls: layout::wall_segments(maze.grid(), &scale),
            positions: layout::spawn_positions(maze.spawns(), &scale),
        };
        println!("{}", serde_json::to_string_pretty(&export)?);
    } else {
        println!("{}", render_ascii(maze.grid(), Some(maze.spawns())));
        let spawns = maze.spawns();
        if let Some(seed) = maze.seed() {
            println!("seed: {}", seed.seed);
        }
        println!(
            "player: {}  adversary: {}  goal: {}",
            spawns.player, spawns.adversary, spawns.goal
        );
    }

    Ok(())
}
