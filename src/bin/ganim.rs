//! CLI entry point for the `ganim` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_animate::cli::commands;
use graph_animate::config::resolve_config;
use graph_animate::types::TraversalMode;

#[derive(Parser)]
#[command(
    name = "ganim",
    about = "graph-animate CLI — draw graphs as SVG and animate BFS/DFS over them"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Path to a TOML animation config (falls back to $GANIM_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a graph description as an SVG scene
    Render {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Output SVG path (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print the planned visit order of a traversal
    Traverse {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Traversal mode: bfs or dfs
        #[arg(long, default_value = "bfs")]
        mode: String,
        /// Starting node index
        #[arg(long, default_value = "0")]
        start: usize,
    },
    /// Write one SVG frame per traversal step
    Animate {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Traversal mode: bfs or dfs
        #[arg(long, default_value = "bfs")]
        mode: String,
        /// Starting node index
        #[arg(long, default_value = "0")]
        start: usize,
        /// Directory receiving the frames
        #[arg(long)]
        out_dir: PathBuf,
        /// Write frames on the real step delay
        #[arg(long)]
        realtime: bool,
    },
    /// Display information about a graph description
    Info {
        /// Path to the graph JSON file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let config = match resolve_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    };

    let result = match cli.command {
        Commands::Render { file, out } => commands::cmd_render(&file, out.as_deref(), &config),
        Commands::Traverse { file, mode, start } => mode
            .parse::<TraversalMode>()
            .and_then(|mode| commands::cmd_traverse(&file, mode, start, &config, json)),
        Commands::Animate {
            file,
            mode,
            start,
            out_dir,
            realtime,
        } => mode.parse::<TraversalMode>().and_then(|mode| {
            commands::cmd_animate(&file, mode, start, &out_dir, realtime, &config, json)
        }),
        Commands::Info { file } => commands::cmd_info(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}
