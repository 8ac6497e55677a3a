//! citeline - OpenCitations corpus importer
//!
//! Converts the OCC JSON-LD dumps into flat relational CSV tables or
//! Cypher upsert statements for a graph database import.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "citeline")]
#[command(about = "OpenCitations corpus importer")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ./citeline.toml or ~/.config/citeline/config.toml)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Import the corpus as CSV tables
    Load(cmd::load::LoadArgs),
    /// Import the corpus as Cypher upsert statements
    Graph(cmd::graph::GraphArgs),
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Progress context (TTY auto-detect)
    let progress = citeline_core::ProgressContext::new();

    // Logging:
    //   TTY:     quiet (warn) unless --debug  — progress bars show activity
    //   non-TTY: info unless --debug          — logs are the only progress indicator
    let is_tty = progress.is_tty();
    let multi = if is_tty { Some(progress.multi()) } else { None };
    let quiet = if is_tty { !cli.debug } else { false };
    citeline_core::init_logging(quiet, cli.debug, multi);

    // Load configuration
    let config = if let Some(path) = cli.config {
        Config::from_file(&path)?
    } else {
        Config::load()?
    };

    match cli.command {
        Command::Load(args) => cmd::load::run(args, &config, &progress),
        Command::Graph(args) => cmd::graph::run(args, &config, &progress),
        Command::Config => {
            use comfy_table::{
                Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
            };

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_header(vec![
                    Cell::new("Setting").fg(Color::Cyan),
                    Cell::new("Value").fg(Color::Cyan),
                ]);

            table.add_row(vec![
                "Data directory",
                &config.paths.data_dir.display().to_string(),
            ]);
            table.add_row(vec![
                "Database directory",
                &config.paths.db_dir.display().to_string(),
            ]);

            eprintln!("\n{table}");
            Ok(())
        }
    }
}
