//! Graph subcommand - import the corpus as Cypher upsert statements

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use citeline_core::ProgressContext;
use citeline_occ::SinkMode;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Corpus data directory
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Database directory (statement files land in <db>/import)
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Maximum number of files to process per kind
    #[arg(short = 'l', long)]
    pub limit: Option<usize>,
}

pub fn run(args: GraphArgs, config: &Config, progress: &ProgressContext) -> Result<()> {
    let occ_config = citeline_occ::Config {
        data_dir: args.data.unwrap_or_else(|| config.paths.data_dir.clone()),
        db_dir: args.db.unwrap_or_else(|| config.paths.db_dir.clone()),
        max_files: args.limit,
        mode: SinkMode::Graph,
    };

    log::info!("Importing OCC corpus as Cypher statements");
    log::info!("  Data: {}", occ_config.data_dir.display());
    log::info!("  Output: {}", occ_config.import_dir().display());

    let summary = citeline_occ::run(&occ_config, progress)?;

    super::print_summary("Graph import", &summary);

    if summary.failed_files() > 0 {
        anyhow::bail!("Some files failed");
    }

    Ok(())
}
