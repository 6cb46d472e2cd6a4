//! Build subcommand - resolve the roster and write the dashboard artifact

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use citeboard_core::ProgressContext;
use citeboard_openalex::config::DEFAULT_MAILTO;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Roster CSV path
    #[arg(short, long)]
    pub roster: Option<PathBuf>,

    /// Output JSON path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Contact address sent with every API request (empty disables)
    #[arg(long)]
    pub mailto: Option<String>,

    /// Maximum works fetched per author
    #[arg(long)]
    pub max_works: Option<usize>,

    /// Process only the first N roster rows
    #[arg(short = 'l', long)]
    pub limit: Option<usize>,
}

pub fn run(args: BuildArgs, config: &Config, progress: &ProgressContext) -> Result<()> {
    let roster_path = args.roster.unwrap_or_else(|| config.roster.path.clone());
    let output_path = args.output.unwrap_or_else(|| config.output.path.clone());
    let mailto = args
        .mailto
        .or_else(|| config.openalex.mailto.clone())
        .unwrap_or_else(|| DEFAULT_MAILTO.to_string());

    let oa_config = citeboard_openalex::Config {
        roster_path,
        output_path,
        base_url: config.openalex.base_url.clone(),
        mailto,
        search_per_page: config.openalex.search_per_page,
        works_per_page: config.openalex.works_per_page,
        max_works: args.max_works.unwrap_or(config.openalex.max_works),
        limit: args.limit,
    };

    log::info!("Building dashboard");
    log::info!("  Roster: {}", oa_config.roster_path.display());
    log::info!("  Output: {}", oa_config.output_path.display());

    let summary = citeboard_openalex::run(&oa_config, progress)?;

    if progress.is_tty() {
        summary.print();
    } else {
        summary.log();
    }

    Ok(())
}
