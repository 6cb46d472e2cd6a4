//! citeboard - citation dashboard builder
//!
//! Resolves a roster of authors against the OpenAlex API, computes
//! per-author citation metrics, and writes the JSON data file behind
//! the dashboard.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "citeboard")]
#[command(about = "Citation dashboard builder")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ./citeboard.toml or ~/.config/citeboard/config.toml)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Build the dashboard data file from the roster
    Build(cmd::build::BuildArgs),
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Progress context (TTY auto-detect)
    let progress = citeboard_core::ProgressContext::new();

    // Logging:
    //   TTY:     warn unless --debug (the progress bar shows activity)
    //   non-TTY: info unless --debug (logs are the only progress indicator)
    let is_tty = progress.is_tty();
    let multi = if is_tty { Some(progress.multi()) } else { None };
    let quiet = if is_tty { !cli.debug } else { false };
    citeboard_core::init_logging(quiet, cli.debug, multi);

    // Load configuration
    let config = if let Some(path) = cli.config {
        Config::from_file(&path)?
    } else {
        Config::load()?
    };

    match cli.command {
        Command::Build(args) => cmd::build::run(args, &config, &progress),
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

            table.add_row(vec!["Roster", &config.roster.path.display().to_string()]);
            table.add_row(vec!["Output", &config.output.path.display().to_string()]);
            table.add_row(vec!["Base URL", &config.openalex.base_url]);
            table.add_row(vec![
                "Mailto",
                config.openalex.mailto.as_deref().unwrap_or("not set"),
            ]);
            table.add_row(vec![
                "Search per-page",
                &config.openalex.search_per_page.to_string(),
            ]);
            table.add_row(vec![
                "Works per-page",
                &config.openalex.works_per_page.to_string(),
            ]);
            table.add_row(vec!["Max works", &config.openalex.max_works.to_string()]);

            eprintln!("\n{table}");
            Ok(())
        }
    }
}
