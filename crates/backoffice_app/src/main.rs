mod commands;
mod config;
mod logging;
mod surface;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::logging::LogDestination;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.log, cli.verbose);

    let config = config::load(&cli.config)?;
    match cli.command {
        Commands::Modules => commands::list_modules(&config.catalog),
        Commands::Exists { module } => commands::module_exists(&config.catalog, &module),
        Commands::Poll(args) => commands::poll(&config.poller, args),
        Commands::Chart(args) => commands::chart(args),
    }
}

#[derive(Parser)]
#[command(author, version, about = "Backoffice tools: analytics status polling and extensions")]
struct Cli {
    /// Path to the RON config file.
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    log: LogDestination,
    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List manageable modules with their version and description.
    Modules,
    /// Check whether a module directory is installed on disk.
    Exists { module: String },
    /// Watch a background analytics job until it finishes.
    Poll(PollArgs),
    /// Print chart options for scraped dashboard data.
    Chart(ChartArgs),
}

#[derive(Args)]
pub struct PollArgs {
    /// Page awaiting completion; defaults to the index page.
    #[arg(long)]
    pub page: Option<String>,
    /// Job identifier.
    #[arg(long)]
    pub identifier: Option<String>,
    /// Simulate a page without the long loader (polling never starts).
    #[arg(long)]
    pub no_long_loader: bool,
}

#[derive(Args)]
pub struct ChartArgs {
    /// JSON file with the chart kind and its data.
    #[arg(long)]
    pub input: PathBuf,
    /// Width of the chart container in pixels.
    #[arg(long, default_value_t = 600)]
    pub width: u32,
}
