mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "surfaceplot", about = "Interpolate scattered x,y,z data onto a grid")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show point count, distinct coordinates and ranges of a CSV file
    Info(commands::info::InfoArgs),
    /// Interpolate a CSV file and export image and cross-section tables
    Export(commands::export::ExportArgs),
    /// Print one cross-section as coordinate/value pairs
    Section(commands::section::SectionArgs),
    /// Print or save the default session config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Export(args) => commands::export::run(args),
        Commands::Section(args) => commands::section::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
