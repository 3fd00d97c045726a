use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use surfaceplot_core::interpolate::validate_resolution;
use surfaceplot_core::io::load_points;

use crate::summary::print_points_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Input CSV file (header row, last three columns x, y, z)
    pub file: PathBuf,

    /// Resolution factor used to report the grid size
    #[arg(short, long, default_value = "10")]
    pub resolution: usize,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    validate_resolution(args.resolution).context("Invalid --resolution")?;
    let points = load_points(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    print_points_summary(&args.file, &points, args.resolution);
    Ok(())
}
